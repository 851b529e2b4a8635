pub mod conn_pool;
