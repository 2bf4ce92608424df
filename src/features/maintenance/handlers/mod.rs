pub mod maintenance_handler;
