pub mod config;
pub mod layout;
pub mod system_order;
