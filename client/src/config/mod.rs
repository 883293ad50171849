mod config;

pub use config::{Config, WindowConfig, config_manager_at, get_config_manager};
