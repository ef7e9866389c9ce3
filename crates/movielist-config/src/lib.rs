pub mod config;
pub mod paths;

pub use config::Config;
pub use paths::{PathManager, container_base_path};
