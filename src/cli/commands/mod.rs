pub mod build;
pub mod config_management;
pub mod validate;

pub use build::build_link;
pub use config_management::generate_config;
pub use validate::validate_link;
