//! System-level modules
//!
//! - Logging setup for binaries

pub mod logging;

pub use logging::init_logging;
