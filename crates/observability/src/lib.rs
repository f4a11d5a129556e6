//! Logging setup shared by binaries.
//!
//! Nothing here installs a global subscriber: callers get a
//! [`tracing::Dispatch`] and decide where it is in effect.

/// Log destination and filter, read from the environment.
pub mod config;

/// Logger construction and the line format.
pub mod logger;

pub use config::LogConfig;
pub use logger::{LineFormat, file_logger, logger_for_writer};
