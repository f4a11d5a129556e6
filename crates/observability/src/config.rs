use std::path::PathBuf;

/// Environment variable naming the log file.
pub const LOG_PATH_VAR: &str = "INVENTORY_LOG";
/// Environment variable holding the filter directive.
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_PATH: &str = "inventory.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: PathBuf,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Read `INVENTORY_LOG` and `RUST_LOG`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LogConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = lookup(LOG_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.path);
        let filter = lookup(LOG_FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.filter);
        Self { path, filter }
    }
}
