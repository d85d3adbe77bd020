//! CLI configuration.
//!
//! Sources, later ones winning:
//! - optional file named by `TRACKER_CONFIG`
//! - `TRACKER_`-prefixed environment variables (`TRACKER_LOG_LEVEL`, `TRACKER_LOG_DIR`)

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// `trace|debug|info|warn|error`; defaults by build mode.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files. File logging is off when unset.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl CliConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Ok(path) = std::env::var("TRACKER_CONFIG") {
            builder = builder.add_source(config::File::with_name(&path));
        }
        builder = builder.add_source(config::Environment::with_prefix("TRACKER"));
        builder.build()?.try_deserialize()
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| tracker_core::default_log_level())
    }
}
