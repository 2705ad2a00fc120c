//! Application configuration. Data directory and validation mode.

use crate::domain::Strictness;
use serde::Deserialize;

/// Default directory holding the JSONL collections.
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory of `{collection}.jsonl` files. Read from ZWERM_SCHEMA_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Reject keys a record kind does not declare. Read from ZWERM_SCHEMA_STRICT.
    #[serde(default)]
    pub strict: Option<bool>,
}

impl AppConfig {
    /// Load from ZWERM_SCHEMA_* env vars and, if ZWERM_SCHEMA_CONFIG names
    /// one, a config file. Env vars win over the file.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("ZWERM_SCHEMA_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("ZWERM_SCHEMA").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the data directory. Defaults to DEFAULT_DATA_DIR.
    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    /// Strictness from config; `force_strict` (e.g. a CLI flag) overrides a lenient setting.
    pub fn strictness(&self, force_strict: bool) -> Strictness {
        if force_strict || self.strict.unwrap_or(false) {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }
}
