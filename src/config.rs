use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::language::SupportedLanguage;

pub const DEFAULT_DURATION_SECS: u64 = 10;

/// Persisted defaults, stored as json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub duration_secs: u64,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            language: SupportedLanguage::English.file_stem(),
        }
    }
}

impl From<&RuntimeSettings> for Config {
    fn from(rs: &RuntimeSettings) -> Self {
        Self {
            duration_secs: rs.duration_secs,
            language: rs.language.file_stem(),
        }
    }
}

/// Effective settings for this run: config file values overridden by the cli
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub duration_secs: u64,
    pub language: SupportedLanguage,
    pub custom_words: Option<String>,
}

impl RuntimeSettings {
    pub fn resolve(
        cfg: &Config,
        duration_secs: Option<u64>,
        language: Option<SupportedLanguage>,
        custom_words: Option<String>,
    ) -> Self {
        let language = language.unwrap_or_else(|| {
            SupportedLanguage::from_file_stem(&cfg.language).unwrap_or_else(|| {
                warn!("unknown language '{}' in config, using english", cfg.language);
                SupportedLanguage::English
            })
        });

        Self {
            duration_secs: duration_secs.unwrap_or(cfg.duration_secs).max(1),
            language,
            custom_words,
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::resolve(&Config::default(), None, None, None)
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "wordsprint") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("wordsprint_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("ignoring unreadable config {}: {e}", self.path.display());
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
