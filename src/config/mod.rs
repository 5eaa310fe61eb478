//! @acp:module "Configuration"
//! @acp:summary "Project configuration, user settings and their precedence"
//! @acp:domain cli
//! @acp:layer config
//!
//! Where the randomize flag comes from, highest priority first:
//! 1. `--randomize` on the command line
//! 2. `randomize` in the project's `.rci.config.json`
//! 3. `randomize` in the user settings file
//! 4. `false`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::corpus::CorpusIndex;

/// Default project config file name
pub const CONFIG_FILE: &str = ".rci.config.json";

/// @acp:summary "Project configuration loaded from .rci.config.json"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Start excerpts at a random sentence or paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomize: Option<bool>,

    /// Custom corpus file (JSON array of paragraphs, or blank-line separated text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,
}

impl Config {
    /// @acp:summary "Load config from a file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config from a file, or defaults when the file does not exist"
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// @acp:summary "Index the configured corpus, or the built-in one"
    ///
    /// A relative corpus path is resolved against `base`.
    pub fn corpus_index(&self, base: &Path) -> crate::Result<Option<CorpusIndex>> {
        match &self.corpus {
            Some(path) => {
                let path = if path.is_relative() {
                    base.join(path)
                } else {
                    path.clone()
                };
                tracing::debug!("Loading corpus from {}", path.display());
                CorpusIndex::from_file(path).map(Some)
            }
            None => Ok(None),
        }
    }
}

/// @acp:summary "Per-user settings persisted between runs"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub randomize: bool,
}

impl Settings {
    /// `<config dir>/rci/settings.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rci").join("settings.json"))
    }

    /// Load settings; a missing file yields defaults
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Settings from the default location; unreadable files are ignored
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
            Self::default()
        })
    }
}

/// Resolve the randomize flag from all sources
pub fn resolve_randomize(cli: Option<bool>, config: &Config, settings: &Settings) -> bool {
    cli.or(config.randomize).unwrap_or(settings.randomize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = Config {
            randomize: Some(true),
            corpus: Some(PathBuf::from("corpus.txt")),
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_config_load_or_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        std::fs::write(&path, r#"{"randomize": true}"#).unwrap();
        assert_eq!(Config::load_or_default(&path).unwrap().randomize, Some(true));

        std::fs::write(&path, "not json").unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(serde_json::to_string(&config).unwrap(), "{}");
    }

    #[test]
    fn test_corpus_index_relative_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("corpus.txt"), "One. Two.\n\nThree.").unwrap();
        let config = Config {
            randomize: None,
            corpus: Some(PathBuf::from("corpus.txt")),
        };
        let index = config.corpus_index(dir.path()).unwrap().unwrap();
        assert_eq!(index.paragraphs().len(), 2);

        assert!(Config::default().corpus_index(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_corpus_index_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            randomize: None,
            corpus: Some(PathBuf::from("missing.txt")),
        };
        assert!(config.corpus_index(dir.path()).is_err());
    }

    #[test]
    fn test_settings_missing_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path().join("nope.json")).unwrap();
        assert!(!settings.randomize);
    }

    #[test]
    fn test_settings_save_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rci").join("settings.json");
        Settings { randomize: true }.save(&path).unwrap();
        assert!(Settings::load(&path).unwrap().randomize);
    }

    #[test]
    fn test_randomize_precedence() {
        let on = Settings { randomize: true };
        let off = Settings::default();
        let config_off = Config {
            randomize: Some(false),
            corpus: None,
        };

        assert!(!resolve_randomize(None, &Config::default(), &off));
        assert!(resolve_randomize(None, &Config::default(), &on));
        assert!(!resolve_randomize(None, &config_off, &on));
        assert!(resolve_randomize(Some(true), &config_off, &off));
    }
}
