use crate::paths::PathManager;
use movielist_models::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Overrides the default `<data_dir>/movies.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Language for the watched/not watched label
    #[serde(default)]
    pub locale: Locale,
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config, or fall back to defaults when the file doesn't exist yet
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(data_file) = &self.data_file {
            if data_file.as_os_str().is_empty() {
                return Err(anyhow::anyhow!("data_file cannot be empty"));
            }
            if data_file.is_dir() {
                return Err(anyhow::anyhow!("data_file points to a directory: {}", data_file.display()));
            }
        }
        Ok(())
    }

    /// Where the movie list lives for this configuration
    pub fn movies_file(&self, paths: &PathManager) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| paths.movies_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/my-movies.json")),
            locale: Locale::Russian,
        };

        config.save_to_file(file.path()).unwrap();
        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_defaults_from_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.data_file, None);
        assert_eq!(loaded.locale, Locale::English);
    }

    #[test]
    fn test_config_locale_code() {
        let config: Config = toml::from_str("locale = \"ru\"").unwrap();
        assert_eq!(config.locale, Locale::Russian);
        assert!(toml::from_str::<Config>("locale = \"de\"").is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_validate() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.data_file = Some(PathBuf::new());
        assert!(config.validate().is_err());

        config.data_file = Some(dir.path().to_path_buf());
        assert!(config.validate().is_err());

        config.data_file = Some(dir.path().join("movies.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_movies_file() {
        let paths = PathManager::with_base("/srv/movielist");
        let mut config = Config::default();
        assert_eq!(config.movies_file(&paths), PathBuf::from("/srv/movielist/data/movies.json"));

        config.data_file = Some(PathBuf::from("/elsewhere/list.json"));
        assert_eq!(config.movies_file(&paths), PathBuf::from("/elsewhere/list.json"));
    }
}
