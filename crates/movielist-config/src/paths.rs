use anyhow::Result;
use std::path::PathBuf;

/// Get the container base path from environment variable, defaulting to "/app"
pub fn container_base_path() -> PathBuf {
    std::env::var("MOVIELIST_BASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/app"))
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("movielist");

        Ok(Self::with_base(base_dir))
    }

    pub fn from_docker_env() -> Self {
        Self::with_base(container_base_path())
    }

    /// Config file at the base, data in a subdirectory
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            data_dir: base.join("data"),
            config_dir: base,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn movies_file(&self) -> PathBuf {
        self.data_dir.join("movies.json")
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // An explicit base path wins; otherwise use the platform config dir
        if std::env::var_os("MOVIELIST_BASE_PATH").is_some() {
            return Self::from_docker_env();
        }

        Self::new().unwrap_or_else(|_| Self::from_docker_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let paths = PathManager::with_base("/srv/movielist");
        assert_eq!(paths.config_file(), PathBuf::from("/srv/movielist/config.toml"));
        assert_eq!(paths.movies_file(), PathBuf::from("/srv/movielist/data/movies.json"));
    }
}
