pub mod config;
pub mod movies;

use color_eyre::Result;
use movielist_config::{Config, PathManager};
use std::path::PathBuf;
use tracing::debug;

/// How a command ended when it didn't hit an unexpected error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The request was refused (bad input, duplicate, unknown id)
    Rejected,
}

/// Config plus the resolved movie file for this invocation
pub struct Session {
    pub paths: PathManager,
    pub config: Config,
    pub movies_file: PathBuf,
}

impl Session {
    /// `file_override` is the global `--file` flag and wins over the config
    pub fn load(file_override: Option<PathBuf>) -> Result<Self> {
        Self::load_with(PathManager::default(), file_override)
    }

    pub fn load_with(paths: PathManager, file_override: Option<PathBuf>) -> Result<Self> {
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        config.validate()
            .map_err(|e| color_eyre::eyre::eyre!("Invalid configuration in {}: {}", config_file.display(), e))?;

        let movies_file = file_override.unwrap_or_else(|| config.movies_file(&paths));
        debug!("Using movie file {:?}", movies_file);

        Ok(Self { paths, config, movies_file })
    }
}
