use std::path::{Path, PathBuf};

use crate::{Config, Result, parse::parse_config};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "quickimpl.toml";

/// A quickimpl.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: Option<String>,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content: Some(content),
            config,
        })
    }

    /// Open a config file, falling back to defaults when it doesn't exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }

        Ok(Self {
            path: path.to_path_buf(),
            content: None,
            config: Config::default(),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the config was read from disk.
    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
