use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::DEFAULT_ENDPOINT;
use crate::error::{Result, UserListError};
use crate::widget::DEFAULT_SKELETON_COUNT;

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct Config {
    pub endpoint: Option<String>,
    pub skeleton_count: Option<usize>,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| UserListError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&contents).map_err(|e| UserListError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userlist")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserListError::NoConfigDir)
    }

    /// Resolve the endpoint, preferring an explicit argument over the config
    /// file, and validate it.
    pub fn endpoint(&self, explicit: Option<&str>) -> Result<String> {
        let endpoint = explicit
            .or(self.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT);

        match Url::parse(endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(endpoint.to_string()),
            _ => Err(UserListError::InvalidUrl(endpoint.to_string())),
        }
    }

    pub fn skeleton_count(&self) -> usize {
        self.skeleton_count.unwrap_or(DEFAULT_SKELETON_COUNT)
    }

    /// Output path, preferring an explicit argument. `None` means stdout.
    pub fn resolve_output(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.output.clone())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write_err = |e: std::io::Error| UserListError::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = toml::to_string(self)?;
        std::fs::write(path, contents).map_err(write_err)
    }
}
