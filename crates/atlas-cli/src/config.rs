//! Runtime configuration: TOML file, environment, and command-line overrides.
//!
//! Precedence, highest first: command-line flags, `ATLAS_API_BASE_URL`, the
//! TOML file (`--config`, else `./atlas.toml` when present), defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use atlas_transform::MAX_COMPARE;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "ATLAS_API_BASE_URL";

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "atlas.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Backend base URL, e.g. `http://localhost:8000`.
    pub api_base_url: Option<String>,
    /// Offline data directory; wins over `api_base_url`.
    pub data_dir: Option<PathBuf>,
    pub timeout_secs: u64,
    /// Maximum number of comparison countries.
    pub max_compare: usize,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            data_dir: None,
            timeout_secs: 30,
            max_compare: MAX_COMPARE,
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Which backend a command talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceChoice {
    Api { base_url: String, timeout: Duration },
    Offline { dir: PathBuf },
}

impl AtlasConfig {
    /// Parses a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse atlas config")
    }

    /// Reads `path`, or `./atlas.toml` when no path is given. A missing
    /// default file yields defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !explicit && !path.is_file() {
            debug!("no {DEFAULT_CONFIG_FILE} in working directory, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config =
            Self::from_toml(&text).with_context(|| format!("in {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Applies an environment value for the API URL.
    #[must_use]
    pub fn with_env_api_url(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|url| !url.trim().is_empty()) {
            self.api_base_url = Some(url);
        }
        self
    }

    /// Applies command-line values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.api_base_url.is_some() {
            self.api_base_url = overrides.api_base_url;
        }
        if overrides.data_dir.is_some() {
            self.data_dir = overrides.data_dir;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = timeout;
        }
        self
    }

    /// Resolves the data source. The data directory wins over the API.
    pub fn source_choice(&self) -> Result<SourceChoice> {
        if let Some(dir) = &self.data_dir {
            return Ok(SourceChoice::Offline { dir: dir.clone() });
        }
        if let Some(base_url) = &self.api_base_url {
            return Ok(SourceChoice::Api {
                base_url: base_url.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            });
        }
        bail!("no data source: pass --data-dir or --api-url, or set {API_URL_ENV}")
    }
}
