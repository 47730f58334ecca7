//! Graph store connection settings.
//!
//! Resolution order, later wins:
//! 1. Built-in default (`http://localhost:8000/api/v1`, no API key)
//! 2. `$CONFIG_DIR/project-graph/config.json`
//! 3. `PROJECT_GRAPH_URL` / `PROJECT_GRAPH_API_KEY`
//! 4. Command line flags

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "project-graph";
const CONFIG_FILE: &str = "config.json";

/// Default URL for a local graph store.
pub const DEFAULT_URL: &str = "http://localhost:8000/api/v1";

pub const URL_ENV: &str = "PROJECT_GRAPH_URL";
pub const API_KEY_ENV: &str = "PROJECT_GRAPH_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Base URL of the graph store API.
    pub base_url: String,
    /// Bearer token sent with every request, if set.
    pub api_key: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
        }
    }
}

impl GraphConfig {
    /// Load configuration from the user's config directory.
    /// Returns default config if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let path = match get_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("No config directory, using defaults: {}", e);
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Overlay values from `PROJECT_GRAPH_URL` and `PROJECT_GRAPH_API_KEY`.
    pub fn apply_env(self) -> Self {
        self.with_overrides(std::env::var(URL_ENV).ok(), std::env::var(API_KEY_ENV).ok())
    }

    /// Replace fields for which a value is given.
    pub fn with_overrides(mut self, base_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if api_key.is_some() {
            self.api_key = api_key;
        }
        self
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
