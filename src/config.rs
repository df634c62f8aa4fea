use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_BASE_COMMAND: &str = "npx vitest run";

/// How the runner is invoked for a single file or filtered test.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunnerConfig {
    /// Shell text placed first on the command line (e.g. `npx vitest run`).
    pub base_command: String,

    /// Arguments placed after the base command on every invocation.
    pub default_args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_command: DEFAULT_BASE_COMMAND.to_string(),
            default_args: Vec::new(),
        }
    }
}

impl RunnerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string();

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

        let config = match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => return Err(ConfigError::unsupported_format(extension)),
        }
        .map_err(|message| ConfigError::invalid_format(path, message))?;

        debug!(path = %path.display(), base_command = %config.base_command, "loaded runner config");
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
