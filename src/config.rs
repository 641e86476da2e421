//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file,
//! then the workspace config file, then `FRAMESETS_*` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use config::Environment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod paths;
mod sources;

pub use paths::{default_frames_dir, default_log_file};
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FramesetsConfig {
    /// Where frames are persisted
    #[serde(default)]
    pub storage: StorageConfig,

    /// Facet engine behavior
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Frame storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per frame. Relative paths resolve against the workspace root.
    #[serde(default = "default_frames_dir")]
    pub frames_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            frames_dir: default_frames_dir(),
        }
    }
}

impl StorageConfig {
    /// Frames directory resolved against `workspace_root`.
    pub fn resolve_frames_dir(&self, workspace_root: &Path) -> PathBuf {
        if self.frames_dir.is_absolute() {
            self.frames_dir.clone()
        } else {
            workspace_root.join(&self.frames_dir)
        }
    }
}

/// Facet engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of reference hops a delegating operation may take.
    /// Unset means unbounded; cycles are still detected.
    #[serde(default)]
    pub max_reference_depth: Option<usize>,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Storage(String),
    Engine(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Engine(msg) => write!(f, "Engine: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FramesetsConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage.frames_dir.as_os_str().is_empty() {
            errors.push(ValidationError::Storage(
                "Frames directory cannot be empty".to_string(),
            ));
        }

        if self.engine.max_reference_depth == Some(0) {
            errors.push(ValidationError::Engine(
                "max_reference_depth must be at least 1 (omit it for unbounded)".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "Invalid log format: {}",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Loads [`FramesetsConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace: defaults, global file, workspace file, environment.
    pub fn load(workspace_root: &Path) -> Result<FramesetsConfig, ApiError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder.add_source(env_source()).build()?;
        let loaded: FramesetsConfig = config.try_deserialize()?;
        Self::validated(loaded)
    }

    /// Load configuration from one explicit file (plus defaults and environment).
    pub fn load_from_file(path: &Path) -> Result<FramesetsConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config = merge::merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path))
            .add_source(env_source())
            .build()?;
        let loaded: FramesetsConfig = config.try_deserialize()?;
        Self::validated(loaded)
    }

    fn validated(config: FramesetsConfig) -> Result<FramesetsConfig, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}

/// `FRAMESETS_ENGINE__MAX_REFERENCE_DEPTH=8` style overrides.
fn env_source() -> Environment {
    Environment::with_prefix("FRAMESETS")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
