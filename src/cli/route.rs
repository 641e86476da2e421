//! CLI route: single route table and run context.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_frame_json, format_frame_list, format_frame_text, format_members, format_path,
};
use crate::config::{ConfigLoader, FramesetsConfig};
use crate::error::{ApiError, FrameError};
use crate::frame::{Frame, FrameStorage};
use crate::kb::KnowledgeBase;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded config and the frame store it points at.
pub struct RunContext {
    config: FramesetsConfig,
    storage: FrameStorage,
}

impl RunContext {
    /// Load config (explicit file, or layered from the workspace) and open the frame store.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        frames_dir: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        let frames_dir =
            frames_dir.unwrap_or_else(|| config.storage.resolve_frames_dir(&workspace_root));
        debug!(frames_dir = %frames_dir.display(), "Opening frame store");
        let storage = FrameStorage::new(&frames_dir)?;

        Ok(Self { config, storage })
    }

    pub fn config(&self) -> &FramesetsConfig {
        &self.config
    }

    pub fn storage(&self) -> &FrameStorage {
        &self.storage
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List => Ok(format_frame_list(&self.storage.list()?)),
            Commands::Show { frame, format } => {
                let frame = self.load_one(frame)?;
                match format.as_str() {
                    "json" => format_frame_json(&frame),
                    "text" => Ok(format_frame_text(&frame)),
                    other => Err(ApiError::OutputError(format!(
                        "unknown format '{}' (expected text or json)",
                        other
                    ))),
                }
            }
            Commands::Path { frame, slot } => {
                let kb = self.load_knowledge_base()?;
                Ok(format_path(frame, slot, &kb.reference_path(frame, slot)))
            }
            Commands::Resolve { frame, slot } => {
                let kb = self.load_knowledge_base()?;
                Ok(kb.resolve(frame, slot)?)
            }
            Commands::Members { frame } => {
                let loaded = self.load_one(frame)?;
                if !loaded.is_frameset() {
                    return Ok(format!("{} is not a frameset.", frame));
                }
                Ok(format_members(frame, loaded.members()))
            }
        }
    }

    fn load_one(&self, name: &str) -> Result<Frame, ApiError> {
        self.storage
            .load(name)?
            .ok_or_else(|| ApiError::FrameError(FrameError::FrameNotFound(name.to_string())))
    }

    fn load_knowledge_base(&self) -> Result<KnowledgeBase, ApiError> {
        let mut kb = KnowledgeBase::from_config(&self.config);
        let loaded = kb.load_all(&self.storage)?;
        info!(frames = loaded, "Knowledge base loaded from store");
        Ok(kb)
    }
}
