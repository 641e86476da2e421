//! Knowledge base: the context object every operation runs against.
//!
//! Owns the frame registry, the method table, and engine settings. There is
//! no process-global state; independent knowledge bases can coexist.

use crate::config::{EngineConfig, FramesetsConfig};
use crate::error::FrameError;
use crate::frame::{FrameRegistry, FrameStorage};
use crate::method::{Method, MethodTable};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

/// A knowledge base behind a mutex, for callers that share one across threads.
///
/// Procedures registered in the method table receive only a frame name and
/// must not lock the same knowledge base: demons run while it is held.
pub type SharedKnowledgeBase = Arc<Mutex<KnowledgeBase>>;

/// Frames, methods, and engine settings
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    pub(crate) registry: FrameRegistry,
    pub(crate) methods: MethodTable,
    pub(crate) engine: EngineConfig,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine_config(engine: EngineConfig) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    pub fn from_config(config: &FramesetsConfig) -> Self {
        Self::with_engine_config(config.engine.clone())
    }

    pub fn into_shared(self) -> SharedKnowledgeBase {
        Arc::new(Mutex::new(self))
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }

    pub fn registry(&self) -> &FrameRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FrameRegistry {
        &mut self.registry
    }

    pub fn methods(&self) -> &MethodTable {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> &mut MethodTable {
        &mut self.methods
    }

    /// Shorthand for registering a procedure in the method table.
    pub fn register_method(&mut self, name: impl Into<String>, method: impl Method + 'static) -> bool {
        self.methods.register(name, method)
    }

    /// Write a frame to its own file.
    pub fn store_frame(&self, storage: &FrameStorage, name: &str) -> Result<(), FrameError> {
        let frame = self
            .registry
            .get(name)
            .ok_or_else(|| FrameError::FrameNotFound(name.to_string()))?;
        storage.store(frame)?;
        info!(frame = name, "Frame stored");
        Ok(())
    }

    /// Read a frame from its file into the registry.
    ///
    /// Fails if the frame is already present in memory or has no file.
    pub fn load_frame(&mut self, storage: &FrameStorage, name: &str) -> Result<(), FrameError> {
        if self.registry.exists(name) {
            return Err(FrameError::FrameExists(name.to_string()));
        }
        let frame = storage
            .load(name)?
            .ok_or_else(|| FrameError::FrameNotFound(name.to_string()))?;
        self.registry.insert(frame);
        info!(frame = name, "Frame loaded");
        Ok(())
    }

    /// Load every stored frame not already in memory. Returns how many were loaded.
    pub fn load_all(&mut self, storage: &FrameStorage) -> Result<usize, FrameError> {
        let mut loaded = 0;
        for name in storage.list()? {
            if self.registry.exists(&name) {
                continue;
            }
            self.load_frame(storage, &name)?;
            loaded += 1;
        }
        Ok(loaded)
    }
}
