//! Demon facets, addressed explicitly by `(frame, slot, kind)`.
//!
//! Demon operations never delegate and never fire other demons.

use crate::frame::DemonKind;
use crate::kb::KnowledgeBase;

impl KnowledgeBase {
    pub fn exists_demon(&self, frame: &str, slot: &str, kind: DemonKind) -> bool {
        self.get_demon(frame, slot, kind).is_some()
    }

    /// Install a demon with an empty method name.
    pub fn create_demon(&mut self, frame: &str, slot: &str, kind: DemonKind) -> bool {
        match self.registry.slot_mut(frame, slot) {
            Some(s) if !s.demons.contains_key(&kind) => {
                s.demons.insert(kind, String::new());
                true
            }
            _ => false,
        }
    }

    pub fn remove_demon(&mut self, frame: &str, slot: &str, kind: DemonKind) -> bool {
        self.registry
            .slot_mut(frame, slot)
            .map(|s| s.demons.remove(&kind).is_some())
            .unwrap_or(false)
    }

    /// Method name the demon designates.
    pub fn get_demon(&self, frame: &str, slot: &str, kind: DemonKind) -> Option<String> {
        self.registry
            .get(frame)
            .and_then(|f| f.slot(slot))
            .and_then(|s| s.demon(kind))
            .map(str::to_string)
    }

    pub fn put_demon(&mut self, frame: &str, slot: &str, kind: DemonKind, method: &str) -> bool {
        match self
            .registry
            .slot_mut(frame, slot)
            .and_then(|s| s.demons.get_mut(&kind))
        {
            Some(current) => {
                *current = method.to_string();
                true
            }
            None => false,
        }
    }

    /// Run a demon directly, outside the operation it hooks.
    ///
    /// Returns false if the demon is absent or names no registered method.
    pub fn execute_demon(&self, frame: &str, slot: &str, kind: DemonKind) -> bool {
        self.fire_demon(frame, slot, kind)
    }
}
