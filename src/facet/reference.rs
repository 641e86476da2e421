//! Reference facets.
//!
//! A reference names the frame that value and method operations on this slot
//! are forwarded to. Its own lifecycle never delegates: every operation here
//! acts on the named frame's slot.

use crate::frame::{DemonKind, Facet};
use crate::kb::KnowledgeBase;
use tracing::debug;

impl KnowledgeBase {
    /// Whether `(frame, slot)` carries a reference facet. Fires no demon.
    pub fn exists_reference_quiet(&self, frame: &str, slot: &str) -> bool {
        self.registry
            .get(frame)
            .and_then(|f| f.slot(slot))
            .and_then(|s| s.reference())
            .is_some()
    }

    /// Whether `(frame, slot)` carries a reference facet. Fires `ifexistr` when it does.
    pub fn exists_reference(&self, frame: &str, slot: &str) -> bool {
        if !self.exists_reference_quiet(frame, slot) {
            return false;
        }
        self.fire_demon(frame, slot, DemonKind::IfExistR);
        true
    }

    /// Install an empty reference. Fails if the slot already holds any primary facet.
    pub fn create_reference(&mut self, frame: &str, slot: &str) -> bool {
        match self.registry.slot_mut(frame, slot) {
            Some(s) if s.facet.is_none() => s.facet = Some(Facet::Reference(String::new())),
            _ => return false,
        }
        self.fire_demon(frame, slot, DemonKind::IfCreateR);
        true
    }

    pub fn remove_reference(&mut self, frame: &str, slot: &str) -> bool {
        if !self.exists_reference_quiet(frame, slot) {
            return false;
        }
        self.fire_demon(frame, slot, DemonKind::IfRemoveR);
        if let Some(s) = self.registry.slot_mut(frame, slot) {
            s.facet = None;
            debug!(frame, slot, "Facet removed");
        }
        true
    }

    /// Name of the referenced frame.
    pub fn get_reference(&self, frame: &str, slot: &str) -> Option<String> {
        let target = self
            .registry
            .get(frame)
            .and_then(|f| f.slot(slot))
            .and_then(|s| s.reference())?
            .to_string();
        self.fire_demon(frame, slot, DemonKind::IfGetR);
        Some(target)
    }

    /// Point the reference at `target`, then fire `ifputr`. The target need not exist.
    pub fn put_reference(&mut self, frame: &str, slot: &str, target: &str) -> bool {
        match self.registry.slot_mut(frame, slot).and_then(|s| s.facet.as_mut()) {
            Some(Facet::Reference(current)) => *current = target.to_string(),
            _ => return false,
        }
        debug!(frame, slot, "Facet written");
        self.fire_demon(frame, slot, DemonKind::IfPutR);
        true
    }

    /// Frames visited following references for `slot`, starting at `frame`.
    ///
    /// Stops at the first frame without a reference, skips frames lacking the
    /// slot, and stops without repeating when a frame comes round again.
    /// Fires no demons.
    pub fn reference_path(&self, frame: &str, slot: &str) -> Vec<String> {
        let mut path: Vec<String> = Vec::new();
        let mut current = frame.to_string();
        while let Some(s) = self.registry.get(&current).and_then(|f| f.slot(slot)) {
            if path.contains(&current) {
                break;
            }
            let next = s.reference().map(str::to_string);
            path.push(current);
            match next {
                Some(next) => current = next,
                None => break,
            }
        }
        path
    }
}
