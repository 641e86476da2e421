//! Frame registry: in-memory mapping from frame name to frame.
//!
//! Structural operations on whole frames and slots. None of these touch
//! facet payloads through the engine, so none of them fire demons or follow
//! references. All operations are total and report failure as `false`.

use crate::frame::{Frame, Slot};
use crate::listset;
use std::collections::HashMap;
use tracing::debug;

/// Frame registry
#[derive(Debug, Clone, Default)]
pub struct FrameRegistry {
    frames: HashMap<String, Frame>,
}

impl FrameRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.frames.contains_key(name)
    }

    /// Frame names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.frames.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Frame> {
        self.frames.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Frame> {
        self.frames.get_mut(name)
    }

    pub(crate) fn slot_mut(&mut self, frame: &str, slot: &str) -> Option<&mut Slot> {
        self.frames.get_mut(frame).and_then(|f| f.slot_mut(slot))
    }

    /// Create a frame with an empty slot list. Fails if the name is taken or empty.
    pub fn create(&mut self, name: &str) -> bool {
        self.insert(Frame::new(name))
    }

    /// Create a frame with an empty slot list and an empty member list.
    pub fn create_frameset(&mut self, name: &str) -> bool {
        self.insert(Frame::new_frameset(name))
    }

    /// Insert a fully built frame under its own name. Fails if the name is taken.
    pub fn insert(&mut self, frame: Frame) -> bool {
        if frame.name().is_empty() || self.exists(frame.name()) {
            return false;
        }
        debug!(frame = frame.name(), "Frame created");
        self.frames.insert(frame.name().to_string(), frame);
        true
    }

    /// Delete a frame. References to it elsewhere are left dangling.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.frames.remove(name).is_some();
        if removed {
            debug!(frame = name, "Frame removed");
        }
        removed
    }

    /// Replace `dst` with a deep copy of `src`.
    pub fn copy(&mut self, src: &str, dst: &str) -> bool {
        let Some(source) = self.frames.get(src) else {
            return false;
        };
        if src == dst {
            return true;
        }
        let copy = source.renamed(dst);
        self.remove(dst);
        self.insert(copy)
    }

    /// True when both frames declare the same slot names.
    pub fn compare(&self, a: &str, b: &str) -> bool {
        match (self.frames.get(a), self.frames.get(b)) {
            (Some(a), Some(b)) => listset::equivalence(&a.slot_names(), &b.slot_names()),
            _ => false,
        }
    }

    /// Copy every slot of `src` that `dst` does not declare. Existing dst slots are kept.
    pub fn merge(&mut self, src: &str, dst: &str) -> bool {
        if !self.exists(dst) {
            return false;
        }
        let Some(source) = self.frames.get(src).cloned() else {
            return false;
        };
        if let Some(target) = self.frames.get_mut(dst) {
            for (name, slot) in source.slots() {
                if !target.has_slot(name) {
                    target.slots_mut().insert(name.to_string(), slot.clone());
                }
            }
        }
        true
    }

    /// Reshape `dst` after `src`.
    ///
    /// `dst` takes `src`'s slot list: slots missing from `src` are dropped and
    /// slots only on `src` are declared empty. On shared slots, facets and
    /// demons whose kind `src` lacks are dropped and the rest take `src`'s
    /// payload. Kinds only on `src` are not added.
    pub fn update(&mut self, dst: &str, src: &str) -> bool {
        if !self.exists(dst) {
            return false;
        }
        let Some(source) = self.frames.get(src).cloned() else {
            return false;
        };
        if let Some(target) = self.frames.get_mut(dst) {
            let slots = target.slots_mut();
            slots.retain(|name, _| source.has_slot(name));
            for (name, src_slot) in source.slots() {
                let dst_slot = slots.entry(name.to_string()).or_default();
                reconcile_slot(dst_slot, src_slot, true);
            }
        }
        true
    }

    /// Drop from `dst` everything `src` lacks, keeping the intersection.
    pub fn filter(&mut self, src: &str, dst: &str) -> bool {
        if !self.exists(dst) {
            return false;
        }
        let Some(source) = self.frames.get(src).cloned() else {
            return false;
        };
        if let Some(target) = self.frames.get_mut(dst) {
            let slots = target.slots_mut();
            slots.retain(|name, _| source.has_slot(name));
            for (name, dst_slot) in slots.iter_mut() {
                if let Some(src_slot) = source.slot(name) {
                    reconcile_slot(dst_slot, src_slot, false);
                }
            }
        }
        true
    }

    pub fn slot_exists(&self, frame: &str, slot: &str) -> bool {
        self.frames
            .get(frame)
            .map(|f| f.has_slot(slot))
            .unwrap_or(false)
    }

    /// Declare an empty slot. Fails if the frame is missing or the slot exists.
    pub fn create_slot(&mut self, frame: &str, slot: &str) -> bool {
        match self.frames.get_mut(frame) {
            Some(f) if !f.has_slot(slot) => {
                f.slots_mut().insert(slot.to_string(), Slot::default());
                true
            }
            _ => false,
        }
    }

    /// Remove a slot together with all its facets and demons.
    pub fn remove_slot(&mut self, frame: &str, slot: &str) -> bool {
        self.frames
            .get_mut(frame)
            .map(|f| f.slots_mut().remove(slot).is_some())
            .unwrap_or(false)
    }

    /// Declared slot names of a frame, sorted. Empty if the frame is missing.
    pub fn list_slots(&self, frame: &str) -> Vec<String> {
        self.frames
            .get(frame)
            .map(Frame::slot_names)
            .unwrap_or_default()
    }

    /// Copy one slot with all facets into `dst`, overwriting a slot of the same name.
    pub fn copy_slot(&mut self, src: &str, slot: &str, dst: &str) -> bool {
        if !self.exists(dst) {
            return false;
        }
        let Some(copy) = self.frames.get(src).and_then(|f| f.slot(slot)).cloned() else {
            return false;
        };
        if let Some(target) = self.frames.get_mut(dst) {
            target.slots_mut().insert(slot.to_string(), copy);
        }
        true
    }

    /// True when the slot exists on both frames with identical facets and payloads.
    pub fn compare_slot(&self, a: &str, slot: &str, b: &str) -> bool {
        match (
            self.frames.get(a).and_then(|f| f.slot(slot)),
            self.frames.get(b).and_then(|f| f.slot(slot)),
        ) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Facet type tags present on a slot. Empty if the slot is missing.
    pub fn list_facet_kinds(&self, frame: &str, slot: &str) -> Vec<String> {
        self.frames
            .get(frame)
            .and_then(|f| f.slot(slot))
            .map(|s| s.kinds().iter().map(|k| k.as_str().to_string()).collect())
            .unwrap_or_default()
    }

    /// Slots of a frame carrying a reference facet, sorted.
    pub fn list_references(&self, frame: &str) -> Vec<String> {
        self.frames
            .get(frame)
            .map(|f| {
                f.slots()
                    .filter(|(_, slot)| slot.reference().is_some())
                    .map(|(name, _)| name.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Framesets whose member list contains `frame`, sorted. Scans the whole registry.
    pub fn framesets_containing(&self, frame: &str) -> Vec<String> {
        if !self.exists(frame) {
            return Vec::new();
        }
        let mut sets: Vec<String> = self
            .frames
            .values()
            .filter(|f| f.is_frameset() && listset::member(f.members(), frame))
            .map(|f| f.name().to_string())
            .collect();
        sets.sort();
        sets
    }
}

/// Drop facets and demons of `dst` that `src` lacks; optionally copy payloads of the rest.
fn reconcile_slot(dst: &mut Slot, src: &Slot, copy_payloads: bool) {
    let shared = match (&dst.facet, &src.facet) {
        (Some(d), Some(s)) => d.kind() == s.kind(),
        _ => false,
    };
    if !shared {
        dst.facet = None;
    } else if copy_payloads {
        dst.facet.clone_from(&src.facet);
    }
    dst.demons.retain(|kind, _| src.demons.contains_key(kind));
    if copy_payloads {
        for (kind, name) in dst.demons.iter_mut() {
            if let Some(src_name) = src.demons.get(kind) {
                name.clone_from(src_name);
            }
        }
    }
}
