//! Frameset broadcaster
//!
//! A frameset is a frame carrying a member list. Structural operations on a
//! frameset apply to the group record first; only when that succeeds are
//! they replayed once per current member. Member outcomes never change the
//! result, which is always the group's.

use crate::error::FrameError;
use crate::frame::{DemonKind, FrameStorage};
use crate::kb::KnowledgeBase;
use crate::listset;
use tracing::{debug, info, warn};

impl KnowledgeBase {
    /// Create a frame with empty slot and member lists.
    pub fn create_frameset(&mut self, name: &str) -> bool {
        let created = self.registry.create_frameset(name);
        if created {
            info!(frameset = name, "Frameset created");
        }
        created
    }

    /// Remove the group record. Members are left alone.
    pub fn remove_frameset(&mut self, name: &str) -> bool {
        let is_set = self.registry.get(name).is_some_and(|f| f.is_frameset());
        is_set && self.registry.remove(name)
    }

    pub fn is_frameset(&self, name: &str) -> bool {
        self.registry.get(name).is_some_and(|f| f.is_frameset())
    }

    /// Member names in insertion order, or empty for unknown frames.
    pub fn frameset_members(&self, name: &str) -> Vec<String> {
        self.registry
            .get(name)
            .map(|f| f.members().to_vec())
            .unwrap_or_default()
    }

    /// Append `frame` to the member list. Both must exist.
    pub fn include_in_frameset(&mut self, name: &str, frame: &str) -> bool {
        if !self.registry.exists(frame) {
            return false;
        }
        match self.registry.get_mut(name).and_then(|f| f.members_mut()) {
            Some(members) => {
                members.push(frame.to_string());
                debug!(frameset = name, frame, "Member included");
                true
            }
            None => false,
        }
    }

    /// Drop every occurrence of `frame` from the member list.
    pub fn exclude_from_frameset(&mut self, name: &str, frame: &str) -> bool {
        let Some(group) = self.registry.get_mut(name) else {
            return false;
        };
        if !listset::member(group.members(), frame) {
            return false;
        }
        let kept = listset::remove(group.members(), frame);
        group.set_members(Some(kept));
        debug!(frameset = name, frame, "Member excluded");
        true
    }

    /// Frameset names whose member list contains `frame`, sorted.
    pub fn framesets_containing(&self, frame: &str) -> Vec<String> {
        self.registry.framesets_containing(frame)
    }

    fn broadcast<F>(&mut self, name: &str, op: &'static str, mut apply: F) -> bool
    where
        F: FnMut(&mut Self, &str) -> bool,
    {
        if !apply(self, name) {
            return false;
        }
        let members = self.frameset_members(name);
        for member in &members {
            let applied = apply(self, member.as_str());
            debug!(frameset = name, member = %member, op, applied, "Replayed on member");
        }
        info!(frameset = name, op, members = members.len(), "Broadcast applied");
        true
    }

    pub fn create_slot_in_frameset(&mut self, name: &str, slot: &str) -> bool {
        self.broadcast(name, "create_slot", |kb, frame| kb.registry.create_slot(frame, slot))
    }

    pub fn remove_slot_in_frameset(&mut self, name: &str, slot: &str) -> bool {
        self.broadcast(name, "remove_slot", |kb, frame| kb.registry.remove_slot(frame, slot))
    }

    pub fn create_demon_in_frameset(&mut self, name: &str, slot: &str, kind: DemonKind) -> bool {
        self.broadcast(name, "create_demon", |kb, frame| kb.create_demon(frame, slot, kind))
    }

    pub fn remove_demon_in_frameset(&mut self, name: &str, slot: &str, kind: DemonKind) -> bool {
        self.broadcast(name, "remove_demon", |kb, frame| kb.remove_demon(frame, slot, kind))
    }

    pub fn create_method_in_frameset(&mut self, name: &str, slot: &str) -> bool {
        self.broadcast(name, "create_method", |kb, frame| kb.create_method(frame, slot))
    }

    pub fn remove_method_in_frameset(&mut self, name: &str, slot: &str) -> bool {
        self.broadcast(name, "remove_method", |kb, frame| kb.remove_method(frame, slot))
    }

    pub fn create_reference_in_frameset(&mut self, name: &str, slot: &str) -> bool {
        self.broadcast(name, "create_reference", |kb, frame| {
            kb.create_reference(frame, slot)
        })
    }

    pub fn remove_reference_in_frameset(&mut self, name: &str, slot: &str) -> bool {
        self.broadcast(name, "remove_reference", |kb, frame| {
            kb.remove_reference(frame, slot)
        })
    }

    pub fn create_value_in_frameset(&mut self, name: &str, slot: &str) -> bool {
        self.broadcast(name, "create_value", |kb, frame| kb.create_value(frame, slot))
    }

    pub fn remove_value_in_frameset(&mut self, name: &str, slot: &str) -> bool {
        self.broadcast(name, "remove_value", |kb, frame| kb.remove_value(frame, slot))
    }

    /// Point the group's reference at `target`, then every member's.
    ///
    /// Requires a reference facet on the group (checked with the
    /// demon-firing [`exists_reference`](Self::exists_reference)).
    pub fn put_reference_in_frameset(&mut self, name: &str, slot: &str, target: &str) -> bool {
        if !self.exists_reference(name, slot) {
            return false;
        }
        self.broadcast(name, "put_reference", |kb, frame| {
            kb.put_reference(frame, slot, target)
        })
    }

    /// The group record's reference. Members are not consulted.
    pub fn get_reference_in_frameset(&self, name: &str, slot: &str) -> Option<String> {
        self.get_reference(name, slot)
    }

    /// Store the group record, then each member, one file per frame.
    ///
    /// Fails only when the group cannot be stored.
    pub fn store_frameset(&self, storage: &FrameStorage, name: &str) -> Result<(), FrameError> {
        self.store_frame(storage, name)?;
        for member in self.frameset_members(name) {
            if let Err(e) = self.store_frame(storage, &member) {
                warn!(frameset = name, member = %member, error = %e, "Skipping member on store");
            }
        }
        Ok(())
    }

    /// Load the group record, then each member it lists.
    ///
    /// Fails only when the group cannot be loaded; members already in memory
    /// or without a file are skipped.
    pub fn load_frameset(&mut self, storage: &FrameStorage, name: &str) -> Result<(), FrameError> {
        self.load_frame(storage, name)?;
        for member in self.frameset_members(name) {
            if let Err(e) = self.load_frame(storage, &member) {
                warn!(frameset = name, member = %member, error = %e, "Skipping member on load");
            }
        }
        Ok(())
    }
}
