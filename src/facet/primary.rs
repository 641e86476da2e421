//! Value and method facets.
//!
//! Both kinds share one dispatch path: resolve the landing frame through any
//! reference chain, then act on the slot there. A slot holds at most one of
//! the two, so creating either fails while the other is present.

use super::{FacetOp, PrimaryKind};
use crate::frame::{DemonKind, Facet};
use crate::kb::KnowledgeBase;
use tracing::{debug, warn};

fn matches_kind(facet: &Facet, kind: PrimaryKind) -> bool {
    matches!(
        (facet, kind),
        (Facet::Value(_), PrimaryKind::Value) | (Facet::Method(_), PrimaryKind::Method)
    )
}

impl KnowledgeBase {
    /// Landing frame plus the current payload of `kind` there, if present.
    fn primary_payload(&self, frame: &str, slot: &str, kind: PrimaryKind) -> Option<(String, String)> {
        let target = self.landing(frame, slot)?;
        let payload = self
            .registry
            .get(&target)
            .and_then(|f| f.slot(slot))
            .and_then(|s| s.facet.as_ref())
            .filter(|facet| matches_kind(facet, kind))
            .map(|facet| facet.payload().to_string())?;
        Some((target, payload))
    }

    fn primary_exists(&self, frame: &str, slot: &str, kind: PrimaryKind) -> bool {
        match self.primary_payload(frame, slot, kind) {
            Some((target, _)) => {
                self.fire_demon(&target, slot, kind.demon(FacetOp::Exist));
                true
            }
            None => false,
        }
    }

    fn primary_create(&mut self, frame: &str, slot: &str, kind: PrimaryKind) -> bool {
        let Some(target) = self.landing(frame, slot) else {
            return false;
        };
        let Some(s) = self.registry.slot_mut(&target, slot) else {
            return false;
        };
        if s.facet.is_some() {
            return false;
        }
        s.facet = Some(match kind {
            PrimaryKind::Value => Facet::Value(String::new()),
            PrimaryKind::Method => Facet::Method(String::new()),
        });
        self.fire_demon(&target, slot, kind.demon(FacetOp::Create));
        true
    }

    fn primary_remove(&mut self, frame: &str, slot: &str, kind: PrimaryKind) -> bool {
        let Some((target, _)) = self.primary_payload(frame, slot, kind) else {
            return false;
        };
        self.fire_demon(&target, slot, kind.demon(FacetOp::Remove));
        if let Some(s) = self.registry.slot_mut(&target, slot) {
            s.facet = None;
            debug!(frame = %target, slot, "Facet removed");
        }
        true
    }

    fn primary_get(&self, frame: &str, slot: &str, kind: PrimaryKind) -> Option<String> {
        let (target, payload) = self.primary_payload(frame, slot, kind)?;
        self.fire_demon(&target, slot, kind.demon(FacetOp::Get));
        Some(payload)
    }

    fn primary_put(&mut self, frame: &str, slot: &str, kind: PrimaryKind, payload: &str) -> bool {
        let Some((target, _)) = self.primary_payload(frame, slot, kind) else {
            return false;
        };
        self.fire_demon(&target, slot, kind.demon(FacetOp::Put));
        match self
            .registry
            .slot_mut(&target, slot)
            .and_then(|s| s.facet.as_mut())
        {
            Some(facet) => {
                *facet.payload_mut() = payload.to_string();
                debug!(frame = %target, slot, "Facet written");
                true
            }
            None => false,
        }
    }

    pub fn exists_value(&self, frame: &str, slot: &str) -> bool {
        self.primary_exists(frame, slot, PrimaryKind::Value)
    }

    /// Install an empty value facet on the landing frame.
    pub fn create_value(&mut self, frame: &str, slot: &str) -> bool {
        self.primary_create(frame, slot, PrimaryKind::Value)
    }

    pub fn remove_value(&mut self, frame: &str, slot: &str) -> bool {
        self.primary_remove(frame, slot, PrimaryKind::Value)
    }

    /// `None` when no value facet exists; `Some("")` for an empty one.
    pub fn get_value(&self, frame: &str, slot: &str) -> Option<String> {
        self.primary_get(frame, slot, PrimaryKind::Value)
    }

    pub fn put_value(&mut self, frame: &str, slot: &str, value: &str) -> bool {
        self.primary_put(frame, slot, PrimaryKind::Value, value)
    }

    pub fn exists_method(&self, frame: &str, slot: &str) -> bool {
        self.primary_exists(frame, slot, PrimaryKind::Method)
    }

    /// Install a method facet with an empty method name on the landing frame.
    pub fn create_method(&mut self, frame: &str, slot: &str) -> bool {
        self.primary_create(frame, slot, PrimaryKind::Method)
    }

    pub fn remove_method(&mut self, frame: &str, slot: &str) -> bool {
        self.primary_remove(frame, slot, PrimaryKind::Method)
    }

    /// Name of the method table entry the facet designates.
    pub fn get_method(&self, frame: &str, slot: &str) -> Option<String> {
        self.primary_get(frame, slot, PrimaryKind::Method)
    }

    pub fn put_method(&mut self, frame: &str, slot: &str, method: &str) -> bool {
        self.primary_put(frame, slot, PrimaryKind::Method, method)
    }

    /// Run the method the facet designates, passing the landing frame's name.
    ///
    /// Fires `ifexecm` first. Returns false when there is no method facet or
    /// it names no registered method.
    pub fn execute_method(&self, frame: &str, slot: &str) -> bool {
        let Some((target, method_name)) = self.primary_payload(frame, slot, PrimaryKind::Method)
        else {
            return false;
        };
        self.fire_demon(&target, slot, DemonKind::IfExecM);
        match self.methods.lookup(&method_name) {
            Some(method) => {
                method.invoke(&target);
                true
            }
            None => {
                warn!(frame = %target, slot, method = %method_name, "Method not registered");
                false
            }
        }
    }
}
