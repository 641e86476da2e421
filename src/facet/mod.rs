//! Facet engine
//!
//! Per-slot dispatch over the four facet kinds. Every access fires the
//! matching demon when one is installed. Value and method operations follow
//! reference facets to the frame that actually holds the payload; reference
//! and demon operations act on the named frame only.
//!
//! Delegation keeps a visited list. A reference chain that returns to a frame
//! already visited stops with a cycle failure instead of recursing forever.

mod demon;
mod primary;
mod query;
mod reference;

use crate::error::FrameError;
use crate::frame::DemonKind;
use crate::kb::KnowledgeBase;
use tracing::{debug, warn};

/// Facet kinds that delegation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimaryKind {
    Value,
    Method,
}

/// Operations that have a demon hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FacetOp {
    Create,
    Exist,
    Get,
    Put,
    Remove,
}

impl PrimaryKind {
    pub(crate) fn demon(self, op: FacetOp) -> DemonKind {
        match (self, op) {
            (PrimaryKind::Value, FacetOp::Create) => DemonKind::IfCreateV,
            (PrimaryKind::Value, FacetOp::Exist) => DemonKind::IfExistV,
            (PrimaryKind::Value, FacetOp::Get) => DemonKind::IfGetV,
            (PrimaryKind::Value, FacetOp::Put) => DemonKind::IfPutV,
            (PrimaryKind::Value, FacetOp::Remove) => DemonKind::IfRemoveV,
            (PrimaryKind::Method, FacetOp::Create) => DemonKind::IfCreateM,
            (PrimaryKind::Method, FacetOp::Exist) => DemonKind::IfExistM,
            (PrimaryKind::Method, FacetOp::Get) => DemonKind::IfGetM,
            (PrimaryKind::Method, FacetOp::Put) => DemonKind::IfPutM,
            (PrimaryKind::Method, FacetOp::Remove) => DemonKind::IfRemoveM,
        }
    }
}

impl KnowledgeBase {
    /// Frame on which value and method operations for `(frame, slot)` land.
    ///
    /// Follows reference facets, firing `ifref` on each frame that forwards.
    /// Fails when a frame on the way lacks the slot (including dangling
    /// references), when the chain revisits a frame, or when it is longer
    /// than the configured maximum depth.
    pub fn resolve(&self, frame: &str, slot: &str) -> Result<String, FrameError> {
        let mut current = frame.to_string();
        let mut path = vec![current.clone()];
        loop {
            let next = match self.registry.get(&current).and_then(|f| f.slot(slot)) {
                None => {
                    return Err(FrameError::SlotNotFound {
                        frame: current,
                        slot: slot.to_string(),
                    })
                }
                Some(s) => match s.reference() {
                    Some(target) => target.to_string(),
                    None => return Ok(current),
                },
            };

            self.fire_demon(&current, slot, DemonKind::IfRef);

            if path.contains(&next) {
                path.push(next);
                return Err(FrameError::ReferenceCycle {
                    slot: slot.to_string(),
                    path,
                });
            }
            if let Some(limit) = self.engine.max_reference_depth {
                if path.len() > limit {
                    return Err(FrameError::ReferenceDepthExceeded {
                        frame: frame.to_string(),
                        slot: slot.to_string(),
                        limit,
                    });
                }
            }

            debug!(from = %current, to = %next, slot, "Following reference");
            path.push(next.clone());
            current = next;
        }
    }

    /// [`resolve`](Self::resolve) collapsed to the boolean taxonomy. Cycles
    /// and depth overruns are logged; a missing slot is silent.
    pub(crate) fn landing(&self, frame: &str, slot: &str) -> Option<String> {
        match self.resolve(frame, slot) {
            Ok(target) => Some(target),
            Err(FrameError::SlotNotFound { .. }) => None,
            Err(e) => {
                warn!(frame, slot, error = %e, "Delegation abandoned");
                None
            }
        }
    }

    /// Invoke the demon of `kind` installed on `(frame, slot)`, if any.
    ///
    /// Returns whether a procedure ran. A demon naming an unregistered
    /// method is skipped.
    pub(crate) fn fire_demon(&self, frame: &str, slot: &str, kind: DemonKind) -> bool {
        let Some(method_name) = self
            .registry
            .get(frame)
            .and_then(|f| f.slot(slot))
            .and_then(|s| s.demon(kind))
        else {
            return false;
        };
        match self.methods.lookup(method_name) {
            Some(method) => {
                debug!(frame, slot, demon = %kind, method = method_name, "Firing demon");
                method.invoke(frame);
                true
            }
            None => {
                debug!(frame, slot, demon = %kind, method = method_name, "Demon names no registered method");
                false
            }
        }
    }
}
