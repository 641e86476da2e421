//! Frames
//!
//! A frame is a named record of slots. Each slot holds at most one primary
//! facet (a literal value, a method name, or a reference to another frame)
//! and any number of demons keyed by [`DemonKind`]. A frame that also carries
//! a member list is a frameset.

pub mod registry;
pub mod storage;

pub use registry::FrameRegistry;
pub use storage::FrameStorage;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Hook points at which a demon can be installed on a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemonKind {
    IfCreateV,
    IfCreateR,
    IfCreateM,
    IfExistV,
    IfExistR,
    IfExistM,
    IfGetV,
    IfGetR,
    IfGetM,
    IfPutV,
    IfPutR,
    IfPutM,
    IfRemoveV,
    IfRemoveR,
    IfRemoveM,
    IfRef,
    IfExecM,
}

impl DemonKind {
    pub const ALL: [DemonKind; 17] = [
        DemonKind::IfCreateV,
        DemonKind::IfCreateR,
        DemonKind::IfCreateM,
        DemonKind::IfExistV,
        DemonKind::IfExistR,
        DemonKind::IfExistM,
        DemonKind::IfGetV,
        DemonKind::IfGetR,
        DemonKind::IfGetM,
        DemonKind::IfPutV,
        DemonKind::IfPutR,
        DemonKind::IfPutM,
        DemonKind::IfRemoveV,
        DemonKind::IfRemoveR,
        DemonKind::IfRemoveM,
        DemonKind::IfRef,
        DemonKind::IfExecM,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemonKind::IfCreateV => "ifcreatev",
            DemonKind::IfCreateR => "ifcreater",
            DemonKind::IfCreateM => "ifcreatem",
            DemonKind::IfExistV => "ifexistv",
            DemonKind::IfExistR => "ifexistr",
            DemonKind::IfExistM => "ifexistm",
            DemonKind::IfGetV => "ifgetv",
            DemonKind::IfGetR => "ifgetr",
            DemonKind::IfGetM => "ifgetm",
            DemonKind::IfPutV => "ifputv",
            DemonKind::IfPutR => "ifputr",
            DemonKind::IfPutM => "ifputm",
            DemonKind::IfRemoveV => "ifremovev",
            DemonKind::IfRemoveR => "ifremover",
            DemonKind::IfRemoveM => "ifremovem",
            DemonKind::IfRef => "ifref",
            DemonKind::IfExecM => "ifexecm",
        }
    }
}

impl fmt::Display for DemonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemonKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown demon type: {}", s))
    }
}

/// Primary facet of a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum Facet {
    /// Literal payload
    Value(String),
    /// Name of a method table entry
    Method(String),
    /// Name of the frame this slot delegates to
    Reference(String),
}

impl Facet {
    pub fn kind(&self) -> FacetKind {
        match self {
            Facet::Value(_) => FacetKind::Value,
            Facet::Method(_) => FacetKind::Method,
            Facet::Reference(_) => FacetKind::Reference,
        }
    }

    pub fn payload(&self) -> &str {
        match self {
            Facet::Value(p) | Facet::Method(p) | Facet::Reference(p) => p,
        }
    }

    pub(crate) fn payload_mut(&mut self) -> &mut String {
        match self {
            Facet::Value(p) | Facet::Method(p) | Facet::Reference(p) => p,
        }
    }
}

/// Facet type tag, as listed for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetKind {
    Value,
    Method,
    Reference,
    Demon(DemonKind),
}

impl FacetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKind::Value => "value",
            FacetKind::Method => "method",
            FacetKind::Reference => "ref",
            FacetKind::Demon(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(FacetKind::Value),
            "method" => Ok(FacetKind::Method),
            "ref" => Ok(FacetKind::Reference),
            other => other
                .parse::<DemonKind>()
                .map(FacetKind::Demon)
                .map_err(|_| format!("unknown facet type: {}", other)),
        }
    }
}

/// A named attribute location on a frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub facet: Option<Facet>,
    pub demons: BTreeMap<DemonKind, String>,
}

impl Slot {
    /// Facet type tags currently present, primary facet first.
    pub fn kinds(&self) -> Vec<FacetKind> {
        let mut kinds = Vec::with_capacity(self.demons.len() + 1);
        if let Some(facet) = &self.facet {
            kinds.push(facet.kind());
        }
        kinds.extend(self.demons.keys().map(|k| FacetKind::Demon(*k)));
        kinds
    }

    pub fn has_kind(&self, kind: FacetKind) -> bool {
        match kind {
            FacetKind::Demon(d) => self.demons.contains_key(&d),
            primary => self.facet.as_ref().map(Facet::kind) == Some(primary),
        }
    }

    pub fn reference(&self) -> Option<&str> {
        match &self.facet {
            Some(Facet::Reference(target)) => Some(target),
            _ => None,
        }
    }

    pub fn demon(&self, kind: DemonKind) -> Option<&str> {
        self.demons.get(&kind).map(String::as_str)
    }
}

/// A named record of slots, optionally carrying a member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    name: String,
    slots: BTreeMap<String, Slot>,
    members: Option<Vec<String>>,
}

impl Frame {
    /// Create a frame with an empty slot list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: BTreeMap::new(),
            members: None,
        }
    }

    /// Create a frameset: a frame with an empty member list
    pub fn new_frameset(name: impl Into<String>) -> Self {
        Self {
            members: Some(Vec::new()),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same contents under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn is_frameset(&self) -> bool {
        self.members.is_some()
    }

    pub fn members(&self) -> &[String] {
        self.members.as_deref().unwrap_or(&[])
    }

    pub(crate) fn members_mut(&mut self) -> Option<&mut Vec<String>> {
        self.members.as_mut()
    }

    pub(crate) fn set_members(&mut self, members: Option<Vec<String>>) {
        self.members = members;
    }

    pub fn slot(&self, slot: &str) -> Option<&Slot> {
        self.slots.get(slot)
    }

    pub(crate) fn slot_mut(&mut self, slot: &str) -> Option<&mut Slot> {
        self.slots.get_mut(slot)
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    /// Declared slot names, sorted.
    pub fn slot_names(&self) -> Vec<String> {
        self.slots.keys().cloned().collect()
    }

    pub fn slots(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.slots.iter().map(|(name, slot)| (name.as_str(), slot))
    }

    pub(crate) fn slots_mut(&mut self) -> &mut BTreeMap<String, Slot> {
        &mut self.slots
    }
}
