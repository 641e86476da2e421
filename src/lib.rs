//! Framesets: a frame-based knowledge representation engine
//!
//! Frames are named records of slots. Each slot holds at most one primary
//! facet (a literal value, a method name, or a reference to another frame)
//! plus any number of demons: procedures fired when the slot's facets are
//! accessed. Value and method access follows reference facets across frames,
//! giving prototype-style delegation. Framesets group frames and replay
//! structural changes from the group onto every member.
//!
//! Everything runs against a [`KnowledgeBase`], which owns the frame
//! registry and the table of callable procedures.

pub mod cli;
pub mod config;
pub mod error;
pub mod facet;
pub mod frame;
pub mod frameset;
pub mod kb;
pub mod listset;
pub mod logging;
pub mod method;

pub use error::{ApiError, FrameError};
pub use frame::{DemonKind, Facet, FacetKind, Frame, FrameRegistry, FrameStorage, Slot};
pub use kb::{KnowledgeBase, SharedKnowledgeBase};
pub use method::{Method, MethodTable};
