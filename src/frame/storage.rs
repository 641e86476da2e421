//! Frame storage implementation
//!
//! Persists one frame per file, named after the frame, in a line-oriented
//! text format:
//!
//! ```text
//! <frame>,slots wheels,color
//! <frame>,set car,bike          (framesets only)
//! wheels,facets value,ifputv
//! wheels,value 4
//! wheels,ifputv count_puts
//! ```
//!
//! Each line is `<key><space><comma-joined values>`. Decoding splits on the
//! first space and then on commas. There is no escaping, so names and
//! payloads containing a comma or a leading space do not round-trip.

use crate::error::FrameError;
use crate::frame::{DemonKind, Facet, FacetKind, Frame, Slot};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const SLOTS_ATTR: &str = "slots";
const SET_ATTR: &str = "set";
const FACETS_ATTR: &str = "facets";

/// Encode a frame's attributes, one line per attribute key.
pub fn encode_frame(frame: &Frame) -> String {
    let mut out = String::new();
    push_line(&mut out, frame.name(), SLOTS_ATTR, &frame.slot_names().join(","));
    if frame.is_frameset() {
        push_line(&mut out, frame.name(), SET_ATTR, &frame.members().join(","));
    }
    for (name, slot) in frame.slots() {
        let tags: Vec<&str> = slot.kinds().iter().map(FacetKind::as_str).collect();
        push_line(&mut out, name, FACETS_ATTR, &tags.join(","));
        if let Some(facet) = &slot.facet {
            push_line(&mut out, name, facet.kind().as_str(), facet.payload());
        }
        for (kind, method) in &slot.demons {
            push_line(&mut out, name, kind.as_str(), method);
        }
    }
    out
}

fn push_line(out: &mut String, owner: &str, attr: &str, values: &str) {
    out.push_str(owner);
    out.push(',');
    out.push_str(attr);
    out.push(' ');
    out.push_str(values);
    out.push('\n');
}

/// Per-slot attributes collected while decoding
#[derive(Default)]
struct RawSlot {
    line: usize,
    tags: Vec<String>,
    cells: BTreeMap<String, String>,
}

/// Decode a frame from its text encoding.
pub fn decode_frame(name: &str, text: &str) -> Result<Frame, FrameError> {
    let decode_err = |line: usize, message: String| FrameError::Decode {
        frame: name.to_string(),
        line,
        message,
    };

    let mut declared: Option<Vec<String>> = None;
    let mut members: Option<Vec<String>> = None;
    let mut raw: BTreeMap<String, RawSlot> = BTreeMap::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.is_empty() {
            continue;
        }
        let (key, rest) = line.split_once(' ').unwrap_or((line, ""));
        let values: Vec<String> = rest.split(',').map(str::to_string).collect();
        let (owner, attr) = key
            .split_once(',')
            .ok_or_else(|| decode_err(line_no, format!("malformed key {:?}", key)))?;

        if owner == name && attr == SLOTS_ATTR {
            declared = Some(non_empty(values));
            continue;
        }
        if owner == name && attr == SET_ATTR {
            members = Some(non_empty(values));
            continue;
        }

        let entry = raw.entry(owner.to_string()).or_insert_with(|| RawSlot {
            line: line_no,
            ..RawSlot::default()
        });
        if attr == FACETS_ATTR {
            entry.tags = non_empty(values);
        } else {
            // Single-valued cell: keep the first value.
            let first = values.into_iter().next().unwrap_or_default();
            entry.cells.insert(attr.to_string(), first);
        }
    }

    let declared =
        declared.ok_or_else(|| decode_err(0, format!("missing {},{} line", name, SLOTS_ATTR)))?;

    let mut frame = Frame::new(name);
    frame.set_members(members);

    for slot_name in &declared {
        // A slot may be listed more than once; the first listing wins.
        if frame.has_slot(slot_name) {
            continue;
        }
        let raw_slot = raw.remove(slot_name).unwrap_or_default();
        let mut slot = Slot::default();
        for tag in &raw_slot.tags {
            let kind: FacetKind = tag
                .parse()
                .map_err(|e: String| decode_err(raw_slot.line, e))?;
            let payload = raw_slot.cells.get(tag).cloned().unwrap_or_default();
            let facet = match kind {
                FacetKind::Demon(demon) => {
                    slot.demons.insert(demon, payload);
                    continue;
                }
                FacetKind::Value => Facet::Value(payload),
                FacetKind::Method => Facet::Method(payload),
                FacetKind::Reference => Facet::Reference(payload),
            };
            if slot.facet.is_some() {
                return Err(decode_err(
                    raw_slot.line,
                    format!("slot {:?} holds more than one of value/method/ref", slot_name),
                ));
            }
            slot.facet = Some(facet);
        }
        frame.slots_mut().insert(slot_name.clone(), slot);
    }

    if let Some((slot_name, raw_slot)) = raw.into_iter().next() {
        return Err(decode_err(
            raw_slot.line,
            format!("attribute for undeclared slot {:?}", slot_name),
        ));
    }

    Ok(frame)
}

fn non_empty(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.is_empty()).collect()
}

/// Reject names that cannot be used as a file name inside the storage root.
fn validate_name(name: &str) -> Result<(), FrameError> {
    let invalid = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\', '\0', '\n']);
    if invalid {
        Err(FrameError::InvalidFrameName(name.to_string()))
    } else {
        Ok(())
    }
}

/// File-per-frame storage
///
/// Stores each frame at `{root}/{frame name}`.
#[derive(Debug, Clone)]
pub struct FrameStorage {
    root: PathBuf,
}

impl FrameStorage {
    /// Open storage at the given root directory, creating it as needed.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, FrameError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            FrameError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to create frames directory at {:?}: {}", root, e),
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding the named frame
    pub fn frame_path(&self, name: &str) -> Result<PathBuf, FrameError> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }

    pub fn exists(&self, name: &str) -> Result<bool, FrameError> {
        Ok(self.frame_path(name)?.is_file())
    }

    /// Write a frame to disk, replacing any previous file.
    ///
    /// Writes to a hidden temp file first, then renames it into place.
    pub fn store(&self, frame: &Frame) -> Result<(), FrameError> {
        let frame_path = self.frame_path(frame.name())?;
        let temp_path = self.root.join(format!(".{}.tmp", frame.name()));

        fs::write(&temp_path, encode_frame(frame)).map_err(|e| {
            FrameError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to write frame to {:?}: {}", temp_path, e),
            ))
        })?;

        fs::rename(&temp_path, &frame_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            FrameError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file to {:?}: {}", frame_path, e),
            ))
        })?;

        debug!(frame = frame.name(), path = %frame_path.display(), "Frame stored");
        Ok(())
    }

    /// Read a frame from disk. Returns `None` if no file exists for it.
    pub fn load(&self, name: &str) -> Result<Option<Frame>, FrameError> {
        let frame_path = self.frame_path(name)?;
        if !frame_path.is_file() {
            return Ok(None);
        }
        let text = fs::read_to_string(&frame_path).map_err(|e| {
            FrameError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to read frame from {:?}: {}", frame_path, e),
            ))
        })?;
        let frame = decode_frame(name, &text)?;
        debug!(frame = name, path = %frame_path.display(), "Frame loaded");
        Ok(Some(frame))
    }

    /// Names of all stored frames, sorted. Hidden files are skipped.
    pub fn list(&self) -> Result<Vec<String>, FrameError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if validate_name(name).is_ok() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete a stored frame. Returns `false` if there was nothing to delete.
    pub fn delete(&self, name: &str) -> Result<bool, FrameError> {
        let frame_path = self.frame_path(name)?;
        if !frame_path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&frame_path)?;
        Ok(true)
    }
}
