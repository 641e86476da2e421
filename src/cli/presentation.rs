//! CLI presentation: text and json formatters for frame inspection.

use crate::error::ApiError;
use crate::frame::Frame;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

fn format_section_heading(title: &str) -> String {
    format!("{}\n{}", title, "-".repeat(title.len()))
}

pub fn format_frame_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No frames stored.".to_string();
    }
    let mut out = format!("{}\n\n", format_section_heading("Frames"));
    for name in names {
        out.push_str(&format!("  {}\n", name));
    }
    out.push_str(&format!("\nTotal: {}", names.len()));
    out
}

/// Slot table for a frame: primary facet, payload, and installed demons.
pub fn format_frame_text(frame: &Frame) -> String {
    let mut out = format!("{}\n\n", format_section_heading(&format!("Frame {}", frame.name())));
    if frame.is_frameset() {
        out.push_str(&format!("  Frameset: yes ({} members)\n\n", frame.members().len()));
    }
    let slots: Vec<_> = frame.slots().collect();
    if slots.is_empty() {
        out.push_str("No slots declared.");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Slot", "Facet", "Payload", "Demons"]);
    for (name, slot) in slots {
        let (kind, payload) = match &slot.facet {
            Some(facet) => (facet.kind().to_string(), facet.payload().to_string()),
            None => ("-".to_string(), String::new()),
        };
        let demons = slot
            .demons
            .iter()
            .map(|(kind, method)| {
                if method.is_empty() {
                    kind.to_string()
                } else {
                    format!("{}={}", kind, method)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![name.to_string(), kind, payload, demons]);
    }
    out.push_str(&table.to_string());
    out
}

pub fn format_frame_json(frame: &Frame) -> Result<String, ApiError> {
    serde_json::to_string_pretty(frame).map_err(|e| ApiError::OutputError(e.to_string()))
}

/// Reference chain as `a -> b -> c`.
pub fn format_path(frame: &str, slot: &str, path: &[String]) -> String {
    if path.is_empty() {
        return format!("{} has no slot {}", frame, slot);
    }
    path.join(" -> ")
}

pub fn format_members(frame: &str, members: &[String]) -> String {
    if members.is_empty() {
        return format!("Frameset {} has no members.", frame);
    }
    let mut out = format!("{}\n\n", format_section_heading(&format!("Members of {}", frame)));
    for (i, member) in members.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, member));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::KnowledgeBase;

    #[test]
    fn test_frame_text_lists_slots_and_demons() {
        let mut kb = KnowledgeBase::new();
        kb.registry_mut().create("car");
        kb.registry_mut().create_slot("car", "wheels");
        assert!(kb.create_value("car", "wheels"));
        assert!(kb.put_value("car", "wheels", "4"));
        assert!(kb.create_demon("car", "wheels", crate::frame::DemonKind::IfGetV));

        let text = format_frame_text(kb.registry().get("car").unwrap());
        assert!(text.contains("Frame car"));
        assert!(text.contains("wheels"));
        assert!(text.contains("ifgetv"));
        assert!(!text.contains("Frameset"));
    }

    #[test]
    fn test_frame_json_round_trips() {
        let frame = Frame::new_frameset("group");
        let json = format_frame_json(&frame).unwrap();
        let parsed: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn test_path_and_members() {
        let path = vec!["sedan".to_string(), "car".to_string()];
        assert_eq!(format_path("sedan", "wheels", &path), "sedan -> car");
        assert_eq!(format_path("x", "y", &[]), "x has no slot y");
        assert_eq!(format_members("S", &[]), "Frameset S has no members.");
        assert!(format_members("S", &["f1".to_string()]).ends_with("1. f1"));
    }
}
