//! Frameset broadcast behavior

use framesets::{DemonKind, KnowledgeBase};

fn fleet() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    assert!(kb.create_frameset("S"));
    for member in ["f1", "f2"] {
        assert!(kb.registry_mut().create(member));
        assert!(kb.include_in_frameset("S", member));
    }
    kb
}

#[test]
fn test_create_slot_reaches_members_past_failures() {
    let mut kb = fleet();
    assert!(kb.registry_mut().create_slot("f1", "x"));

    assert!(kb.create_slot_in_frameset("S", "x"));
    assert!(kb.registry().slot_exists("f2", "x"));
    assert!(kb.registry().slot_exists("S", "x"));
}

#[test]
fn test_membership_changes_affect_later_broadcasts_only() {
    let mut kb = fleet();
    assert!(kb.create_slot_in_frameset("S", "x"));
    assert!(kb.registry_mut().create("f3"));
    assert!(kb.include_in_frameset("S", "f3"));
    assert!(!kb.registry().slot_exists("f3", "x"));

    assert!(kb.exclude_from_frameset("S", "f1"));
    assert!(kb.create_demon_in_frameset("S", "x", DemonKind::IfGetV));
    assert!(!kb.exists_demon("f1", "x", DemonKind::IfGetV));
    assert!(kb.exists_demon("f2", "x", DemonKind::IfGetV));
    assert!(!kb.exists_demon("f3", "x", DemonKind::IfGetV));
}

#[test]
fn test_reverse_lookup() {
    let mut kb = fleet();
    assert!(kb.create_frameset("T"));
    assert!(kb.include_in_frameset("T", "f2"));
    assert_eq!(kb.framesets_containing("f2"), vec!["S", "T"]);
    assert_eq!(kb.framesets_containing("f1"), vec!["S"]);
}

#[test]
fn test_frameset_is_itself_a_frame() {
    let mut kb = fleet();
    assert!(kb.registry_mut().create_slot("S", "colour"));
    assert!(kb.create_value("S", "colour"));
    assert!(kb.put_value("S", "colour", "red"));
    assert_eq!(kb.get_value("S", "colour").as_deref(), Some("red"));
    assert!(!kb.registry().slot_exists("f1", "colour"));
}
