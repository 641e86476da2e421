//! Frame registry behavior through the public API

use framesets::KnowledgeBase;

#[test]
fn test_frame_round_trip() {
    let mut kb = KnowledgeBase::new();
    let registry = kb.registry_mut();

    assert!(!registry.exists("Vehicle"));
    assert!(registry.create("Vehicle"));
    assert!(registry.exists("Vehicle"));
    assert!(!registry.create("Vehicle"));
    assert!(registry.remove("Vehicle"));
    assert!(!registry.exists("Vehicle"));
    assert!(!registry.remove("Vehicle"));
}

#[test]
fn test_copy_is_deep() {
    let mut kb = crate::integration::vehicles();
    assert!(kb.registry_mut().copy("Car", "Truck"));
    assert!(kb.put_reference("Truck", "wheels", "Elsewhere"));
    assert_eq!(kb.get_reference("Car", "wheels").as_deref(), Some("Vehicle"));
    assert!(kb.registry().compare("Car", "Truck"));
    assert!(!kb.registry().compare_slot("Car", "wheels", "Truck"));
}

#[test]
fn test_merge_update_filter() {
    let mut kb = KnowledgeBase::new();
    let registry = kb.registry_mut();
    registry.create("proto");
    registry.create("inst");
    for slot in ["a", "b"] {
        registry.create_slot("proto", slot);
    }
    for slot in ["b", "c"] {
        registry.create_slot("inst", slot);
    }

    let mut merged = kb.registry().clone();
    assert!(merged.merge("proto", "inst"));
    assert_eq!(merged.list_slots("inst"), vec!["a", "b", "c"]);

    let mut updated = kb.registry().clone();
    assert!(updated.update("inst", "proto"));
    assert_eq!(updated.list_slots("inst"), vec!["a", "b"]);

    let mut filtered = kb.registry().clone();
    assert!(filtered.filter("proto", "inst"));
    assert_eq!(filtered.list_slots("inst"), vec!["b"]);
}

#[test]
fn test_removed_target_leaves_dangling_reference() {
    let mut kb = crate::integration::vehicles();
    assert!(kb.registry_mut().remove("Vehicle"));
    assert!(kb.exists_reference_quiet("Car", "wheels"));
    assert_eq!(kb.get_value("Car", "wheels"), None);
}
