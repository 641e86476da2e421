//! Structural properties of frame registry operations

use framesets::FrameRegistry;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn slot_names() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-f]", 0..6)
}

fn registry_with(a: &BTreeSet<String>, b: &BTreeSet<String>) -> FrameRegistry {
    let mut registry = FrameRegistry::new();
    registry.create("a");
    registry.create("b");
    for slot in a {
        registry.create_slot("a", slot);
    }
    for slot in b {
        registry.create_slot("b", slot);
    }
    registry
}

proptest! {
    #[test]
    fn merge_yields_union_of_slots(a in slot_names(), b in slot_names()) {
        let mut registry = registry_with(&a, &b);
        prop_assert!(registry.merge("a", "b"));
        let expected: Vec<String> = a.union(&b).cloned().collect();
        prop_assert_eq!(registry.list_slots("b"), expected);
    }

    #[test]
    fn filter_yields_intersection_of_slots(a in slot_names(), b in slot_names()) {
        let mut registry = registry_with(&a, &b);
        prop_assert!(registry.filter("a", "b"));
        let expected: Vec<String> = a.intersection(&b).cloned().collect();
        prop_assert_eq!(registry.list_slots("b"), expected);
    }

    #[test]
    fn update_makes_frames_compare_equal(a in slot_names(), b in slot_names()) {
        let mut registry = registry_with(&a, &b);
        prop_assert!(registry.update("b", "a"));
        prop_assert!(registry.compare("a", "b"));
    }

    #[test]
    fn copy_makes_slots_identical(a in slot_names(), b in slot_names()) {
        let mut registry = registry_with(&a, &b);
        prop_assert!(registry.copy("a", "b"));
        for slot in &a {
            prop_assert!(registry.compare_slot("a", slot, "b"));
        }
        prop_assert_eq!(registry.list_slots("a"), registry.list_slots("b"));
    }
}
