//! Reference-chain delegation and demon firing

use crate::integration::{recorder, vehicles};
use framesets::{DemonKind, FrameError, KnowledgeBase};

#[test]
fn test_get_through_reference() {
    let kb = vehicles();
    assert_eq!(kb.get_value("Car", "wheels").as_deref(), Some("4"));
    assert!(kb.exists_value("Car", "wheels"));
    assert_eq!(kb.registry().list_facet_kinds("Car", "wheels"), vec!["ref"]);
}

#[test]
fn test_put_through_reference_fires_target_demon_once() {
    let mut kb = vehicles();
    let calls = recorder(&mut kb, "audit");
    assert!(kb.create_demon("Vehicle", "wheels", DemonKind::IfPutV));
    assert!(kb.put_demon("Vehicle", "wheels", DemonKind::IfPutV, "audit"));

    assert!(kb.put_value("Car", "wheels", "6"));
    assert_eq!(*calls.lock(), vec!["Vehicle"]);
    assert_eq!(kb.get_value("Vehicle", "wheels").as_deref(), Some("6"));
}

#[test]
fn test_ifref_fires_on_forwarding_frame() {
    let mut kb = vehicles();
    let hops = recorder(&mut kb, "hop");
    assert!(kb.create_demon("Car", "wheels", DemonKind::IfRef));
    assert!(kb.put_demon("Car", "wheels", DemonKind::IfRef, "hop"));

    assert_eq!(kb.get_value("Car", "wheels").as_deref(), Some("4"));
    assert_eq!(kb.get_value("Vehicle", "wheels").as_deref(), Some("4"));
    assert_eq!(*hops.lock(), vec!["Car"]);
}

#[test]
fn test_cycle_is_reported() {
    let mut kb = KnowledgeBase::new();
    for (frame, target) in [("A", "B"), ("B", "C"), ("C", "A")] {
        kb.registry_mut().create(frame);
        kb.registry_mut().create_slot(frame, "slot");
        assert!(kb.create_reference(frame, "slot"));
        assert!(kb.put_reference(frame, "slot", target));
    }

    assert_eq!(kb.get_value("A", "slot"), None);
    assert!(!kb.put_value("A", "slot", "x"));
    assert!(!kb.create_value("A", "slot"));
    assert!(matches!(
        kb.resolve("A", "slot"),
        Err(FrameError::ReferenceCycle { .. })
    ));
    assert_eq!(kb.reference_path("B", "slot"), vec!["B", "C", "A"]);
}

#[test]
fn test_queries_see_delegated_values() {
    let mut kb = vehicles();
    kb.registry_mut().create("Bike");
    kb.registry_mut().create_slot("Bike", "wheels");
    assert!(kb.create_value("Bike", "wheels"));
    assert!(kb.put_value("Bike", "wheels", "2"));

    assert_eq!(kb.find_eq("wheels", "4"), vec!["Car", "Vehicle"]);
    assert_eq!(kb.find_ne("wheels", "4"), vec!["Bike"]);
}

#[test]
fn test_execute_method_passes_landing_frame() {
    let mut kb = vehicles();
    let runs = recorder(&mut kb, "honk");
    kb.registry_mut().create_slot("Vehicle", "horn");
    kb.registry_mut().create_slot("Car", "horn");
    assert!(kb.create_method("Vehicle", "horn"));
    assert!(kb.put_method("Vehicle", "horn", "honk"));
    assert!(kb.create_reference("Car", "horn"));
    assert!(kb.put_reference("Car", "horn", "Vehicle"));

    assert!(kb.execute_method("Car", "horn"));
    assert_eq!(*runs.lock(), vec!["Vehicle"]);
}
