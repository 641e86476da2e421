//! Shared fixtures for integration tests

use framesets::KnowledgeBase;
use parking_lot::Mutex;
use std::sync::Arc;

/// Register a procedure under `name` that records every frame it is invoked with.
pub fn recorder(kb: &mut KnowledgeBase, name: &str) -> Arc<Mutex<Vec<String>>> {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    assert!(kb.register_method(name, move |frame: &str| sink.lock().push(frame.to_string())));
    calls
}

/// `Vehicle.wheels = "4"` and `Car.wheels -> Vehicle`.
pub fn vehicles() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    let registry = kb.registry_mut();
    assert!(registry.create("Vehicle"));
    assert!(registry.create_slot("Vehicle", "wheels"));
    assert!(registry.create("Car"));
    assert!(registry.create_slot("Car", "wheels"));
    assert!(kb.create_value("Vehicle", "wheels"));
    assert!(kb.put_value("Vehicle", "wheels", "4"));
    assert!(kb.create_reference("Car", "wheels"));
    assert!(kb.put_reference("Car", "wheels", "Vehicle"));
    kb
}
