//! Method table
//!
//! Named procedures backing method facets and demons. A facet stores only the
//! method name, so one procedure can serve many slots. Every procedure takes
//! the name of the frame it is invoked for.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A procedure invoked by name from a method facet or demon.
pub trait Method: Send + Sync {
    fn invoke(&self, frame: &str);
}

impl<F> Method for F
where
    F: Fn(&str) + Send + Sync,
{
    fn invoke(&self, frame: &str) {
        self(frame)
    }
}

/// Mapping from method name to procedure
#[derive(Clone, Default)]
pub struct MethodTable {
    methods: HashMap<String, Arc<dyn Method>>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a procedure under `name`. Fails if the name is taken.
    pub fn register(&mut self, name: impl Into<String>, method: impl Method + 'static) -> bool {
        let name = name.into();
        if self.methods.contains_key(&name) {
            return false;
        }
        self.methods.insert(name, Arc::new(method));
        true
    }

    /// Swap the procedure behind an existing name.
    pub fn replace(&mut self, name: &str, method: impl Method + 'static) -> bool {
        match self.methods.get_mut(name) {
            Some(slot) => {
                *slot = Arc::new(method);
                true
            }
            None => false,
        }
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.methods.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Cloned handle to the procedure, so callers can invoke it without
    /// holding a borrow of the table.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Method>> {
        self.methods.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.methods.keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("methods", &self.names())
            .finish()
    }
}
