//! Registry-wide value queries.
//!
//! These go through the delegating, demon-firing value operations, so a
//! frame whose slot forwards to a prototype matches on the prototype's value.

use crate::kb::KnowledgeBase;

impl KnowledgeBase {
    /// Frames with a value facet for `slot`, sorted.
    pub fn find(&self, slot: &str) -> Vec<String> {
        self.registry
            .list()
            .into_iter()
            .filter(|frame| self.exists_value(frame, slot))
            .collect()
    }

    /// Frames whose value for `slot` equals `value`, sorted.
    pub fn find_eq(&self, slot: &str, value: &str) -> Vec<String> {
        self.find_by(slot, |v| v == value)
    }

    /// Frames with a value for `slot` different from `value`, sorted.
    pub fn find_ne(&self, slot: &str, value: &str) -> Vec<String> {
        self.find_by(slot, |v| v != value)
    }

    fn find_by(&self, slot: &str, pred: impl Fn(&str) -> bool) -> Vec<String> {
        self.find(slot)
            .into_iter()
            .filter(|frame| {
                self.get_value(frame, slot)
                    .map(|v| pred(&v))
                    .unwrap_or(false)
            })
            .collect()
    }
}
