//! Self-clearing field messages
//!
//! Each shown message gets a fresh generation. The clear timer carries that
//! generation back, so a timer belonging to a replaced message does nothing.
//! Scheduling itself happens in `actions::timers`; this type only holds the
//! text and decides whether an expiry still applies.

use std::collections::BTreeMap;
use std::time::Duration;

/// How long a message stays visible unless configured otherwise
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub text: String,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct TransientMessages<K: Ord + Copy> {
    entries: BTreeMap<K, TransientMessage>,
    next_generation: u64,
}

impl<K: Ord + Copy> Default for TransientMessages<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_generation: 1,
        }
    }
}

impl<K: Ord + Copy> TransientMessages<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` on `key`, replacing any current message
    ///
    /// Returns the generation the clear timer must present.
    pub fn show(&mut self, key: K, text: impl Into<String>) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.entries.insert(
            key,
            TransientMessage {
                text: text.into(),
                generation,
            },
        );
        generation
    }

    /// Clear `key` if its message is still the one from `generation`
    pub fn expire(&mut self, key: K, generation: u64) -> bool {
        match self.entries.get(&key) {
            Some(msg) if msg.generation == generation => {
                self.entries.remove(&key);
                true
            }
            _ => false,
        }
    }

    /// Clear `key` regardless of generation
    pub fn dismiss(&mut self, key: K) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Clear everything, returning the keys that had a message
    pub fn clear(&mut self) -> Vec<K> {
        let keys = self.entries.keys().copied().collect();
        self.entries.clear();
        keys
    }

    pub fn get(&self, key: K) -> Option<&str> {
        self.entries.get(&key).map(|m| m.text.as_str())
    }

    pub fn generation(&self, key: K) -> Option<u64> {
        self.entries.get(&key).map(|m| m.generation)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> {
        self.entries.iter().map(|(k, m)| (*k, m.text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::FieldId;

    #[test]
    fn test_show_and_expire() {
        let mut messages = TransientMessages::new();
        let generation = messages.show(FieldId::Email, "Enter a valid email");

        assert_eq!(messages.get(FieldId::Email), Some("Enter a valid email"));
        assert!(messages.expire(FieldId::Email, generation));
        assert_eq!(messages.get(FieldId::Email), None);
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut messages = TransientMessages::new();
        let first = messages.show(FieldId::Name, "Please enter your name");
        let second = messages.show(FieldId::Name, "Please enter your name");

        assert_ne!(first, second);
        assert!(!messages.expire(FieldId::Name, first));
        assert!(messages.get(FieldId::Name).is_some());
        assert!(messages.expire(FieldId::Name, second));
    }

    #[test]
    fn test_generations_are_unique_across_keys() {
        let mut messages = TransientMessages::new();
        let a = messages.show(FieldId::Name, "a");
        let b = messages.show(FieldId::Email, "b");
        assert_ne!(a, b);
        assert!(!messages.expire(FieldId::Name, b));
    }

    #[test]
    fn test_clear_reports_keys() {
        let mut messages = TransientMessages::new();
        messages.show(FieldId::Email, "x");
        messages.show(FieldId::Name, "y");

        assert_eq!(messages.clear(), vec![FieldId::Name, FieldId::Email]);
        assert!(messages.is_empty());
    }
}
