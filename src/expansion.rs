//! Expansion State
//!
//! Set of expanded keys for one nesting level of a hierarchical view.
//! Ephemeral, per-session state; each view holds one set per level in a
//! signal and never persists it.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    keys: HashSet<String>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Symmetric difference with a single key: present -> remove,
    /// absent -> add.
    pub fn toggle(&mut self, key: &str) {
        if !self.keys.remove(key) {
            self.keys.insert(key.to_string());
        }
    }

    /// Flip between all-collapsed and all-expanded: if every group is
    /// already expanded, collapse to empty, otherwise expand to the full
    /// key set.
    pub fn toggle_all(&mut self, all_keys: &[String]) {
        if self.keys.len() == all_keys.len() {
            self.keys.clear();
        } else {
            self.keys = all_keys.iter().cloned().collect();
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let mut set = ExpansionSet::new();
        assert!(!set.is_expanded("Finance"));
        set.toggle("Finance");
        assert!(set.is_expanded("Finance"));
        set.toggle("Finance");
        assert!(!set.is_expanded("Finance"));
    }

    #[test]
    fn test_toggle_all_round_trip() {
        let all = keys(&["Finance", "Ventes", "RH"]);
        let mut set = ExpansionSet::new();

        set.toggle_all(&all);
        assert_eq!(set.len(), 3);
        for key in &all {
            assert!(set.is_expanded(key));
        }

        set.toggle_all(&all);
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_all_from_partial_expands() {
        let all = keys(&["Finance", "Ventes"]);
        let mut set = ExpansionSet::new();
        set.toggle("Finance");

        set.toggle_all(&all);
        assert_eq!(set.len(), 2);
    }
}
