use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recorded filename substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    pub old: String,
    pub new: String,
}

/// Two different source names mapped to the same new filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub new: String,
    pub replaced_old: String,
    pub kept_old: String,
}

/// Filename substitutions keyed by the new filename.
///
/// Keys are unique, so a later insert for the same new filename replaces the
/// earlier old filename. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTable {
    entries: BTreeMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `new -> old`. Returns the previous old filename when a different
    /// one was already stored under `new`.
    pub fn insert(&mut self, new: String, old: String) -> Option<String> {
        match self.entries.insert(new, old.clone()) {
            Some(previous) if previous != old => Some(previous),
            _ => None,
        }
    }

    pub fn get(&self, new: &str) -> Option<&str> {
        self.entries.get(new).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(new, old)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(new, old)| (new.as_str(), old.as_str()))
    }

    pub fn entries(&self) -> Vec<RenameEntry> {
        self.iter()
            .map(|(new, old)| RenameEntry {
                old: old.to_string(),
                new: new.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = RenameTable::new();
        assert!(table
            .insert("TiStringImpl.cpp".to_string(), "JSStringImpl.cpp".to_string())
            .is_none());
        assert_eq!(table.get("TiStringImpl.cpp"), Some("JSStringImpl.cpp"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_same_pair_twice_is_not_a_collision() {
        // The same basename in two directories records the same entry
        let mut table = RenameTable::new();
        table.insert("TiBase.h".to_string(), "JSBase.h".to_string());
        assert!(table
            .insert("TiBase.h".to_string(), "JSBase.h".to_string())
            .is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        // JSArray and JSByte both map to TiArray
        let mut table = RenameTable::new();
        table.insert("TiArray.cpp".to_string(), "JSArray.cpp".to_string());
        let previous = table.insert("TiArray.cpp".to_string(), "JSByte.cpp".to_string());
        assert_eq!(previous.as_deref(), Some("JSArray.cpp"));
        assert_eq!(table.get("TiArray.cpp"), Some("JSByte.cpp"));
    }

    #[test]
    fn test_entries_sorted_by_new_name() {
        let mut table = RenameTable::new();
        table.insert("TiValue.h".to_string(), "JSValue.h".to_string());
        table.insert("TiBase.h".to_string(), "JSBase.h".to_string());
        let names: Vec<_> = table.iter().map(|(new, _)| new).collect();
        assert_eq!(names, vec!["TiBase.h", "TiValue.h"]);
    }
}
