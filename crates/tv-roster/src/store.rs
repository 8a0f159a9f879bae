//! In-memory roster store with JSON file persistence.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::access::RosterAccess;
use crate::clock::Clock;
use crate::defaults::default_tasks;
use crate::error::{StoreError, StoreResult};
use crate::history::{BoundedLog, HistoryEntry};
use crate::{HISTORY_CAP, ROLE_HISTORY_CAP};

type History = BoundedLog<HistoryEntry, HISTORY_CAP>;
type RoleLog = BoundedLog<String, ROLE_HISTORY_CAP>;

/// Everything the games read and write, kept in memory.
///
/// Role memory is keyed by name and outlives the person: removing someone
/// from the roster leaves their role history in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStore {
    #[serde(default)]
    people: Vec<String>,
    #[serde(default)]
    birthdates: BTreeMap<String, String>,
    #[serde(default)]
    tasks: Vec<String>,
    #[serde(default)]
    selection: BTreeSet<usize>,
    #[serde(default)]
    history: History,
    #[serde(default)]
    role_history: BTreeMap<String, RoleLog>,
    #[serde(skip)]
    clock: Clock,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            birthdates: BTreeMap::new(),
            tasks: Vec::new(),
            selection: BTreeSet::new(),
            history: History::new(),
            role_history: BTreeMap::new(),
            clock: Clock::default(),
        }
    }
}

impl RosterStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the default task catalog.
    pub fn with_default_tasks() -> Self {
        let mut store = Self::new();
        store.tasks = default_tasks();
        store
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the time source in place.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    /// Load a store from a JSON file. A missing file yields a fresh store
    /// with the default task catalog.
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            log::debug!("no store at {}, starting fresh", path.display());
            return Ok(Self::with_default_tasks());
        }
        let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut store: Self = serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let len = store.tasks.len();
        let before = store.selection.len();
        store.selection.retain(|&i| i < len);
        if store.selection.len() != before {
            log::debug!("dropped {} stale task selections", before - store.selection.len());
        }
        log::debug!(
            "loaded {} people and {} tasks from {}",
            store.people.len(),
            store.tasks.len(),
            path.display()
        );
        Ok(store)
    }

    /// Write the store to a JSON file.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved store to {}", path.display());
        Ok(())
    }

    /// Add a person. Returns false if the (trimmed) name is empty or
    /// already on the roster.
    pub fn add_person(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.people.iter().any(|p| p == name) {
            return false;
        }
        self.people.push(name.to_string());
        true
    }

    /// Add several people, skipping duplicates. Returns how many were added.
    pub fn add_people<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter(|name| self.add_person(name.as_ref()))
            .count()
    }

    /// Remove a person and their birthdate. Returns true if they existed.
    pub fn remove_person(&mut self, name: &str) -> bool {
        let before = self.people.len();
        self.people.retain(|p| p != name);
        self.birthdates.remove(name);
        self.people.len() < before
    }

    /// Remove everyone, along with all birthdates.
    pub fn clear_people(&mut self) {
        self.people.clear();
        self.birthdates.clear();
    }

    /// All stored birthdates, keyed by name.
    pub fn birthdates(&self) -> &BTreeMap<String, String> {
        &self.birthdates
    }

    /// Replace the task catalog. The selection is reset because its indices
    /// referred to the old catalog.
    pub fn set_task_catalog(&mut self, tasks: Vec<String>) {
        self.tasks = tasks;
        self.selection.clear();
    }

    /// Currently selected task indices. Empty means the whole catalog.
    pub fn task_selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }

    /// Replace the selection with the given indices.
    pub fn select_tasks(&mut self, indices: &[usize]) -> StoreResult<()> {
        if let Some(&index) = indices.iter().find(|&&i| i >= self.tasks.len()) {
            return Err(StoreError::TaskIndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        self.selection = indices.iter().copied().collect();
        Ok(())
    }

    /// Flip one task in or out of the selection. Returns whether it is now
    /// selected.
    pub fn toggle_task(&mut self, index: usize) -> StoreResult<bool> {
        if index >= self.tasks.len() {
            return Err(StoreError::TaskIndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        if self.selection.remove(&index) {
            Ok(false)
        } else {
            self.selection.insert(index);
            Ok(true)
        }
    }

    /// Select every task explicitly.
    pub fn select_all_tasks(&mut self) {
        self.selection = (0..self.tasks.len()).collect();
    }

    /// Drop the selection, so the whole catalog is active.
    pub fn clear_task_selection(&mut self) {
        self.selection.clear();
    }

    /// Recent results, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.items()
    }

    /// Forget all recent results.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl RosterAccess for RosterStore {
    fn people(&self) -> &[String] {
        &self.people
    }

    fn birthdate(&self, name: &str) -> Option<&str> {
        self.birthdates.get(name).map(String::as_str)
    }

    fn set_birthdate(&mut self, name: &str, value: &str) -> StoreResult<()> {
        if !self.people.iter().any(|p| p == name) {
            return Err(StoreError::UnknownPerson(name.to_string()));
        }
        self.birthdates
            .insert(name.to_string(), value.trim().to_string());
        Ok(())
    }

    fn task_catalog(&self) -> &[String] {
        &self.tasks
    }

    fn active_tasks(&self) -> Vec<&str> {
        if self.selection.is_empty() {
            return self.tasks.iter().map(String::as_str).collect();
        }
        self.selection
            .iter()
            .filter_map(|&i| self.tasks.get(i).map(String::as_str))
            .collect()
    }

    fn role_history(&self, name: &str) -> &[String] {
        self.role_history
            .get(name)
            .map(RoleLog::items)
            .unwrap_or(&[])
    }

    fn append_role_history(&mut self, name: &str, role: &str) {
        self.role_history
            .entry(name.to_string())
            .or_default()
            .push(role.to_string());
    }

    fn record_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn store_with(names: &[&str]) -> RosterStore {
        let mut store = RosterStore::new();
        store.add_people(names.iter().copied());
        store
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn add_person_rejects_duplicates_and_blanks() {
        let mut store = RosterStore::new();
        assert!(store.add_person("Alice"));
        assert!(!store.add_person("Alice"));
        assert!(!store.add_person("   "));
        assert!(store.add_person("alice")); // case-sensitive
        assert_eq!(store.people(), &["Alice".to_string(), "alice".to_string()]);
    }

    #[test]
    fn add_people_counts_new_names() {
        let mut store = store_with(&["Alice"]);
        let added = store.add_people(["Bob", "Alice", "Carol", "Bob"]);
        assert_eq!(added, 2);
        assert_eq!(store.people().len(), 3);
    }

    #[test]
    fn remove_person_drops_birthdate() {
        let mut store = store_with(&["Alice", "Bob"]);
        store.set_birthdate("Alice", "15-03").unwrap();
        assert!(store.remove_person("Alice"));
        assert!(store.birthdate("Alice").is_none());
        assert!(!store.remove_person("Alice"));
        assert_eq!(store.people(), &["Bob".to_string()]);
    }

    #[test]
    fn remove_person_keeps_role_history() {
        let mut store = store_with(&["Alice"]);
        store.append_role_history("Alice", "Scribe");
        store.remove_person("Alice");
        assert_eq!(store.role_history("Alice"), &["Scribe".to_string()]);
    }

    #[test]
    fn clear_people_clears_birthdates() {
        let mut store = store_with(&["Alice", "Bob"]);
        store.set_birthdate("Bob", "2000-01-02").unwrap();
        store.clear_people();
        assert!(store.people().is_empty());
        assert!(store.birthdates().is_empty());
    }

    #[test]
    fn birthdate_needs_known_person() {
        let mut store = RosterStore::new();
        let err = store.set_birthdate("Ghost", "01-01").unwrap_err();
        assert!(matches!(err, StoreError::UnknownPerson(_)));
    }

    #[test]
    fn one_birthdate_per_person() {
        let mut store = store_with(&["Alice"]);
        store.set_birthdate("Alice", "01-01").unwrap();
        store.set_birthdate("Alice", "02-02").unwrap();
        assert_eq!(store.birthdate("Alice"), Some("02-02"));
        assert_eq!(store.birthdates().len(), 1);
    }

    #[test]
    fn active_tasks_follow_selection_in_catalog_order() {
        let mut store = RosterStore::new();
        store.set_task_catalog(vec!["T1".into(), "T2".into(), "T3".into()]);
        store.select_tasks(&[2, 0]).unwrap();
        assert_eq!(store.active_tasks(), vec!["T1", "T3"]);
    }

    #[test]
    fn empty_selection_means_whole_catalog() {
        let mut store = RosterStore::new();
        store.set_task_catalog(vec!["T1".into(), "T2".into()]);
        assert_eq!(store.active_tasks(), vec!["T1", "T2"]);
    }

    #[test]
    fn replacing_catalog_resets_selection() {
        let mut store = RosterStore::new();
        store.set_task_catalog(vec!["T1".into(), "T2".into()]);
        store.select_tasks(&[1]).unwrap();
        store.set_task_catalog(vec!["U1".into(), "U2".into(), "U3".into()]);
        assert!(store.task_selection().is_empty());
        assert_eq!(store.active_tasks().len(), 3);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut store = RosterStore::new();
        store.set_task_catalog(vec!["T1".into()]);
        let err = store.select_tasks(&[0, 4]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::TaskIndexOutOfRange { index: 4, len: 1 }
        ));
        assert!(store.task_selection().is_empty());
    }

    #[test]
    fn toggle_task_flips() {
        let mut store = RosterStore::new();
        store.set_task_catalog(vec!["T1".into(), "T2".into()]);
        assert!(store.toggle_task(1).unwrap());
        assert_eq!(store.active_tasks(), vec!["T2"]);
        assert!(!store.toggle_task(1).unwrap());
        assert_eq!(store.active_tasks(), vec!["T1", "T2"]);
        assert!(store.toggle_task(9).is_err());
    }

    #[test]
    fn select_all_then_clear() {
        let mut store = RosterStore::new();
        store.set_task_catalog(vec!["T1".into(), "T2".into()]);
        store.select_all_tasks();
        assert_eq!(store.task_selection().len(), 2);
        store.clear_task_selection();
        assert!(store.task_selection().is_empty());
    }

    #[test]
    fn history_capped_at_five() {
        let mut store = RosterStore::new();
        for i in 0..8 {
            store.record_history(HistoryEntry::new("Game", format!("r{i}"), at(2024, 1, 1)));
        }
        assert_eq!(store.history().len(), 5);
        assert_eq!(store.history()[0].result, "r7");
        store.clear_history();
        assert!(store.history().is_empty());
    }

    #[test]
    fn role_history_capped_at_five() {
        let mut store = RosterStore::new();
        for role in ["A", "B", "C", "D", "E", "F"] {
            store.append_role_history("Alice", role);
        }
        let expected: Vec<String> = ["F", "E", "D", "C", "B"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(store.role_history("Alice"), expected.as_slice());
        assert!(store.role_history("Bob").is_empty());
    }

    #[test]
    fn fixed_clock_is_used() {
        let store = RosterStore::new().with_clock(Clock::Fixed(at(2024, 3, 15)));
        assert_eq!(store.now(), at(2024, 3, 15));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut store = store_with(&["Alice", "Bob"]);
        store.set_birthdate("Alice", "03-15").unwrap();
        store.set_task_catalog(vec!["T1".into(), "T2".into()]);
        store.select_tasks(&[1]).unwrap();
        store.append_role_history("Bob", "Scribe");
        store.record_history(HistoryEntry::new("Game", "result", at(2024, 1, 1)));
        store.save(&path).unwrap();

        let loaded = RosterStore::load(&path).unwrap();
        assert_eq!(loaded.people(), store.people());
        assert_eq!(loaded.birthdate("Alice"), Some("03-15"));
        assert_eq!(loaded.active_tasks(), vec!["T2"]);
        assert_eq!(loaded.role_history("Bob"), &["Scribe".to_string()]);
        assert_eq!(loaded.history().len(), 1);
    }

    #[test]
    fn load_missing_file_seeds_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = RosterStore::load(&dir.path().join("nope.json")).unwrap();
        assert!(store.people().is_empty());
        assert_eq!(store.task_catalog().len(), crate::defaults::DEFAULT_TASKS.len());
    }

    #[test]
    fn load_malformed_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = RosterStore::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }

    #[test]
    fn load_caps_oversized_history() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let entries: Vec<String> = (0..8)
            .map(|i| format!(r#"{{"game":"G{i}","result":"r","timestamp":"2024-01-01T10:00:00"}}"#))
            .collect();
        let roles = r#"["A","B","C","D","E","F","G"]"#;
        fs::write(
            &path,
            format!(
                r#"{{"history":[{}],"role_history":{{"Bob":{roles}}}}}"#,
                entries.join(",")
            ),
        )
        .unwrap();

        let mut store = RosterStore::load(&path).unwrap();
        assert_eq!(store.history().len(), HISTORY_CAP);
        assert_eq!(store.history()[0].game, "G0");
        assert_eq!(store.role_history("Bob").len(), ROLE_HISTORY_CAP);

        for i in 0..20 {
            store.record_history(HistoryEntry::new(format!("N{i}"), "r", at(2024, 1, 2)));
        }
        assert_eq!(store.history().len(), HISTORY_CAP);
        assert_eq!(store.history()[0].game, "N19");
    }

    #[test]
    fn load_drops_stale_selection() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, r#"{"tasks":["T1","T2"],"selection":[5,9]}"#).unwrap();

        let store = RosterStore::load(&path).unwrap();
        assert!(store.task_selection().is_empty());
        assert_eq!(store.active_tasks(), vec!["T1", "T2"]);

        fs::write(&path, r#"{"tasks":["T1","T2"],"selection":[1,7]}"#).unwrap();
        let store = RosterStore::load(&path).unwrap();
        assert_eq!(store.active_tasks(), vec!["T2"]);
    }
}
