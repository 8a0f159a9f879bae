//! The data-access interface the game engine is written against.

use chrono::NaiveDateTime;

use crate::error::StoreResult;
use crate::history::HistoryEntry;

/// Read/write access to roster, tasks, role memory, history, and time.
///
/// Implementations hold no randomization logic. All calls are synchronous;
/// callers sharing one store across threads must serialize access.
pub trait RosterAccess {
    /// Everyone on the roster, in insertion order.
    fn people(&self) -> &[String];

    /// Raw stored birthdate for `name`, if any.
    fn birthdate(&self, name: &str) -> Option<&str>;

    /// Store (or replace) the birthdate for a person on the roster.
    fn set_birthdate(&mut self, name: &str, value: &str) -> StoreResult<()>;

    /// The full task catalog, in order.
    fn task_catalog(&self) -> &[String];

    /// The selected tasks in catalog order, or the whole catalog when
    /// nothing is selected.
    fn active_tasks(&self) -> Vec<&str>;

    /// Roles recently assigned to `name`, most recent first.
    fn role_history(&self, name: &str) -> &[String];

    /// Remember that `name` was just given `role`.
    fn append_role_history(&mut self, name: &str, role: &str);

    /// Push a successful result onto the recent-results log.
    fn record_history(&mut self, entry: HistoryEntry);

    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}
