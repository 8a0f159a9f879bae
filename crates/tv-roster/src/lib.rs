//! Roster storage for Tribe Vibe.
//!
//! Holds the people in the group, their birthdates, the task catalog and
//! its active selection, the recent-results history, and per-person role
//! memory. The game engine reads and writes all of it through the
//! [`RosterAccess`] trait; [`RosterStore`] is the in-memory implementation
//! with JSON file persistence.

pub mod access;
pub mod clock;
pub mod defaults;
pub mod error;
pub mod history;
pub mod store;

pub use access::RosterAccess;
pub use clock::Clock;
pub use error::{StoreError, StoreResult};
pub use history::{BoundedLog, HistoryEntry};
pub use store::RosterStore;

/// Maximum number of entries kept in the recent-results history.
pub const HISTORY_CAP: usize = 5;

/// Maximum number of remembered roles per person.
pub const ROLE_HISTORY_CAP: usize = 5;
