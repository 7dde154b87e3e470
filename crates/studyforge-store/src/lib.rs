//! studyforge-store — JSON-file persistence for user profiles.
//!
//! Explicit repository objects with a save-after-mutate contract: every
//! mutation is written to disk before the call returns.

pub mod profile;
pub mod roster;

pub use profile::ProfileStore;
pub use roster::Roster;
