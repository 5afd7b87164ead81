//! Student record storage for the Roster service.
//!
//! The store owns a single ordered collection of [`Student`] records and
//! is the only place ids are handed out. Handlers never touch the
//! collection directly; they go through the [`StudentStore`] trait.
//!
//! # Modules
//!
//! - [`error`] — Error types for store operations
//! - [`record`] — [`Student`], [`StudentDraft`] and [`StudentId`]
//! - [`policy`] — [`IdPolicy`] and [`UpdatePolicy`]
//! - [`traits`] — The [`StudentStore`] trait
//! - [`memory`] — [`InMemoryStudentStore`], the `Vec`-backed implementation
//!
//! # Design Rules
//!
//! 1. Every read and write takes the same exclusive lock.
//! 2. Ids are assigned by the store, never by the client.
//! 3. Lookups scan in collection order; the first match wins.

pub mod error;
pub mod memory;
pub mod policy;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStudentStore;
pub use policy::{IdPolicy, UpdatePolicy};
pub use record::{Student, StudentDraft, StudentId};
pub use traits::StudentStore;
