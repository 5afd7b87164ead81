use crate::error::StoreResult;
use crate::record::{Student, StudentDraft, StudentId};

/// An ordered collection of student records.
///
/// All implementations must satisfy these invariants:
/// - Ids are assigned by the store; the draft never carries one.
/// - `list` returns records in collection order.
/// - Lookups by id resolve to the first matching record in that order.
/// - Each call is atomic with respect to every other call.
pub trait StudentStore: Send + Sync {
    /// Assign an id to `draft`, append it and return the stored record.
    fn insert(&self, draft: StudentDraft) -> StoreResult<Student>;

    /// Snapshot of every record in collection order.
    fn list(&self) -> StoreResult<Vec<Student>>;

    /// Returns `Ok(None)` if no record has this id.
    fn find(&self, id: StudentId) -> StoreResult<Option<Student>>;

    /// Replace the record with this id by one built from `draft`, keeping
    /// the id. Returns `Ok(None)` if no record has this id.
    fn replace(&self, id: StudentId, draft: StudentDraft) -> StoreResult<Option<Student>>;

    /// Remove the record with this id. Returns `true` if it existed.
    fn delete(&self, id: StudentId) -> StoreResult<bool>;

    /// Number of records currently stored.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
