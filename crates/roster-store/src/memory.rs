//! In-memory student store.
//!
//! [`InMemoryStudentStore`] keeps every record in a `Vec` behind a single
//! `Mutex`. Reads and writes take the same lock, so a replace (remove then
//! append) is never observed half-done and concurrent inserts never hand
//! out the same id. Data is lost when the store is dropped.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::policy::{IdPolicy, UpdatePolicy};
use crate::record::{Student, StudentDraft, StudentId};
use crate::traits::StudentStore;

#[derive(Debug, Default)]
struct Inner {
    students: Vec<Student>,
    /// Last id handed out under [`IdPolicy::Monotonic`].
    last_id: i64,
}

impl Inner {
    fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }

    fn next_id(&mut self, policy: IdPolicy) -> StudentId {
        match policy {
            IdPolicy::CollectionSize => StudentId(self.students.len() as i64 + 1),
            IdPolicy::Monotonic => {
                self.last_id += 1;
                StudentId(self.last_id)
            }
        }
    }
}

/// `Vec`-backed implementation of [`StudentStore`].
pub struct InMemoryStudentStore {
    inner: Mutex<Inner>,
    id_policy: IdPolicy,
    update_policy: UpdatePolicy,
}

impl InMemoryStudentStore {
    /// Create an empty store with the default policies.
    pub fn new() -> Self {
        Self::with_policies(IdPolicy::default(), UpdatePolicy::default())
    }

    pub fn with_policies(id_policy: IdPolicy, update_policy: UpdatePolicy) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            id_policy,
            update_policy,
        }
    }

    /// Remove all records. The monotonic counter is not reset.
    pub fn clear(&self) -> StoreResult<()> {
        self.lock()?.students.clear();
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStore for InMemoryStudentStore {
    fn insert(&self, draft: StudentDraft) -> StoreResult<Student> {
        let mut inner = self.lock()?;
        let id = inner.next_id(self.id_policy);
        let student = Student::from_draft(id, draft);
        inner.students.push(student.clone());
        debug!(%id, len = inner.students.len(), "student inserted");
        Ok(student)
    }

    fn list(&self) -> StoreResult<Vec<Student>> {
        Ok(self.lock()?.students.clone())
    }

    fn find(&self, id: StudentId) -> StoreResult<Option<Student>> {
        let inner = self.lock()?;
        Ok(inner.students.iter().find(|s| s.id == id).cloned())
    }

    fn replace(&self, id: StudentId, draft: StudentDraft) -> StoreResult<Option<Student>> {
        let mut inner = self.lock()?;
        let Some(pos) = inner.position(id) else {
            return Ok(None);
        };
        let student = Student::from_draft(id, draft);
        match self.update_policy {
            UpdatePolicy::MoveToEnd => {
                inner.students.remove(pos);
                inner.students.push(student.clone());
            }
            UpdatePolicy::InPlace => {
                inner.students[pos] = student.clone();
            }
        }
        debug!(%id, policy = %self.update_policy, "student replaced");
        Ok(Some(student))
    }

    fn delete(&self, id: StudentId) -> StoreResult<bool> {
        let mut inner = self.lock()?;
        match inner.position(id) {
            Some(pos) => {
                inner.students.remove(pos);
                debug!(%id, len = inner.students.len(), "student deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.students.len())
    }
}

impl std::fmt::Debug for InMemoryStudentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut d = f.debug_struct("InMemoryStudentStore");
        match self.lock() {
            Ok(inner) => d.field("student_count", &inner.students.len()),
            Err(_) => d.field("student_count", &"poisoned"),
        };
        d.field("id_policy", &self.id_policy)
            .field("update_policy", &self.update_policy)
            .finish()
    }
}
