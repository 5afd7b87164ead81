//! Student record types.
//!
//! A [`StudentDraft`] is what a client sends; a [`Student`] is what the
//! store keeps. The only difference is the store-assigned [`StudentId`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a student record.
///
/// Serialized as a bare JSON integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl StudentId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a decimal integer literal with an optional sign, e.g. `"7"`,
/// `"+7"` or `"-7"`. Surrounding whitespace is rejected.
impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A stored student record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub program: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
}

impl Student {
    /// Build a record from a draft, pinning it to `id`.
    pub fn from_draft(id: StudentId, draft: StudentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            program: draft.program,
            college: draft.college,
        }
    }
}

/// Client-supplied student fields.
///
/// Missing fields decode to their empty value, so an update body of
/// `{"name":"X"}` clears `program` rather than keeping the old one. Any
/// `id` in the body is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentDraft {
    pub name: String,
    pub program: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
}

impl StudentDraft {
    pub fn new(name: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            college: None,
        }
    }

    pub fn with_college(mut self, college: impl Into<String>) -> Self {
        self.college = Some(college.into());
        self
    }
}
