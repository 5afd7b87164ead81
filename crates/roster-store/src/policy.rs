//! Id assignment and update ordering policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// How the store picks the id of a newly inserted record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// `id = len + 1` at insertion time. Ids of deleted records come back,
    /// and may collide with a live record after a deletion in the middle.
    #[default]
    CollectionSize,
    /// A counter that starts at 1 and only ever increases.
    Monotonic,
}

/// Where an updated record ends up in the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdatePolicy {
    /// Remove the old record and append the replacement.
    #[default]
    MoveToEnd,
    /// Overwrite the record at its current position.
    InPlace,
}

impl IdPolicy {
    pub const ALL: [IdPolicy; 2] = [IdPolicy::CollectionSize, IdPolicy::Monotonic];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CollectionSize => "collection-size",
            Self::Monotonic => "monotonic",
        }
    }
}

impl UpdatePolicy {
    pub const ALL: [UpdatePolicy; 2] = [UpdatePolicy::MoveToEnd, UpdatePolicy::InPlace];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MoveToEnd => "move-to-end",
            Self::InPlace => "in-place",
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdPolicy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| StoreError::UnknownPolicy { kind: "id", value: s.to_string() })
    }
}

impl FromStr for UpdatePolicy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| StoreError::UnknownPolicy { kind: "update", value: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        assert_eq!(IdPolicy::default(), IdPolicy::CollectionSize);
        assert_eq!(UpdatePolicy::default(), UpdatePolicy::MoveToEnd);
    }

    #[test]
    fn parse_and_display_agree() {
        for p in IdPolicy::ALL {
            assert_eq!(p.to_string().parse::<IdPolicy>().unwrap(), p);
        }
        for p in UpdatePolicy::ALL {
            assert_eq!(p.to_string().parse::<UpdatePolicy>().unwrap(), p);
        }
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = "random".parse::<IdPolicy>().unwrap_err();
        assert_eq!(err.to_string(), "unknown id policy: random");
        assert!("append".parse::<UpdatePolicy>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        assert_eq!(serde_json::to_string(&IdPolicy::Monotonic).unwrap(), "\"monotonic\"");
        let p: UpdatePolicy = serde_json::from_str("\"in-place\"").unwrap();
        assert_eq!(p, UpdatePolicy::InPlace);
    }
}
