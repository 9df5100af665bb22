//! Tool record type definitions

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A registered external tool
///
/// `scope` is the context (site) the tool belongs to; an empty scope means the
/// tool is available everywhere. `data` is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord<D = ()> {
    /// Launch URL prefix
    pub launch: String,

    /// Context identifier, empty for global tools
    #[serde(default)]
    pub scope: String,

    /// Opaque data owned by the caller
    pub data: D,
}

impl ToolRecord<()> {
    /// Creates a globally scoped record without data
    pub fn global(launch: impl Into<String>) -> Self {
        Self::new(launch, "", ())
    }

    /// Creates a context scoped record without data
    pub fn local(launch: impl Into<String>, scope: impl Into<String>) -> Self {
        Self::new(launch, scope, ())
    }
}

impl<D> ToolRecord<D> {
    /// Creates a record with caller data
    pub fn new(launch: impl Into<String>, scope: impl Into<String>, data: D) -> Self {
        Self {
            launch: launch.into(),
            scope: scope.into(),
            data,
        }
    }

    /// Whether the record is available in every context
    pub fn is_global(&self) -> bool {
        self.scope.is_empty()
    }

    /// Rank of this record for `target_url` seen from `current_scope`
    ///
    /// Returns `None` when the launch prefix does not match, the prefix is
    /// empty, or the record belongs to a different context.
    pub fn rank(&self, target_url: &str, current_scope: &str) -> Option<MatchRank> {
        if self.launch.is_empty() || !target_url.starts_with(&self.launch) {
            return None;
        }

        let local = if self.is_global() {
            false
        } else if !current_scope.is_empty() && self.scope == current_scope {
            true
        } else {
            return None;
        };

        Some(MatchRank {
            local,
            prefix_len: self.launch.len(),
        })
    }
}

/// Ordering key for a matching record: locality first, then prefix length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchRank {
    /// Scoped to the current context
    pub local: bool,
    /// Length of the matching launch prefix in bytes
    pub prefix_len: usize,
}

impl Ord for MatchRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.local
            .cmp(&other.local)
            .then(self.prefix_len.cmp(&other.prefix_len))
    }
}

impl PartialOrd for MatchRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
