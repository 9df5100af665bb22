//! Role map loaders
//!
//! Parses the flat property strings tenants persist into lookup maps:
//!
//! - legacy: `token=urn;token2=urn2`
//! - outbound: `localRole:alias1,alias2;localRole2:alias3`
//! - inbound: `urn:candidate1,candidate2;urn2:candidate3`
//!
//! The format has no escaping for `;`, `:` or `,`. Malformed entries are
//! skipped rather than rejected, since these strings are often hand-edited.

mod inbound;
mod legacy;
mod outbound;


pub use inbound::parse_inbound_map;
pub use legacy::parse_legacy_map;
pub use outbound::parse_outbound_map;

use std::collections::HashMap;

/// Local role name => LTI aliases
pub type OutboundMap = RoleMap;

/// LTI role URN => local role candidates
pub type InboundMap = RoleMap;

/// A key associated with an ordered sequence of aliases
///
/// The first alias is preferred; order is insertion order and encodes priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMap {
    entries: HashMap<String, Vec<String>>,
}

impl RoleMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aliases for a key, in priority order
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Aliases for a key joined with `,`
    pub fn get_joined(&self, key: &str) -> Option<String> {
        self.get(key).map(|aliases| aliases.join(","))
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over keys in arbitrary order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Sets the aliases for a key, replacing any previous ones
    pub fn insert(&mut self, key: impl Into<String>, aliases: Vec<String>) {
        self.entries.insert(key.into(), aliases);
    }

    /// Appends aliases to a key, skipping ones already present
    pub fn append(&mut self, key: impl Into<String>, aliases: Vec<String>) {
        let existing = self.entries.entry(key.into()).or_default();
        for alias in aliases {
            if !existing.contains(&alias) {
                existing.push(alias);
            }
        }
    }
}

/// LTI 1.1 role token => canonical LTI role URN
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyMap {
    entries: HashMap<String, String>,
}

impl LegacyMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of legacy tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no tokens
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical URN for a legacy token
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Whether the token is a known legacy identifier
    pub fn contains_key(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Sets the canonical URN for a token
    pub fn insert(&mut self, token: impl Into<String>, urn: impl Into<String>) {
        self.entries.insert(token.into(), urn.into());
    }
}

/// Splits a property string into trimmed, non-empty entries
fn entries(spec: &str, delimiter: char) -> impl Iterator<Item = &str> {
    spec.split(delimiter).map(str::trim).filter(|entry| !entry.is_empty())
}

/// Splits an alias list on `,`, keeping each alias verbatim
///
/// Blank aliases are dropped; any other whitespace is part of the alias.
fn aliases(list: &str) -> Vec<String> {
    list.split(',')
        .filter(|alias| !alias.trim().is_empty())
        .map(str::to_string)
        .collect()
}
