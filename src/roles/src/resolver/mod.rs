//! Outbound and inbound role resolution
//!
//! Both directions walk an ordered list of map layers and stop at the first
//! layer that knows the key. Layers are never merged. The order is held as
//! data (`precedence()`) rather than spelled out as an if-chain.

mod inbound;
mod outbound;

#[cfg(test)]
mod tests;

pub use inbound::{resolve_inbound, InboundResolver};
pub use outbound::{resolve_outbound, OutboundResolver};

use std::borrow::Cow;
use std::fmt;

use crate::map::LegacyMap;

/// Source of a role map layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Tool-specific override (outbound only)
    Tool,
    /// Tenant record override (inbound only)
    Tenant,
    /// Tenant-configured property
    TenantProperty,
    /// Built-in default
    Default,
    /// Legacy token up-conversion
    Legacy,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tool => write!(f, "tool"),
            Self::Tenant => write!(f, "tenant"),
            Self::TenantProperty => write!(f, "tenant-property"),
            Self::Default => write!(f, "default"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// Legacy up-conversion: tool/tenant legacy map first, then the default one
#[derive(Debug, Clone, Copy)]
pub struct LegacyChain<'a> {
    maps: [&'a LegacyMap; 2],
}

impl<'a> LegacyChain<'a> {
    /// Creates a chain from the overriding and the default legacy map
    pub fn new(override_map: &'a LegacyMap, default_map: &'a LegacyMap) -> Self {
        Self {
            maps: [override_map, default_map],
        }
    }

    /// Canonical URN for a legacy token, if any map knows it
    pub fn upgrade(&self, token: &str) -> Option<&'a str> {
        self.maps.iter().find_map(|map| map.get(token))
    }

    /// Canonical URN for a legacy token, or the token unchanged
    pub fn upgrade_or_keep<'t>(&self, token: &'t str) -> Cow<'t, str> {
        match self.upgrade(token) {
            Some(urn) => Cow::Owned(urn.to_string()),
            None => Cow::Borrowed(token),
        }
    }
}
