//! Configured role mapper
//!
//! Wires tenant configuration, the built-in maps and the optional parse cache
//! into the outbound and inbound resolvers.
//!
//! Outbound, local role to LTI roles:
//!
//! ```text
//! tool map ─────────┐
//! tenant property ──┼─> OutboundResolver ─> LTI roles
//! default ──────────┘         │
//!                             └─ unmapped: legacy chain (tenant legacy > default legacy)
//! ```
//!
//! Inbound, LTI roles to one local role:
//!
//! ```text
//! LTI tokens ─> legacy chain (tenant legacy > default legacy) ─> URNs
//!
//! tenant map ───────┐
//! tenant property ──┼─> InboundResolver ─> first valid candidate
//! default ──────────┘
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheStats, MapCache};
use crate::config::RoleMapConfig;
use crate::map::{parse_inbound_map, parse_legacy_map, parse_outbound_map, LegacyMap, RoleMap};
use crate::resolver::{InboundResolver, OutboundResolver};
use crate::vocab::{DEFAULT_INBOUND_ROLE_MAP, DEFAULT_LEGACY_ROLE_MAP, DEFAULT_OUTBOUND_ROLE_MAP};

/// Role mapper bound to one tenant configuration
///
/// Holds no per-call state. Without a cache every call parses its maps from
/// the source strings; with one, parsed maps are shared by source string.
pub struct RoleMapper {
    config: RoleMapConfig,
    cache: Option<Arc<MapCache>>,
}

impl RoleMapper {
    /// Creates a mapper, building a cache when the configuration enables it
    pub fn new(config: RoleMapConfig) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| Arc::new(MapCache::with_limits(config.cache.ttl(), config.cache.capacity)));

        debug!(
            tenant_outbound = config.outbound_role_map.is_some(),
            tenant_inbound = config.inbound_role_map.is_some(),
            tenant_legacy = config.legacy_role_map.is_some(),
            cache = cache.is_some(),
            "RoleMapper initialized"
        );

        Self { config, cache }
    }

    /// Creates a mapper sharing an existing cache
    pub fn with_cache(config: RoleMapConfig, cache: Arc<MapCache>) -> Self {
        Self {
            config,
            cache: Some(cache),
        }
    }

    /// Tenant configuration
    pub fn config(&self) -> &RoleMapConfig {
        &self.config
    }

    /// Cache statistics, when caching is enabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| cache.stats())
    }

    /// LTI roles to send for `local_role`
    ///
    /// `tool_role_map` is the tool's own outbound override, if it has one.
    pub fn map_outbound(&self, local_role: &str, tool_role_map: Option<&str>) -> Option<String> {
        let tool = self.outbound_map(tool_role_map);
        let tenant = self.outbound_map(self.config.outbound_role_map.as_deref());
        let default = self.outbound_map(Some(DEFAULT_OUTBOUND_ROLE_MAP));
        let tenant_legacy = self.legacy_map(self.config.legacy_role_map.as_deref());
        let default_legacy = self.legacy_map(Some(DEFAULT_LEGACY_ROLE_MAP));

        OutboundResolver::new(&tool, &tenant, &default, &tenant_legacy, &default_legacy)
            .resolve(local_role)
    }

    /// Local role for an incoming comma-separated LTI role list
    ///
    /// `valid_roles` are the roles the target context supports;
    /// `tenant_role_map` is the inbound override stored on the tenant record.
    pub fn map_inbound<S>(
        &self,
        incoming_roles: &str,
        valid_roles: &HashSet<S>,
        tenant_role_map: Option<&str>,
    ) -> Option<String>
    where
        S: Borrow<str> + Hash + Eq,
    {
        let tenant = self.inbound_map(tenant_role_map);
        let tenant_property = self.inbound_map(self.config.inbound_role_map.as_deref());
        let default = self.inbound_map(Some(DEFAULT_INBOUND_ROLE_MAP));
        let tenant_legacy = self.legacy_map(self.config.legacy_role_map.as_deref());
        let default_legacy = self.legacy_map(Some(DEFAULT_LEGACY_ROLE_MAP));

        InboundResolver::new(&tenant, &tenant_property, &default, &tenant_legacy, &default_legacy)
            .resolve(incoming_roles, valid_roles)
    }

    fn outbound_map(&self, spec: Option<&str>) -> Arc<RoleMap> {
        match (spec, &self.cache) {
            (Some(spec), Some(cache)) => cache.outbound(spec),
            _ => Arc::new(parse_outbound_map(spec)),
        }
    }

    fn inbound_map(&self, spec: Option<&str>) -> Arc<RoleMap> {
        match (spec, &self.cache) {
            (Some(spec), Some(cache)) => cache.inbound(spec),
            _ => Arc::new(parse_inbound_map(spec)),
        }
    }

    fn legacy_map(&self, spec: Option<&str>) -> Arc<LegacyMap> {
        match (spec, &self.cache) {
            (Some(spec), Some(cache)) => cache.legacy(spec),
            _ => Arc::new(parse_legacy_map(spec)),
        }
    }
}

impl Default for RoleMapper {
    fn default() -> Self {
        Self::new(RoleMapConfig::default())
    }
}
