//! Tenant role mapping configuration
//!
//! Every value that used to be looked up from a process-wide configuration
//! service is carried here and handed to the resolvers explicitly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, RoleMapError};

/// Environment variable for the tenant outbound role map
pub const ENV_OUTBOUND_ROLE_MAP: &str = "LTI_OUTBOUND_ROLE_MAP";

/// Environment variable for the tenant inbound role map
pub const ENV_INBOUND_ROLE_MAP: &str = "LTI_INBOUND_ROLE_MAP";

/// Environment variable for the tenant legacy role map
pub const ENV_LEGACY_ROLE_MAP: &str = "LTI_LEGACY_ROLE_MAP";

/// Environment variable enabling the parsed map cache
pub const ENV_CACHE_ENABLED: &str = "LTI_ROLE_MAP_CACHE";

/// Environment variable for the parsed map cache TTL in seconds
pub const ENV_CACHE_TTL: &str = "LTI_ROLE_MAP_CACHE_TTL";

/// Environment variable for the maximum number of cached maps
pub const ENV_CACHE_CAPACITY: &str = "LTI_ROLE_MAP_CACHE_CAPACITY";

/// Tenant-level role map configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleMapConfig {
    /// Tenant outbound map (`localRole:alias,...;...`)
    pub outbound_role_map: Option<String>,

    /// Tenant inbound map (`urn:candidate,...;...`)
    pub inbound_role_map: Option<String>,

    /// Tenant legacy map (`token=urn;...`)
    pub legacy_role_map: Option<String>,

    /// Parsed map cache settings
    pub cache: CacheSettings,
}

/// Parsed map cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Memoize parsed maps by source string
    pub enabled: bool,

    /// Milliseconds a parsed map stays valid; zero never expires
    pub ttl_ms: u64,

    /// Maximum number of cached maps
    pub capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_ms: 60_000,
            capacity: 1_000,
        }
    }
}

impl CacheSettings {
    /// TTL as a duration
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

/// Whole milliseconds covering `ttl`, rounding any fraction up
fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX)
}

impl RoleMapConfig {
    /// Reads the configuration from `LTI_*` environment variables
    ///
    /// Unset variables keep their defaults, as do an unparsable TTL or
    /// capacity. The TTL variable is in whole seconds.
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            outbound_role_map: env_var(ENV_OUTBOUND_ROLE_MAP)?,
            inbound_role_map: env_var(ENV_INBOUND_ROLE_MAP)?,
            legacy_role_map: env_var(ENV_LEGACY_ROLE_MAP)?,
            cache: CacheSettings::default(),
        };

        if let Some(enabled) = env_var(ENV_CACHE_ENABLED)? {
            config.cache.enabled = matches!(enabled.trim(), "1" | "true" | "yes" | "on");
        }
        if let Some(secs) = env_var(ENV_CACHE_TTL)?.and_then(|ttl| ttl.trim().parse::<u64>().ok()) {
            config.cache.ttl_ms = secs.saturating_mul(1_000);
        }
        if let Some(capacity) = env_var(ENV_CACHE_CAPACITY)?.and_then(|cap| cap.trim().parse().ok()) {
            config.cache.capacity = capacity;
        }

        Ok(config)
    }

    /// Parses a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the tenant outbound map
    pub fn with_outbound_role_map(mut self, spec: impl Into<String>) -> Self {
        self.outbound_role_map = Some(spec.into());
        self
    }

    /// Sets the tenant inbound map
    pub fn with_inbound_role_map(mut self, spec: impl Into<String>) -> Self {
        self.inbound_role_map = Some(spec.into());
        self
    }

    /// Sets the tenant legacy map
    pub fn with_legacy_role_map(mut self, spec: impl Into<String>) -> Self {
        self.legacy_role_map = Some(spec.into());
        self
    }

    /// Enables the parsed map cache with the given TTL
    ///
    /// Sub-millisecond remainders round up, so a non-zero TTL never
    /// becomes the non-expiring zero.
    pub fn with_cache(mut self, ttl: Duration) -> Self {
        self.cache.enabled = true;
        self.cache.ttl_ms = ttl_millis(ttl);
        self
    }

    /// Sets the maximum number of cached maps
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache.capacity = capacity;
        self
    }
}

fn env_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(RoleMapError::InvalidEnv(name.to_string())),
    }
}
