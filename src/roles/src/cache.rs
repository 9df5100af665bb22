//! Parsed role map cache
//!
//! Parsing is cheap but happens on every launch. `MapCache` memoizes parsed
//! maps keyed by a BLAKE3 hash of the map kind and the exact source string, so
//! two different strings can never share an entry.
//!
//! The cache is bounded. Expired entries are dropped when they are looked up,
//! and inserting into a full cache first sweeps expired entries and then
//! evicts the oldest ones.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::trace;

use crate::map::{parse_inbound_map, parse_legacy_map, parse_outbound_map, LegacyMap, RoleMap};

/// Default cache TTL (60 seconds)
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Default maximum number of cached maps
const DEFAULT_CACHE_CAPACITY: usize = 1_000;

/// Cache key type (BLAKE3 hash)
type CacheKey = [u8; 32];

/// Which grammar a cached role map was parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapKind {
    Outbound,
    Inbound,
    Legacy,
}

impl MapKind {
    fn tag(self) -> &'static [u8] {
        match self {
            Self::Outbound => b"outbound\0",
            Self::Inbound => b"inbound\0",
            Self::Legacy => b"legacy\0",
        }
    }

    fn key(self, spec: &str) -> CacheKey {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.tag());
        hasher.update(spec.as_bytes());
        *hasher.finalize().as_bytes()
    }
}

/// Cache entry with TTL
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    created_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    /// A zero TTL never expires
    fn is_expired(&self, ttl: Duration) -> bool {
        !ttl.is_zero() && self.created_at.elapsed() > ttl
    }
}

/// Statistics about cache performance
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
    /// Number of expired entries encountered
    pub expirations: usize,
    /// Number of entries evicted to stay within capacity
    pub evictions: usize,
    /// Total number of entries in cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe cache of parsed role maps
pub struct MapCache {
    /// Outbound and inbound maps
    role_maps: DashMap<CacheKey, CacheEntry<Arc<RoleMap>>>,
    /// Legacy maps
    legacy_maps: DashMap<CacheKey, CacheEntry<Arc<LegacyMap>>>,
    /// Entry time-to-live
    ttl: Duration,
    /// Maximum number of maps held across both tables
    capacity: usize,
    /// Hit/miss counters
    stats: DashMap<&'static str, usize>,
}

impl MapCache {
    /// Creates a cache with the default TTL
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL)
    }

    /// Creates a cache with a custom TTL
    ///
    /// `Duration::ZERO` disables expiry; entries then leave only through
    /// eviction or [`MapCache::clear`].
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_limits(ttl, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache with a custom TTL and capacity (at least one entry)
    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            role_maps: DashMap::new(),
            legacy_maps: DashMap::new(),
            ttl,
            capacity: capacity.max(1),
            stats: DashMap::new(),
        }
    }

    /// Parsed outbound map for `spec`
    pub fn outbound(&self, spec: &str) -> Arc<RoleMap> {
        self.role_map(MapKind::Outbound, spec, |spec| parse_outbound_map(spec))
    }

    /// Parsed inbound map for `spec`
    pub fn inbound(&self, spec: &str) -> Arc<RoleMap> {
        self.role_map(MapKind::Inbound, spec, |spec| parse_inbound_map(spec))
    }

    /// Parsed legacy map for `spec`
    pub fn legacy(&self, spec: &str) -> Arc<LegacyMap> {
        let key = MapKind::Legacy.key(spec);
        if let Some(map) = self.lookup(&self.legacy_maps, &key) {
            return map;
        }

        let map = Arc::new(parse_legacy_map(spec));
        self.make_room();
        self.legacy_maps.insert(key, CacheEntry::new(Arc::clone(&map)));
        map
    }

    fn role_map(&self, kind: MapKind, spec: &str, parse: impl FnOnce(&str) -> RoleMap) -> Arc<RoleMap> {
        let key = kind.key(spec);
        if let Some(map) = self.lookup(&self.role_maps, &key) {
            return map;
        }

        let map = Arc::new(parse(spec));
        self.make_room();
        self.role_maps.insert(key, CacheEntry::new(Arc::clone(&map)));
        map
    }

    fn lookup<T: Clone>(&self, maps: &DashMap<CacheKey, CacheEntry<T>>, key: &CacheKey) -> Option<T> {
        let expired = match maps.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                self.increment_stat("hits");
                trace!("Role map cache hit");
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            let ttl = self.ttl;
            maps.remove_if(key, |_, entry| entry.is_expired(ttl));
            self.increment_stat("expirations");
        }
        self.increment_stat("misses");
        trace!(expired, "Role map cache miss");
        None
    }

    /// Sweeps expired entries, then evicts the oldest until one more fits
    fn make_room(&self) {
        if self.len() < self.capacity {
            return;
        }

        self.cleanup_expired();
        while self.len() >= self.capacity {
            if !self.evict_oldest() {
                break;
            }
        }
    }

    fn evict_oldest(&self) -> bool {
        let role = oldest(&self.role_maps);
        let legacy = oldest(&self.legacy_maps);

        let evicted = match (role, legacy) {
            (Some((key, role_at)), Some((_, legacy_at))) if role_at <= legacy_at => {
                self.role_maps.remove(&key).is_some()
            }
            (_, Some((key, _))) => self.legacy_maps.remove(&key).is_some(),
            (Some((key, _)), None) => self.role_maps.remove(&key).is_some(),
            (None, None) => false,
        };

        if evicted {
            self.increment_stat("evictions");
            trace!("Evicted oldest role map");
        }
        evicted
    }

    /// Clears all entries and statistics
    pub fn clear(&self) {
        self.role_maps.clear();
        self.legacy_maps.clear();
        self.stats.clear();
    }

    /// Removes expired entries
    pub fn cleanup_expired(&self) {
        let ttl = self.ttl;
        self.role_maps.retain(|_, entry| !entry.is_expired(ttl));
        self.legacy_maps.retain(|_, entry| !entry.is_expired(ttl));
    }

    /// Returns cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.get_stat("hits"),
            misses: self.get_stat("misses"),
            expirations: self.get_stat("expirations"),
            evictions: self.get_stat("evictions"),
            entries: self.len(),
        }
    }

    /// Number of cached maps
    pub fn len(&self) -> usize {
        self.role_maps.len() + self.legacy_maps.len()
    }

    /// Whether the cache holds no maps
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current cache TTL
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Maximum number of cached maps
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn increment_stat(&self, key: &'static str) {
        *self.stats.entry(key).or_insert(0) += 1;
    }

    fn get_stat(&self, key: &str) -> usize {
        self.stats.get(key).map(|v| *v).unwrap_or(0)
    }
}

fn oldest<T>(maps: &DashMap<CacheKey, CacheEntry<T>>) -> Option<(CacheKey, Instant)> {
    maps.iter()
        .min_by_key(|entry| entry.created_at)
        .map(|entry| (*entry.key(), entry.created_at))
}

impl Default for MapCache {
    fn default() -> Self {
        Self::new()
    }
}
