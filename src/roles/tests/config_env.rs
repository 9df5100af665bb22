//! Environment configuration test
//!
//! Kept in its own test binary so no other test observes the variables.

use ltigate_roles::config::{
    ENV_CACHE_CAPACITY, ENV_CACHE_ENABLED, ENV_CACHE_TTL, ENV_INBOUND_ROLE_MAP, ENV_LEGACY_ROLE_MAP, ENV_OUTBOUND_ROLE_MAP,
};
use ltigate_roles::{RoleMapConfig, RoleMapper};
use std::collections::HashSet;
use std::time::Duration;

#[test]
fn test_config_from_env() {
    std::env::set_var(ENV_OUTBOUND_ROLE_MAP, "Student:Learner,urn:site:Student;");
    std::env::set_var(ENV_INBOUND_ROLE_MAP, "urn:site:Student:Student;");
    std::env::set_var(ENV_LEGACY_ROLE_MAP, "Pupil=urn:site:Student");
    std::env::set_var(ENV_CACHE_ENABLED, "true");
    std::env::set_var(ENV_CACHE_TTL, "120");
    std::env::set_var(ENV_CACHE_CAPACITY, "64");

    let config = RoleMapConfig::from_env().unwrap();
    assert!(config.cache.enabled);
    assert_eq!(config.cache.ttl(), Duration::from_secs(120));
    assert_eq!(config.cache.capacity, 64);
    assert_eq!(config.legacy_role_map.as_deref(), Some("Pupil=urn:site:Student"));

    let mapper = RoleMapper::new(config);
    let valid: HashSet<&str> = ["Student"].into_iter().collect();
    assert_eq!(mapper.map_outbound("Student", None).as_deref(), Some("Learner,urn:site:Student"));
    assert_eq!(mapper.map_inbound("Pupil", &valid, None).as_deref(), Some("Student"));
    assert!(mapper.cache_stats().is_some());

    std::env::set_var(ENV_CACHE_TTL, "soon");
    std::env::set_var(ENV_CACHE_CAPACITY, "lots");
    std::env::remove_var(ENV_CACHE_ENABLED);
    let config = RoleMapConfig::from_env().unwrap();
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.ttl(), Duration::from_secs(60));
    assert_eq!(config.cache.capacity, 1_000);

    for name in [
        ENV_OUTBOUND_ROLE_MAP,
        ENV_INBOUND_ROLE_MAP,
        ENV_LEGACY_ROLE_MAP,
        ENV_CACHE_TTL,
        ENV_CACHE_CAPACITY,
    ] {
        std::env::remove_var(name);
    }
    assert_eq!(RoleMapConfig::from_env().unwrap(), RoleMapConfig::default());
}
