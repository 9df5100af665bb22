//! # LTI Gate Role Mapping
//!
//! Translates between a learning platform's local role vocabulary and the
//! standardized LTI role URNs, in both directions, and picks the most specific
//! registered external tool for a launch URL.
//!
//! ## Features
//!
//! - **Map loaders** for the flat `;`/`:`/`,` property strings (legacy, outbound, inbound)
//! - **Outbound resolution** with strict tool > tenant > default precedence
//! - **Inbound resolution** with per-token, first-valid-candidate matching
//! - **Legacy up-conversion** of LTI 1.1 role tokens to LIS v2 URNs
//! - **Best tool match** by longest launch prefix, local scope before global
//! - **Optional parse cache** keyed by the exact source string
//!
//! ## Example
//!
//! ```rust
//! use ltigate_roles::{RoleMapConfig, RoleMapper};
//! use std::collections::HashSet;
//!
//! let mapper = RoleMapper::new(RoleMapConfig::default());
//!
//! let outbound = mapper.map_outbound("maintain", None).unwrap();
//! assert_eq!(outbound, "Instructor,http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor");
//!
//! let project_roles: HashSet<&str> = ["access", "maintain"].into_iter().collect();
//! let local = mapper.map_inbound(&outbound, &project_roles, None);
//! assert_eq!(local.as_deref(), Some("maintain"));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod map;
pub mod mapper;
pub mod resolver;
pub mod tool_match;
pub mod vocab;

pub use cache::{CacheStats, MapCache};
pub use config::{CacheSettings, RoleMapConfig};
pub use error::{Result, RoleMapError};
pub use map::{parse_inbound_map, parse_legacy_map, parse_outbound_map, InboundMap, LegacyMap, OutboundMap, RoleMap};
pub use mapper::RoleMapper;
pub use resolver::{resolve_inbound, resolve_outbound, InboundResolver, Layer, LegacyChain, OutboundResolver};
pub use tool_match::{find_best_match, MatchRank, ToolRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
