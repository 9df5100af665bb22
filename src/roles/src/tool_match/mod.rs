//! Best tool match by launch URL prefix
//!
//! Picks the most specific registered tool for a launch URL. Tools scoped to
//! the current context beat global tools; within the same scope the longest
//! launch prefix wins.
//!
//! # Examples
//!
//! ```
//! use ltigate_roles::tool_match::{find_best_match, ToolRecord};
//!
//! let tools = vec![
//!     ToolRecord::global("https://x.com/"),
//!     ToolRecord::global("https://x.com/mod/"),
//! ];
//!
//! let best = find_best_match("https://x.com/mod/gift/", &tools, "site-1").unwrap();
//! assert_eq!(best.launch, "https://x.com/mod/");
//! ```

mod resolver;
mod types;


pub use resolver::find_best_match;
pub use types::{MatchRank, ToolRecord};
