//! # LTI Gate Launch Helpers
//!
//! Supporting operations used while building and receiving tool launches.
//!
//! ## Features
//!
//! - **Content records** with launch code generation and checking
//! - **Custom parameter adjustment** from `a=1;b=2` to one pair per line
//! - **Numeric coercion** of loosely typed JSON values
//! - **Grade rounding** to two decimals of the points possible
//! - **Query stripping** without any URL normalization
//! - **Resource link id history** carried in content settings
//!
//! ## Example
//!
//! ```rust
//! use ltigate_launch::{adjust_custom, strip_off_query, ContentRecord};
//!
//! assert_eq!(adjust_custom("x=1;y=2"), "x=1\ny=2");
//! assert_eq!(strip_off_query("https://www.py4e.com/zap/bob.php?x=1234"), "https://www.py4e.com/zap/bob.php");
//!
//! let content = ContentRecord::new("42").with_placement_secret("xyzzy");
//! let code = content.launch_code().unwrap();
//! assert!(content.check_launch_code(&code));
//! ```

pub mod coerce;
pub mod content;
pub mod custom;
pub mod error;
pub mod grade;
pub mod history;
pub mod url;

pub use coerce::{double_or_none, long_or_none};
pub use content::ContentRecord;
pub use custom::adjust_custom;
pub use error::{LaunchError, Result};
pub use grade::rounded_grade;
pub use history::{track_resource_link_id, track_resource_link_id_into, ID_HISTORY};
pub use url::strip_off_query;
