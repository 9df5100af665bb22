//! # LTI Gate Crypto
//!
//! Small symmetric helpers used around tool launches:
//!
//! - **Secret encryption** for tool secrets at rest, in the
//!   `iv:payload:tag:AES/CBC/PKCS5Padding` format
//! - **Launch codes** that bind a content item id to its placement secret
//!
//! ## Example
//!
//! ```rust
//! use ltigate_crypto::{decrypt_secret, encrypt_secret, is_encrypted};
//!
//! # fn main() -> ltigate_crypto::Result<()> {
//! let stored = encrypt_secret("tool-secret", "server-key")?;
//! assert!(is_encrypted(&stored));
//! assert_eq!(encrypt_secret(&stored, "server-key")?, stored);
//! assert_eq!(decrypt_secret(&stored, "server-key").as_deref(), Some("tool-secret"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod launch_code;
pub mod secret;

pub use error::{CryptoError, Result};
pub use launch_code::{check_launch_code, launch_code, launch_code_key};
pub use secret::{decrypt_secret, encrypt_secret, is_encrypted, try_decrypt_secret, CIPHER_LABEL};
