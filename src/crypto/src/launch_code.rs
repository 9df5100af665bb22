//! Launch codes
//!
//! A launch code proves a launch URL was handed out for a particular content
//! item. It is an HMAC-SHA256 of `launch_code:<id>` keyed by the item's
//! placement secret, so changing either the id or the secret invalidates it.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::error::Result;

type HmacSha256 = Hmac<Sha256>;

const LAUNCH_CODE_PREFIX: &str = "launch_code:";

/// Session key a launch code is stored under
pub fn launch_code_key(id: &str) -> String {
    format!("{LAUNCH_CODE_PREFIX}{id}")
}

/// Hex launch code for a content item
pub fn launch_code(id: &str, placement_secret: &str) -> Result<String> {
    let mac = code_mac(id, placement_secret)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks a launch code in constant time
///
/// Any failure, including a code that is not hex, is a mismatch.
pub fn check_launch_code(id: &str, placement_secret: &str, code: &str) -> bool {
    let Ok(expected) = hex::decode(code) else {
        debug!(id, "Launch code is not hex");
        return false;
    };

    let verified = code_mac(id, placement_secret)
        .map(|mac| mac.verify_slice(&expected).is_ok())
        .unwrap_or(false);

    if !verified {
        debug!(id, "Launch code mismatch");
    }
    verified
}

fn code_mac(id: &str, placement_secret: &str) -> Result<HmacSha256> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(placement_secret.as_bytes())?;
    mac.update(launch_code_key(id).as_bytes());
    Ok(mac)
}
