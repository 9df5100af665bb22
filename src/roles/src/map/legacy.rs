use tracing::debug;

use super::{entries, LegacyMap};

/// Parses a `token=urn;token2=urn2` property string
///
/// `None`, empty and blank input yield an empty map. Entries without `=` or
/// with an empty side are skipped.
pub fn parse_legacy_map<'a>(spec: impl Into<Option<&'a str>>) -> LegacyMap {
    let mut map = LegacyMap::new();
    let Some(spec) = spec.into() else {
        return map;
    };

    for entry in entries(spec, ';') {
        match entry.split_once('=') {
            Some((token, urn)) if !token.trim().is_empty() && !urn.trim().is_empty() => {
                map.insert(token.trim(), urn.trim());
            }
            _ => debug!(entry, "Skipping malformed legacy role map entry"),
        }
    }

    map
}
