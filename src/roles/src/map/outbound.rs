use tracing::debug;

use super::{aliases, entries, OutboundMap};

/// Parses a `localRole:alias1,alias2;localRole2:alias3` property string
///
/// Older configurations used `,` between whole entries
/// (`role1:lti1,role2:lti2`); a string without any `;` is read that way.
/// The key is everything before the first `:` so aliases may be URNs.
/// A repeated key replaces the earlier entry.
pub fn parse_outbound_map<'a>(spec: impl Into<Option<&'a str>>) -> OutboundMap {
    let mut map = OutboundMap::new();
    let Some(spec) = spec.into() else {
        return map;
    };

    let delimiter = if spec.contains(';') { ';' } else { ',' };
    for entry in entries(spec, delimiter) {
        let Some((role, list)) = entry.split_once(':') else {
            debug!(entry, "Skipping outbound role map entry without ':'");
            continue;
        };

        let role = role.trim();
        let list = aliases(list.trim());
        if role.is_empty() || list.is_empty() {
            debug!(entry, "Skipping empty outbound role map entry");
            continue;
        }

        map.insert(role, list);
    }

    map
}
