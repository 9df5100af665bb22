use tracing::debug;

use super::{aliases, entries, InboundMap};

/// Parses a `urn:candidate1,candidate2;urn2:candidate3` property string
///
/// Keys are URNs and contain `:` themselves, so the key ends at the last `:`.
/// Entries naming a URN more than once append their candidates in order.
pub fn parse_inbound_map<'a>(spec: impl Into<Option<&'a str>>) -> InboundMap {
    let mut map = InboundMap::new();
    let Some(spec) = spec.into() else {
        return map;
    };

    for entry in entries(spec, ';') {
        let Some((urn, list)) = entry.rsplit_once(':') else {
            debug!(entry, "Skipping inbound role map entry without ':'");
            continue;
        };

        let urn = urn.trim();
        let list = aliases(list.trim());
        if urn.is_empty() || list.is_empty() {
            debug!(entry, "Skipping empty inbound role map entry");
            continue;
        }

        map.append(urn, list);
    }

    map
}
