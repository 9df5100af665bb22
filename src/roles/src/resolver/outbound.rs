use tracing::{debug, trace};

use super::{Layer, LegacyChain};
use crate::map::{LegacyMap, OutboundMap};

/// Resolves a local role to the LTI role string sent at launch
///
/// Precedence: tool > tenant property > default > legacy up-conversion of the
/// role name itself. Aliases from the tool layer are up-converted one by one,
/// since tool configurations are often written with LTI 1.1 tokens.
#[derive(Debug, Clone)]
pub struct OutboundResolver<'a> {
    layers: [(Layer, &'a OutboundMap); 3],
    legacy: LegacyChain<'a>,
}

impl<'a> OutboundResolver<'a> {
    /// Creates a resolver over the given map layers
    pub fn new(
        tool: &'a OutboundMap,
        tenant: &'a OutboundMap,
        default: &'a OutboundMap,
        tool_legacy: &'a LegacyMap,
        default_legacy: &'a LegacyMap,
    ) -> Self {
        Self {
            layers: [
                (Layer::Tool, tool),
                (Layer::TenantProperty, tenant),
                (Layer::Default, default),
            ],
            legacy: LegacyChain::new(tool_legacy, default_legacy),
        }
    }

    /// Layers in the order they are consulted
    pub fn precedence(&self) -> Vec<Layer> {
        self.layers
            .iter()
            .map(|(layer, _)| *layer)
            .chain(std::iter::once(Layer::Legacy))
            .collect()
    }

    /// Comma-joined LTI roles for `local_role`, or `None` when unmapped
    pub fn resolve(&self, local_role: &str) -> Option<String> {
        self.resolve_with_layer(local_role).map(|(_, roles)| roles)
    }

    /// Like [`resolve`](Self::resolve) but also reports the layer that matched
    pub fn resolve_with_layer(&self, local_role: &str) -> Option<(Layer, String)> {
        for (layer, map) in &self.layers {
            let Some(aliases) = map.get(local_role) else {
                trace!(local_role, %layer, "No outbound mapping in layer");
                continue;
            };

            let roles = match layer {
                Layer::Tool => aliases
                    .iter()
                    .map(|alias| self.legacy.upgrade_or_keep(alias))
                    .collect::<Vec<_>>()
                    .join(","),
                _ => aliases.join(","),
            };

            debug!(local_role, %layer, roles = %roles, "Outbound role mapped");
            return Some((*layer, roles));
        }

        let upgraded = self.legacy.upgrade(local_role)?;
        debug!(local_role, roles = upgraded, "Outbound role up-converted from legacy token");
        Some((Layer::Legacy, upgraded.to_string()))
    }
}

/// Resolves a local role through tool, tenant and default maps, then legacy maps
pub fn resolve_outbound(
    local_role: &str,
    tool: &OutboundMap,
    tenant: &OutboundMap,
    default: &OutboundMap,
    tool_legacy: &LegacyMap,
    default_legacy: &LegacyMap,
) -> Option<String> {
    OutboundResolver::new(tool, tenant, default, tool_legacy, default_legacy).resolve(local_role)
}
