use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, trace};

use super::{Layer, LegacyChain};
use crate::map::{InboundMap, LegacyMap};

/// Resolves incoming LTI roles to the single best local role for a context
///
/// Tokens are processed in the order sent. Each token is up-converted through
/// the legacy maps, then looked up in tenant > tenant property > default; the
/// first layer that has the URN supplies the candidates. The first candidate
/// the context supports wins. Specific-over-general ordering (a teaching
/// assistant before an instructor) lives in the candidate lists, not here.
#[derive(Debug, Clone)]
pub struct InboundResolver<'a> {
    layers: [(Layer, &'a InboundMap); 3],
    legacy: LegacyChain<'a>,
}

impl<'a> InboundResolver<'a> {
    /// Creates a resolver over the given map layers
    pub fn new(
        tenant: &'a InboundMap,
        tenant_property: &'a InboundMap,
        default: &'a InboundMap,
        tool_legacy: &'a LegacyMap,
        default_legacy: &'a LegacyMap,
    ) -> Self {
        Self {
            layers: [
                (Layer::Tenant, tenant),
                (Layer::TenantProperty, tenant_property),
                (Layer::Default, default),
            ],
            legacy: LegacyChain::new(tool_legacy, default_legacy),
        }
    }

    /// Layers in the order they are consulted for each token
    pub fn precedence(&self) -> Vec<Layer> {
        self.layers.iter().map(|(layer, _)| *layer).collect()
    }

    /// Candidates for one canonical URN from the first layer that has any
    pub fn candidates(&self, urn: &str) -> Option<(Layer, &'a [String])> {
        self.layers.iter().find_map(|&(layer, map)| {
            map.get(urn)
                .filter(|candidates| !candidates.is_empty())
                .map(|candidates| (layer, candidates))
        })
    }

    /// Best local role for a comma-separated list of incoming roles
    pub fn resolve<S>(&self, incoming_roles: &str, valid_roles: &HashSet<S>) -> Option<String>
    where
        S: Borrow<str> + Hash + Eq,
    {
        let tokens = incoming_roles
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty());

        for token in tokens {
            let urn = self.legacy.upgrade_or_keep(token);
            let Some((layer, candidates)) = self.candidates(&urn) else {
                trace!(token, urn = %urn, "No inbound mapping for token");
                continue;
            };

            if let Some(role) = candidates
                .iter()
                .find(|candidate| valid_roles.contains(candidate.as_str()))
            {
                debug!(token, urn = %urn, %layer, role = %role, "Inbound role mapped");
                return Some(role.clone());
            }

            trace!(token, urn = %urn, %layer, "No candidate valid in this context");
        }

        debug!(incoming_roles, "No inbound role matched");
        None
    }
}

/// Resolves incoming roles through tenant, tenant property and default maps
pub fn resolve_inbound<S>(
    incoming_roles: &str,
    valid_roles: &HashSet<S>,
    tenant: &InboundMap,
    tenant_property: &InboundMap,
    default: &InboundMap,
    tool_legacy: &LegacyMap,
    default_legacy: &LegacyMap,
) -> Option<String>
where
    S: Borrow<str> + Hash + Eq,
{
    InboundResolver::new(tenant, tenant_property, default, tool_legacy, default_legacy)
        .resolve(incoming_roles, valid_roles)
}
