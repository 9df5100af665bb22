//! Best match search over tool records

use tracing::{debug, trace};

use super::types::{MatchRank, ToolRecord};

/// Finds the most specific tool for `target_url`
///
/// Records scoped to `current_scope` beat global records regardless of prefix
/// length; within the same locality the longest launch prefix wins. On a full
/// tie the last record in `tools` wins, so callers should pass a stable order.
pub fn find_best_match<'t, D>(
    target_url: &str,
    tools: &'t [ToolRecord<D>],
    current_scope: &str,
) -> Option<&'t ToolRecord<D>> {
    let mut best: Option<(MatchRank, &'t ToolRecord<D>)> = None;

    for tool in tools {
        let Some(rank) = tool.rank(target_url, current_scope) else {
            continue;
        };
        trace!(launch = %tool.launch, scope = %tool.scope, ?rank, "Candidate tool");

        match best {
            Some((best_rank, _)) if rank < best_rank => {}
            _ => best = Some((rank, tool)),
        }
    }

    match best {
        Some((rank, tool)) => {
            debug!(target_url, launch = %tool.launch, local = rank.local, "Best tool match");
            Some(tool)
        }
        None => {
            debug!(target_url, current_scope, "No tool matches launch URL");
            None
        }
    }
}
