//! Shortest-queue routing with a uniform random tie-break.

use gs_core::{GsError, SimRng};
use tracing::trace;

/// Anything with a pending-work queue the dispatch policy can inspect.
pub trait QueueDepth {
    fn queue_depth(&self) -> usize;
}

/// Return an eligible server with the shortest queue.
///
/// Servers failing `eligible` are skipped.  Among the minimum-depth
/// candidates one is chosen uniformly at random with `rng`.
///
/// Depths are read without any lock against concurrent pushes and pops, so
/// the choice may be made on momentarily stale depths.  That only affects
/// balance: the returned server always satisfies `eligible`.
///
/// Returns [`GsError::NoEligibleServer`] when no server is eligible.
pub fn select_least_loaded<'a, S, F>(
    servers:  &'a [S],
    eligible: F,
    rng:      &mut SimRng,
) -> Result<&'a S, GsError>
where
    S: QueueDepth,
    F: Fn(&S) -> bool,
{
    let mut shortest: Vec<&'a S> = Vec::new();
    let mut min_depth = usize::MAX;

    for server in servers.iter().filter(|s| eligible(s)) {
        let depth = server.queue_depth();
        if depth < min_depth {
            min_depth = depth;
            shortest.clear();
        }
        if depth == min_depth {
            shortest.push(server);
        }
    }

    match shortest.len() {
        0 => Err(GsError::NoEligibleServer(format!(
            "none of {} servers accepts this car",
            servers.len()
        ))),
        1 => Ok(shortest[0]),
        n => {
            trace!(candidates = n, depth = min_depth, "breaking dispatch tie");
            Ok(shortest[rng.pick_index(n)])
        }
    }
}
