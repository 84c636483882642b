//! Splitting a combined target back into per-site targets.
//!
//! The inverse of the combiner, run against a fresh inventory snapshot.
//! Member sites that no longer exist are dropped silently: drift between a
//! persisted target and the current server is steady-state, not an error.

use crate::domain::entities::Target;

/// Reconstruct the per-site targets a combined target was built from.
///
/// Retains the candidates whose site id is a member of `combined`, keeping
/// the candidates' original relative order. Each retained target receives a
/// copy of the combined target's request settings, then targets left without
/// any effective hostname are dropped.
///
/// An empty result is valid: nothing to do for this target on this run.
pub fn split(combined: &Target, candidates: &[Target]) -> Vec<Target> {
    candidates
        .iter()
        .filter(|t| {
            t.site_id()
                .is_some_and(|id| combined.membership.contains(id))
        })
        .cloned()
        .map(|mut t| {
            t.settings = combined.settings.clone();
            t
        })
        .filter(|t| !t.effective_hostnames().is_empty())
        .collect()
}
