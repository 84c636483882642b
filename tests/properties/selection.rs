//! Property tests for the combine/split selection core.

use std::collections::BTreeSet;

use proptest::prelude::*;

use sancert::domain::ports::warning_sink::NoopSink;
use sancert::{combine, split, Membership, SelectionError, SiteId, Target};

fn site_strategy() -> impl Strategy<Value = (u32, Vec<String>, bool)> {
    (
        0u32..40,
        proptest::collection::vec("[a-z]{1,6}", 0..3),
        any::<bool>(),
    )
}

/// Distinct-id inventory plus the ids chosen for selection.
fn build_inventory(raw: Vec<(u32, Vec<String>, bool)>) -> (Vec<Target>, Vec<u32>) {
    let mut seen = BTreeSet::new();
    let mut candidates = Vec::new();
    let mut chosen = Vec::new();
    for (id, hostnames, is_chosen) in raw {
        if !seen.insert(id) {
            continue;
        }
        candidates.push(Target::site(SiteId(id), format!("site-{id}")).with_hostnames(hostnames));
        if is_chosen {
            chosen.push(id);
        }
    }
    (candidates, chosen)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `combine` never panics, whatever the selection string.
    #[test]
    fn property_combine_never_panics(
        raw in proptest::collection::vec(site_strategy(), 0..6),
        selection in "(?s).{0,64}",
    ) {
        let (candidates, _) = build_inventory(raw);
        let _ = combine(&candidates, &selection, &NoopSink);
    }

    /// PROPERTY: combine(C, S) then split against the same inventory
    /// restores exactly the selected subset, in inventory order, minus
    /// sites without hostnames.
    #[test]
    fn property_round_trip_restores_selected_subset(
        raw in proptest::collection::vec(site_strategy(), 1..8),
    ) {
        let (candidates, chosen) = build_inventory(raw);
        let selection = chosen
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        match combine(&candidates, &selection, &NoopSink) {
            Ok(combined) => {
                prop_assert!(!chosen.is_empty());
                let parts = split(&combined, &candidates);
                let expected: Vec<SiteId> = candidates
                    .iter()
                    .filter(|t| {
                        t.site_id().is_some_and(|id| chosen.contains(&id.0))
                            && !t.hostnames.is_empty()
                    })
                    .filter_map(Target::site_id)
                    .collect();
                let actual: Vec<SiteId> =
                    parts.iter().filter_map(Target::site_id).collect();
                prop_assert_eq!(actual, expected);
            }
            Err(SelectionError::NoneSelected) => prop_assert!(chosen.is_empty()),
        }
    }

    /// PROPERTY: repeating every token leaves the membership unchanged.
    #[test]
    fn property_duplicate_tokens_collapse(
        raw in proptest::collection::vec(site_strategy(), 1..8),
    ) {
        let (candidates, chosen) = build_inventory(raw);
        prop_assume!(!chosen.is_empty());

        let once = chosen
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let twice = chosen
            .iter()
            .chain(chosen.iter())
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let a = combine(&candidates, &once, &NoopSink).unwrap();
        let b = combine(&candidates, &twice, &NoopSink).unwrap();
        prop_assert_eq!(a.membership, b.membership);
        prop_assert_eq!(a.hostnames, b.hostnames);
    }

    /// PROPERTY: combined hostname lists never contain duplicates.
    #[test]
    fn property_combined_hostnames_are_unique(
        raw in proptest::collection::vec(site_strategy(), 1..8),
    ) {
        let (candidates, _) = build_inventory(raw);
        let combined = combine(&candidates, "s", &NoopSink).unwrap();
        let unique: BTreeSet<&String> = combined.hostnames.iter().collect();
        prop_assert_eq!(unique.len(), combined.hostnames.len());
    }

    /// PROPERTY: membership encode/decode is loss-free for combined sets.
    #[test]
    fn property_membership_encode_decode_round_trip(
        ids in proptest::collection::btree_set(0u32..200, 0..12),
    ) {
        let membership = Membership::combined(ids.into_iter().map(SiteId));
        let decoded = Membership::decode(&membership.encode()).unwrap();
        prop_assert_eq!(decoded, membership);
    }

    /// PROPERTY: split results always carry the combined settings.
    #[test]
    fn property_split_propagates_settings(
        raw in proptest::collection::vec(site_strategy(), 1..8),
        ssl_port in 1u16..,
    ) {
        let (candidates, chosen) = build_inventory(raw);
        prop_assume!(!chosen.is_empty());
        let selection = chosen
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let mut combined = combine(&candidates, &selection, &NoopSink).unwrap();
        combined.settings.ssl_port = ssl_port;
        for part in split(&combined, &candidates) {
            prop_assert_eq!(part.settings.ssl_port, ssl_port);
        }
    }
}
