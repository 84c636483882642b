//! Combining a site selection into one certificate target.
//!
//! Resolves a selection expression against an inventory snapshot and merges
//! the selected sites' hostnames into a single combined target. Bad tokens
//! are warned about and skipped; only a selection that matches nothing at
//! all fails the operation.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::domain::entities::Target;
use crate::domain::ports::warning_sink::{Warning, WarningSink};
use crate::domain::value_objects::{Membership, RequestSettings, SiteId};

/// Terminal failure of a combine operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Every token of an explicit selection was skipped.
    ///
    /// Callers must abort the selection flow for this target; retrying with
    /// the same input cannot succeed.
    #[error("No valid sites selected")]
    NoneSelected,
}

/// Build one combined target from a selection over `candidates`.
///
/// The selection is either `"s"`/`"S"` (all candidates) or a comma-separated
/// list of site ids. The whole expression is trimmed and a single optional
/// leading/trailing comma stripped; tokens are trimmed and duplicates
/// collapse. Tokens that do not parse, or that match no candidate, emit a
/// warning and are skipped.
///
/// The combined target unions the selected hostnames (deduplicated,
/// first-seen order) and carries default request settings; request-scope
/// settings are attached by the caller afterwards.
pub fn combine(
    candidates: &[Target],
    selection: &str,
    warnings: &dyn WarningSink,
) -> Result<Target, SelectionError> {
    let trimmed = selection.trim();
    let selected: Vec<&Target> = if trimmed.eq_ignore_ascii_case("s") {
        candidates.iter().collect()
    } else {
        resolve_id_list(candidates, trimmed, warnings)?
    };
    Ok(build_combined(&selected))
}

fn resolve_id_list<'a>(
    candidates: &'a [Target],
    expression: &str,
    warnings: &dyn WarningSink,
) -> Result<Vec<&'a Target>, SelectionError> {
    let expression = expression.strip_prefix(',').unwrap_or(expression);
    let expression = expression.strip_suffix(',').unwrap_or(expression);

    let mut seen_tokens: Vec<&str> = Vec::new();
    let mut picked_ids: BTreeSet<SiteId> = BTreeSet::new();
    let mut picked: Vec<&Target> = Vec::new();

    for token in expression.split(',').map(str::trim) {
        if seen_tokens.contains(&token) {
            continue;
        }
        seen_tokens.push(token);

        let Ok(id) = token.parse::<SiteId>() else {
            warnings.warn(&Warning::InvalidSiteId {
                token: token.to_string(),
            });
            continue;
        };
        if picked_ids.contains(&id) {
            continue;
        }
        match candidates.iter().find(|t| t.site_id() == Some(id)) {
            Some(site) => {
                picked_ids.insert(id);
                picked.push(site);
            }
            None => warnings.warn(&Warning::SiteIdNotFound {
                token: token.to_string(),
            }),
        }
    }

    if picked.is_empty() {
        warnings.warn(&Warning::NoSitesSelected);
        return Err(SelectionError::NoneSelected);
    }
    Ok(picked)
}

fn build_combined(selected: &[&Target]) -> Target {
    let ids: Vec<SiteId> = selected.iter().filter_map(|t| t.site_id()).collect();
    let mut combined = Target {
        membership: Membership::combined(ids.iter().copied()),
        display_host: ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
        hostnames: Vec::new(),
        web_root: std::path::PathBuf::new(),
        hidden: false,
        server_bound: true,
        common_name: None,
        settings: RequestSettings::default(),
    };
    for target in selected {
        for host in &target.hostnames {
            combined.push_hostname(host);
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::warning_sink::{NoopSink, RecordingSink};

    fn inventory() -> Vec<Target> {
        vec![
            Target::site(SiteId(2), "example.com")
                .with_hostnames(["example.com", "www.example.com"]),
            Target::site(SiteId(5), "shop.example.com")
                .with_hostnames(["shop.example.com", "www.example.com"]),
            Target::site(SiteId(9), "blog.example.com").with_hostnames(["blog.example.com"]),
        ]
    }

    #[test]
    fn lowercase_s_selects_every_candidate() {
        let combined = combine(&inventory(), "s", &NoopSink).unwrap();
        assert_eq!(
            combined.membership,
            Membership::combined([SiteId(2), SiteId(5), SiteId(9)])
        );
        assert_eq!(combined.display_host, "2,5,9");
    }

    #[test]
    fn uppercase_s_with_whitespace_selects_every_candidate() {
        let combined = combine(&inventory(), "  S ", &NoopSink).unwrap();
        assert_eq!(
            combined.membership,
            Membership::combined([SiteId(2), SiteId(5), SiteId(9)])
        );
    }

    #[test]
    fn select_all_unions_and_deduplicates_hostnames() {
        let combined = combine(&inventory(), "s", &NoopSink).unwrap();
        assert_eq!(
            combined.hostnames,
            vec![
                "example.com",
                "www.example.com",
                "shop.example.com",
                "blog.example.com"
            ]
        );
    }

    #[test]
    fn duplicate_ids_collapse() {
        let sink = RecordingSink::new();
        let combined = combine(&inventory(), "2,2,5", &sink).unwrap();
        assert_eq!(
            combined.membership,
            Membership::combined([SiteId(2), SiteId(5)])
        );
        assert_eq!(combined.display_host, "2,5");
        assert_eq!(
            combined.hostnames,
            vec!["example.com", "www.example.com", "shop.example.com"]
        );
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn duplicate_ids_with_spacing_collapse() {
        let combined = combine(&inventory(), "5, 5,2", &NoopSink).unwrap();
        assert_eq!(
            combined.membership,
            Membership::combined([SiteId(2), SiteId(5)])
        );
        assert_eq!(combined.display_host, "5,2");
    }

    #[test]
    fn unknown_id_alone_fails_with_warnings() {
        let sink = RecordingSink::new();
        let err = combine(&inventory(), "7", &sink).unwrap_err();
        assert_eq!(err, SelectionError::NoneSelected);
        assert_eq!(
            sink.messages(),
            vec!["SiteId '7' not found", "No valid sites selected"]
        );
    }

    #[test]
    fn invalid_token_is_skipped_but_selection_succeeds() {
        let sink = RecordingSink::new();
        let combined = combine(&inventory(), "x,9", &sink).unwrap();
        assert_eq!(combined.membership, Membership::combined([SiteId(9)]));
        assert_eq!(
            sink.messages(),
            vec!["Invalid SiteId 'x', should be a number"]
        );
    }

    #[test]
    fn leading_and_trailing_comma_are_stripped() {
        let combined = combine(&inventory(), ",2,5,", &NoopSink).unwrap();
        assert_eq!(
            combined.membership,
            Membership::combined([SiteId(2), SiteId(5)])
        );
    }

    #[test]
    fn empty_selection_fails() {
        let sink = RecordingSink::new();
        let err = combine(&inventory(), "", &sink).unwrap_err();
        assert_eq!(err, SelectionError::NoneSelected);
        assert_eq!(
            sink.messages(),
            vec![
                "Invalid SiteId '', should be a number",
                "No valid sites selected"
            ]
        );
    }

    #[test]
    fn select_all_over_empty_inventory_yields_empty_combined() {
        let combined = combine(&[], "s", &NoopSink).unwrap();
        assert_eq!(combined.membership, Membership::combined([]));
        assert!(combined.hostnames.is_empty());
        assert_eq!(combined.display_host, "");
    }

    #[test]
    fn combined_target_carries_no_request_settings() {
        let combined = combine(&inventory(), "2,5", &NoopSink).unwrap();
        assert_eq!(combined.settings, RequestSettings::default());
        assert!(combined.server_bound);
        assert!(combined.common_name.is_none());
        assert!(!combined.hidden);
    }

    #[test]
    fn selection_order_drives_display_and_hostname_order() {
        let combined = combine(&inventory(), "9,2", &NoopSink).unwrap();
        assert_eq!(combined.display_host, "9,2");
        assert_eq!(
            combined.hostnames,
            vec!["blog.example.com", "example.com", "www.example.com"]
        );
    }
}
