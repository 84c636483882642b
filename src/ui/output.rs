//! Plain-text rendering for listings and targets.

use unicode_width::UnicodeWidthStr;

use crate::domain::entities::Target;
use crate::domain::ports::input_service::Choice;

/// Render listing rows with right-aligned selection keys.
///
/// Rows without a key (plain listings, e.g. hostnames under review) are
/// indented to the same column.
pub fn format_rows(choices: &[Choice]) -> String {
    let key_width = choices
        .iter()
        .map(|choice| choice.key.as_str().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for choice in choices {
        let pad = " ".repeat(key_width - choice.key.as_str().width());
        if choice.key.is_empty() {
            out.push_str(&format!(" {pad}  {}\n", choice.label));
        } else {
            out.push_str(&format!(" {pad}{}: {}\n", choice.key, choice.label));
        }
    }
    out
}

/// One-paragraph human summary of a target.
pub fn render_target(target: &Target) -> String {
    let mut out = String::new();
    if target.membership.is_combined() {
        out.push_str(&format!("Combined target for sites {}\n", target.display_host));
    } else {
        out.push_str(&format!("Target for site {}\n", target.display_host));
    }
    if let Some(common_name) = &target.common_name {
        out.push_str(&format!("  common name: {common_name}\n"));
    }
    let effective = target.effective_hostnames();
    out.push_str(&format!("  {} hostnames:\n", effective.len()));
    for host in effective {
        out.push_str(&format!("    - {host}\n"));
    }
    out
}
