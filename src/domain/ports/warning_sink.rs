//! Warning Sink Port
//!
//! Target selection keeps going on bad input: malformed or unknown tokens
//! are reported through this port and skipped. The variants render the exact
//! diagnostic text callers and tests rely on.

use crate::domain::value_objects::SiteId;

/// Non-fatal diagnostic emitted during target selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A selection token that does not parse as a site id.
    InvalidSiteId { token: String },
    /// A well-formed id with no matching site in the inventory.
    SiteIdNotFound { token: String },
    /// An explicit selection that matched nothing at all.
    NoSitesSelected,
    /// A requested common name outside the target's effective hostnames.
    CommonNameNotCovered { common_name: String },
    /// A combined-target member missing from a fresh inventory snapshot.
    SiteRemoved { site_id: SiteId },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::InvalidSiteId { token } => {
                write!(f, "Invalid SiteId '{token}', should be a number")
            }
            Warning::SiteIdNotFound { token } => write!(f, "SiteId '{token}' not found"),
            Warning::NoSitesSelected => write!(f, "No valid sites selected"),
            Warning::CommonNameNotCovered { common_name } => {
                write!(
                    f,
                    "Common name '{common_name}' not covered by any included binding"
                )
            }
            Warning::SiteRemoved { site_id } => {
                write!(f, "Site {site_id} no longer exists, removed from renewal")
            }
        }
    }
}

/// Trait for receiving selection warnings.
///
/// Implementations can be:
/// - `ConsoleSink`: stderr output for interactive runs
/// - `NoopSink`: silent operation
pub trait WarningSink: Send + Sync {
    /// Handle a warning. Fire-and-forget; must not block.
    fn warn(&self, warning: &Warning);
}

/// No-op sink for silent operation
pub struct NoopSink;

impl WarningSink for NoopSink {
    fn warn(&self, _warning: &Warning) {}
}

/// Test sink that records every warning it receives.
#[cfg(test)]
pub struct RecordingSink {
    warnings: std::sync::Mutex<Vec<Warning>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            warnings: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Rendered messages, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.warnings
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
impl WarningSink for RecordingSink {
    fn warn(&self, warning: &Warning) {
        self.warnings.lock().unwrap().push(warning.clone());
    }
}
