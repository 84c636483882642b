//! Input Service Port
//!
//! Interactive prompting used by the acquire flow: paged listings and
//! free-form answers. Implementations decide how (or whether) to page.

use crate::error::CertResult;

/// One row in a paged listing: a short selection key plus its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Selection key the user types (e.g. a site id).
    pub key: String,
    /// Human-readable description.
    pub label: String,
}

impl Choice {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Trait for interactive operator input.
///
/// Implementations can be:
/// - `ConsoleInput`: terminal prompts, paged by screen height
/// - scripted fakes in tests
pub trait InputService: Send + Sync {
    /// Display a listing, paging as appropriate for the medium.
    fn show_paged_list(&self, choices: &[Choice]) -> CertResult<()>;

    /// Ask for a free-form line of input. Empty answers are allowed.
    fn request_string(&self, prompt: &str) -> CertResult<String>;

    /// Ask the user to pick one of `options`; `None` when declined or when
    /// there is nothing to choose from.
    fn choose_from(&self, prompt: &str, options: &[String]) -> CertResult<Option<usize>>;
}
