//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: file-backed site
//! inventory, console prompting, and stderr diagnostics.

pub mod diagnostics;
pub mod input;
pub mod inventory;
