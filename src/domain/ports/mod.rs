//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides the concrete implementations.

pub mod input_service;
pub mod site_inventory;
pub mod warning_sink;

pub use input_service::{Choice, InputService};
pub use site_inventory::SiteInventory;
pub use warning_sink::{NoopSink, Warning, WarningSink};
