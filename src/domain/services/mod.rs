//! Domain services
//!
//! Pure transforms over inventory snapshots; no I/O, no state.

pub mod combiner;
pub mod splitter;

pub use combiner::{combine, SelectionError};
pub use splitter::split;
