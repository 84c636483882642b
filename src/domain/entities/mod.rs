//! Domain entities

pub mod target;

pub use target::Target;
