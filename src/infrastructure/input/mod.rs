//! Input service implementations

pub mod console;

pub use console::ConsoleInput;
