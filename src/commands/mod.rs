//! Command implementations

pub mod simple;

pub use simple::{SessionEnd, run_simple};
