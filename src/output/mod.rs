//! Terminal output formatting
//!
//! Display utilities for the text driver and shared drawings for the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_final_message, print_guess_feedback};
