//! Common utility functions

pub mod data;
pub mod template;

// Re-export commonly used utilities
pub use data::{is_empty, is_truthy, parse_int, to_data_string, value_to_int};
pub use template::{params, render, Params};
