//! Common utility functions

pub mod slug;

// Re-export commonly used utilities
pub use slug::*;
