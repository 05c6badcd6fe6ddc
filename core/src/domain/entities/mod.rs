//! Domain entities representing core business objects.

pub mod resource;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use resource::{Resource, ResourceChanges, ResourceKind};
pub use token::Claims;
