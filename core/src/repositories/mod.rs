pub mod resource;

pub use resource::{InMemoryResourceRepository, ResourceRepository};
