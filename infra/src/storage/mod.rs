//! Storage module - Image file persistence
//!
//! Files live under `<root>/uploads/<kind dir>/` and are addressed by their
//! path relative to `<root>`, which is also the public URL path.

pub mod local;

#[cfg(test)]
mod tests;

pub use local::LocalImageStore;
