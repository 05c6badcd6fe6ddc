//! Resource lifecycle module
//!
//! One `ResourceService` is instantiated per resource kind. It owns the
//! ordering between record mutations and image file mutations, and the
//! best-effort cleanup that keeps records from pointing at missing files.

mod service;


pub use service::{ResourceInput, ResourceService};
