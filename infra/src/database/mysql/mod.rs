//! MySQL repository implementations

pub mod resource_repository_impl;

pub use resource_repository_impl::MySqlResourceRepository;
