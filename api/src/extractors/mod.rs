pub mod upload;

pub use upload::ResourceForm;
