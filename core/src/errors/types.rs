//! Upload rejection reasons

use thiserror::Error;

/// Reasons an image part is refused before anything touches the disk
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("only jpg, png, jpeg images are allowed")]
    UnsupportedType { content_type: String },

    #[error("File too large: the limit is {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Only one image may be uploaded per request")]
    TooManyFiles,

    #[error("Malformed upload: {message}")]
    Malformed { message: String },
}
