//! Upload acceptance policy

use nb_shared::UploadConfig;

use crate::errors::UploadError;

/// MIME and size rules applied to image parts
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    allowed_types: Vec<String>,
    max_file_size: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}

impl UploadPolicy {
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            allowed_types: config
                .allowed_types
                .iter()
                .map(|t| t.to_ascii_lowercase())
                .collect(),
            max_file_size: config.max_file_size,
        }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Check a declared content type before any byte is read
    ///
    /// Parameters such as `; charset=...` are ignored.
    pub fn check_content_type(&self, content_type: Option<&str>) -> Result<(), UploadError> {
        let declared = content_type.unwrap_or_default();
        let essence = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if self.allowed_types.iter().any(|allowed| *allowed == essence) {
            Ok(())
        } else {
            Err(UploadError::UnsupportedType {
                content_type: declared.to_string(),
            })
        }
    }

    /// Check the number of bytes received so far
    pub fn check_size(&self, received: usize) -> Result<(), UploadError> {
        if received > self.max_file_size {
            Err(UploadError::TooLarge {
                limit: self.max_file_size,
            })
        } else {
            Ok(())
        }
    }
}

/// An accepted image part, fully buffered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Client-supplied file name, unsanitized
    pub file_name: String,
    /// Declared MIME type, already checked against the policy
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}
