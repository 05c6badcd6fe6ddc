//! Upload configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::first_var;

/// Image upload policy and storage location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Directory that contains the public `uploads/` tree
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Maximum accepted file size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,

    /// Accepted MIME types for image parts
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_file_size: default_max_file_size(),
            allowed_types: default_allowed_types(),
        }
    }
}

impl UploadConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            root: first_var(&["UPLOAD_ROOT"])
                .map(PathBuf::from)
                .unwrap_or(defaults.root),
            ..defaults
        }
    }

    /// Use a different storage root, keeping the policy
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_file_size() -> usize {
    5 * 1024 * 1024 // 5 MiB
}

fn default_allowed_types() -> Vec<String> {
    vec![
        "image/png".to_string(),
        "image/jpg".to_string(),
        "image/jpeg".to_string(),
    ]
}
