//! Unit tests for the upload policy

use nb_shared::UploadConfig;

use crate::errors::UploadError;
use crate::services::upload::{UploadPolicy, UploadedImage};

#[test]
fn test_allowed_types() {
    let policy = UploadPolicy::default();

    assert!(policy.check_content_type(Some("image/png")).is_ok());
    assert!(policy.check_content_type(Some("image/jpg")).is_ok());
    assert!(policy.check_content_type(Some("IMAGE/JPEG")).is_ok());
}

#[test]
fn test_rejected_types() {
    let policy = UploadPolicy::default();

    let err = policy.check_content_type(Some("text/plain")).unwrap_err();
    assert_eq!(
        err,
        UploadError::UnsupportedType {
            content_type: "text/plain".to_string()
        }
    );
    assert_eq!(err.to_string(), "only jpg, png, jpeg images are allowed");

    assert!(policy.check_content_type(Some("image/gif")).is_err());
    assert!(policy.check_content_type(None).is_err());
}

#[test]
fn test_size_limit() {
    let policy = UploadPolicy::default();
    let limit = 5 * 1024 * 1024;

    assert!(policy.check_size(limit).is_ok());
    assert_eq!(
        policy.check_size(6 * 1024 * 1024),
        Err(UploadError::TooLarge { limit })
    );
}

#[test]
fn test_policy_follows_config() {
    let config = UploadConfig {
        max_file_size: 10,
        allowed_types: vec!["image/webp".to_string()],
        ..UploadConfig::default()
    };
    let policy = UploadPolicy::from_config(&config);

    assert_eq!(policy.max_file_size(), 10);
    assert!(policy.check_content_type(Some("image/webp")).is_ok());
    assert!(policy.check_content_type(Some("image/png")).is_err());
    assert!(policy.check_size(11).is_err());
}

#[test]
fn test_uploaded_image_keeps_declared_type() {
    let image = UploadedImage::new("a.png", "image/png", vec![1, 2, 3]);
    assert_eq!(image.content_type, "image/png");
    assert_eq!(image.bytes.len(), 3);
}
