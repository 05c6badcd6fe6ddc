use crate::domain::entities::resource::ResourceKind;
use crate::errors::{DomainError, UploadError};

#[test]
fn test_not_found_message_names_id() {
    let error = DomainError::not_found(ResourceKind::Category, "abc-123");
    assert_eq!(error.to_string(), "no category for this id: abc-123");
    assert!(error.is_operational());
}

#[test]
fn test_upload_error_is_transparent() {
    let error: DomainError = UploadError::UnsupportedType {
        content_type: "text/plain".to_string(),
    }
    .into();
    assert_eq!(error.to_string(), "only jpg, png, jpeg images are allowed");
}

#[test]
fn test_infrastructure_errors_are_not_operational() {
    let storage = DomainError::Storage { message: "disk full".to_string() };
    let internal = DomainError::Internal { message: "pool closed".to_string() };
    assert!(!storage.is_operational());
    assert!(!internal.is_operational());
    assert!(DomainError::validation("name is required").is_operational());
}
