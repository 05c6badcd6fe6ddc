//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use nb_api::{middleware::ErrorMode, AppSettings, AppState};
use nb_core::domain::entities::resource::ResourceKind;
use nb_core::repositories::{InMemoryResourceRepository, ResourceRepository};
use nb_core::services::resource::ResourceService;
use nb_core::services::token::{TokenService, TokenServiceConfig};
use nb_core::services::upload::UploadPolicy;
use nb_infra::LocalImageStore;
use nb_shared::CorsConfig;
use tempfile::TempDir;

pub const SECRET: &str = "integration-test-secret";
pub const BOUNDARY: &str = "----noteboard-test-boundary";

/// Handles the tests keep after the state is moved into the app
pub struct Fixture {
    pub dir: TempDir,
    pub token: String,
    pub categories: Arc<InMemoryResourceRepository>,
    pub notes: Arc<InMemoryResourceRepository>,
}

impl Fixture {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn bearer(&self) -> (String, String) {
        ("Authorization".to_string(), format!("Bearer {}", self.token))
    }

    /// Files currently stored for a kind
    pub fn stored_files(&self, kind: ResourceKind) -> Vec<PathBuf> {
        match std::fs::read_dir(self.root().join(kind.upload_dir())) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub fn settings(mode: ErrorMode, root: &Path) -> AppSettings {
    AppSettings {
        error_mode: mode,
        cors: CorsConfig::default(),
        cookie_name: "token".to_string(),
        uploads_dir: root.join("uploads"),
        upload_policy: UploadPolicy::default(),
    }
}

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: SECRET.to_string(),
        ..TokenServiceConfig::default()
    }))
}

/// App state over in-memory repositories and a temp upload root
pub fn in_memory_state(mode: ErrorMode) -> (AppState<InMemoryResourceRepository, LocalImageStore>, Fixture) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(LocalImageStore::new(dir.path()));
    let categories = Arc::new(InMemoryResourceRepository::new());
    let notes = Arc::new(InMemoryResourceRepository::new());
    let tokens = token_service();
    let token = tokens.issue("tester").unwrap();

    let state = AppState {
        categories: ResourceService::new(ResourceKind::Category, Arc::clone(&categories), Arc::clone(&store)),
        notes: ResourceService::new(ResourceKind::Note, Arc::clone(&notes), Arc::clone(&store)),
        token_service: tokens,
        settings: settings(mode, dir.path()),
    };

    (
        state,
        Fixture {
            dir,
            token,
            categories,
            notes,
        },
    )
}

/// State over arbitrary repositories, for failure injection
pub fn state_with<R: ResourceRepository>(
    mode: ErrorMode,
    categories: R,
    notes: R,
) -> (AppState<R, LocalImageStore>, TempDir, String) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(LocalImageStore::new(dir.path()));
    let tokens = token_service();
    let token = tokens.issue("tester").unwrap();

    let state = AppState {
        categories: ResourceService::new(ResourceKind::Category, Arc::new(categories), Arc::clone(&store)),
        notes: ResourceService::new(ResourceKind::Note, Arc::new(notes), store),
        token_service: tokens,
        settings: settings(mode, dir.path()),
    };

    (state, dir, token)
}

/// A file part for `multipart_body`
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

impl<'a> FilePart<'a> {
    pub fn image(file_name: &'a str, content_type: &'a str, bytes: &'a [u8]) -> Self {
        Self {
            field: "image",
            file_name,
            content_type,
            bytes,
        }
    }
}

/// Build a multipart/form-data body, returning the content type header value and the body
pub fn multipart_body(fields: &[(&str, &str)], files: &[FilePart<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for file in files {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                file.field, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-data";
