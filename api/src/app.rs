//! Application state and factory
//!
//! This module holds the wiring shared by the binary and the integration
//! tests: services for both collections, the token verifier, and the
//! settings derived from `AppConfig`.

use actix_files::Files;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpRequest, HttpResponse,
};
use std::path::PathBuf;
use std::sync::Arc;

use nb_core::repositories::ResourceRepository;
use nb_core::services::resource::ResourceService;
use nb_core::services::token::TokenService;
use nb_core::services::upload::{ImageStore, UploadPolicy};
use nb_shared::{AppConfig, CorsConfig};

use crate::handlers::error::ApiError;
use crate::handlers::health::health_check;
use crate::middleware::{auth::JwtAuth, cors::create_cors, error_handler::{ErrorFormatter, ErrorMode}};
use crate::routes::resource;

/// Settings the app factory needs from configuration
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub error_mode: ErrorMode,
    pub cors: CorsConfig,
    pub cookie_name: String,
    /// Directory served at `/uploads`
    pub uploads_dir: PathBuf,
    pub upload_policy: UploadPolicy,
}

impl AppSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            error_mode: ErrorMode::from(config.environment),
            cors: config.cors.clone(),
            cookie_name: config.auth.cookie_name.clone(),
            uploads_dir: config.upload.root.join("uploads"),
            upload_policy: UploadPolicy::from_config(&config.upload),
        }
    }
}

/// Everything shared across workers
pub struct AppState<R: ResourceRepository, S: ImageStore> {
    pub categories: ResourceService<R, S>,
    pub notes: ResourceService<R, S>,
    pub token_service: Arc<TokenService>,
    pub settings: AppSettings,
}

impl<R: ResourceRepository, S: ImageStore> Clone for AppState<R, S> {
    fn clone(&self) -> Self {
        Self {
            categories: self.categories.clone(),
            notes: self.notes.clone(),
            token_service: Arc::clone(&self.token_service),
            settings: self.settings.clone(),
        }
    }
}

/// Create and configure the application with all dependencies
///
/// Middleware order, outermost first: request logger, CORS, error
/// formatter. CORS sits outside the formatter so rendered error bodies
/// carry the allow-origin headers. The auth gate wraps each collection scope.
pub fn create_app<R, S>(
    state: AppState<R, S>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    R: ResourceRepository + 'static,
    S: ImageStore + 'static,
{
    let AppState {
        categories,
        notes,
        token_service,
        settings,
    } = state;

    let auth = JwtAuth::new(token_service, &settings.cookie_name);

    App::new()
        .app_data(web::Data::new(settings.upload_policy.clone()))
        .wrap(ErrorFormatter::new(settings.error_mode))
        .wrap(create_cors(&settings.cors))
        .wrap(Logger::default())
        // Public endpoints
        .route("/health", web::get().to(health_check))
        .service(Files::new("/uploads", settings.uploads_dir.clone()))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .configure(|cfg| resource::configure(cfg, "/category", categories, auth.clone()))
                .configure(|cfg| resource::configure(cfg, "/note", notes, auth)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::not_found(format!("Can't find this route: {}", req.uri())))
}
