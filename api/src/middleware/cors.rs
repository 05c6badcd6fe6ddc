//! CORS middleware configuration for cross-origin requests.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use nb_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// A `*` entry in the origin list allows any origin.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                log::debug!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_configured_origin_is_echoed() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::default()))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:8000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8000"
        );
    }

    #[actix_web::test]
    async fn test_any_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            ..CorsConfig::default()
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://elsewhere.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
