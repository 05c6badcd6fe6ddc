//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts a JWT from the `Authorization: Bearer` header or
//! from the auth cookie, verifies it with the core `TokenService`, and
//! injects an `AuthContext` into the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use nb_core::services::token::TokenService;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::ApiError;

/// Caller identity injected into authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject claim of the verified token
    pub subject: String,
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
    cookie_name: Rc<str>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    ///
    /// # Arguments
    ///
    /// * `token_service` - Verifier for incoming tokens
    /// * `cookie_name` - Cookie consulted when no bearer header is present
    pub fn new(token_service: Arc<TokenService>, cookie_name: &str) -> Self {
        Self {
            token_service,
            cookie_name: Rc::from(cookie_name),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
            cookie_name: Rc::clone(&self.cookie_name),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    cookie_name: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let token = extract_bearer_token(&req).or_else(|| extract_cookie_token(&req, &self.cookie_name));
        let verified = match token {
            Some(token) => self.token_service.verify(&token).map_err(ApiError::from),
            None => Err(ApiError::unauthorized(
                "You are not logged in, please log in to get access",
            )),
        };

        Box::pin(async move {
            // Rejections are returned as responses so outer middleware still runs
            let claims = match verified {
                Ok(claims) => claims,
                Err(err) => return Ok(req.error_response(err).map_into_right_body()),
            };

            req.extensions_mut().insert(AuthContext {
                subject: claims.sub,
            });

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// Extracts the token from the auth cookie
fn extract_cookie_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    req.cookie(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required").into());

        ready(result)
    }
}
