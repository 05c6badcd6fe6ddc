//! Terminal error formatting middleware
//!
//! Wrapped around the whole app so that errors raised by handlers,
//! extractors, other middleware and the default service all leave the
//! server in one shape. The shape depends on the `ErrorMode` given at
//! construction; it is never read from the environment per request.

use actix_web::{
    body::{BoxBody, EitherBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::StatusCode,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use nb_shared::Environment;
use serde_json::{json, Value};
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::handlers::error::{status_label, ApiError, DEFAULT_ERROR_MESSAGE};

/// How much detail error bodies carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Full error object and cause chain
    Development,
    /// `{ status, message }` only
    Production,
}

impl From<Environment> for ErrorMode {
    fn from(environment: Environment) -> Self {
        if environment.is_development() {
            ErrorMode::Development
        } else {
            ErrorMode::Production
        }
    }
}

/// Fields extracted from any error before rendering
#[derive(Debug, Clone, PartialEq)]
struct ErrorParts {
    status_code: StatusCode,
    message: String,
    is_operational: bool,
    stack: String,
}

impl ErrorParts {
    fn from_error(err: &Error) -> Self {
        if let Some(api_error) = err.as_error::<ApiError>() {
            return Self {
                status_code: api_error.status(),
                message: api_error.message().to_string(),
                is_operational: api_error.is_operational(),
                stack: api_error.stack(),
            };
        }

        // Framework errors keep their own status and display string
        let status_code = err.as_response_error().status_code();
        Self {
            status_code,
            message: err.to_string(),
            is_operational: !status_code.is_server_error(),
            stack: format!("{:?}", err),
        }
    }
}

/// Build the final error response for `err`
pub fn render_error(mode: ErrorMode, err: &Error) -> HttpResponse {
    let parts = ErrorParts::from_error(err);
    log_error(&parts);
    HttpResponse::build(parts.status_code).json(error_body(mode, &parts))
}

fn error_body(mode: ErrorMode, parts: &ErrorParts) -> Value {
    let status = status_label(parts.status_code);
    let message = if parts.message.is_empty() {
        DEFAULT_ERROR_MESSAGE
    } else {
        parts.message.as_str()
    };

    match mode {
        ErrorMode::Development => json!({
            "status": status,
            "error": {
                "statusCode": parts.status_code.as_u16(),
                "status": status,
                "isOperational": parts.is_operational,
                "message": message,
            },
            "message": message,
            "stack": parts.stack,
        }),
        ErrorMode::Production => {
            let message = if parts.is_operational {
                message
            } else {
                DEFAULT_ERROR_MESSAGE
            };
            json!({ "status": status, "message": message })
        }
    }
}

fn log_error(parts: &ErrorParts) {
    if parts.status_code.is_server_error() {
        log::error!("{} {}: {}", parts.status_code.as_u16(), status_label(parts.status_code), parts.stack);
    } else {
        log::warn!("{} {}: {}", parts.status_code.as_u16(), status_label(parts.status_code), parts.message);
    }
}

/// Middleware factory for terminal error formatting
#[derive(Debug, Clone, Copy)]
pub struct ErrorFormatter {
    mode: ErrorMode,
}

impl ErrorFormatter {
    pub fn new(mode: ErrorMode) -> Self {
        Self { mode }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorFormatter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorFormatterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorFormatterMiddleware {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

pub struct ErrorFormatterMiddleware<S> {
    service: Rc<S>,
    mode: ErrorMode,
}

impl<S, B> Service<ServiceRequest> for ErrorFormatterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let mode = self.mode;

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    // Handler and extractor errors arrive as responses with the error attached
                    let formatted = res.response().error().map(|err| render_error(mode, err));
                    match formatted {
                        Some(response) => Ok(res.into_response(response).map_into_right_body()),
                        None => Ok(res.map_into_left_body()),
                    }
                }
                // The request is gone; hand the rendered body back as the error's response
                Err(err) => {
                    let response = render_error(mode, &err);
                    Err(InternalError::from_response(err.to_string(), response).into())
                }
            }
        })
    }
}
