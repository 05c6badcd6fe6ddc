//! Create/update body extractor
//!
//! Accepts `multipart/form-data` with an optional single `image` file part,
//! or a JSON / urlencoded body carrying only text fields. File parts are
//! checked against the `UploadPolicy` from the part header before any byte
//! is buffered, and the read stops as soon as the size limit is crossed.

use actix_multipart::{Field, Multipart};
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::{future::LocalBoxFuture, StreamExt};
use nb_core::errors::UploadError;
use nb_core::services::resource::ResourceInput;
use nb_core::services::upload::{UploadPolicy, UploadedImage};
use serde::Deserialize;

use crate::handlers::error::ApiError;

/// Multipart field carrying the file
pub const IMAGE_FIELD: &str = "image";

/// Upper bound for a single text field
pub const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

/// Text fields accepted from JSON and urlencoded bodies
#[derive(Debug, Default, Deserialize)]
struct TextFields {
    #[serde(default)]
    name: Option<String>,
}

/// Parsed create/update body
#[derive(Debug, Default)]
pub struct ResourceForm {
    pub name: Option<String>,
    pub image: Option<UploadedImage>,
}

impl ResourceForm {
    pub fn into_input(self) -> ResourceInput {
        ResourceInput::new(self.name, self.image)
    }
}

impl FromRequest for ResourceForm {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let policy = req
            .app_data::<web::Data<UploadPolicy>>()
            .map(|policy| policy.get_ref().clone())
            .unwrap_or_default();

        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::new(req.headers(), payload.take());
            return Box::pin(async move { Ok(read_multipart(multipart, &policy).await?) });
        }

        if content_type.starts_with("application/json") {
            let json = web::Json::<TextFields>::from_request(req, payload);
            return Box::pin(async move {
                let fields = json.await?.into_inner();
                Ok(Self {
                    name: fields.name,
                    image: None,
                })
            });
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let form = web::Form::<TextFields>::from_request(req, payload);
            return Box::pin(async move {
                let fields = form.await?.into_inner();
                Ok(Self {
                    name: fields.name,
                    image: None,
                })
            });
        }

        // No body at all is a valid, empty form
        Box::pin(async { Ok(Self::default()) })
    }
}

async fn read_multipart(mut multipart: Multipart, policy: &UploadPolicy) -> Result<ResourceForm, ApiError> {
    let mut form = ResourceForm::default();

    while let Some(item) = multipart.next().await {
        let mut field = item.map_err(|e| malformed(e.to_string()))?;

        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        match file_name {
            Some(file_name) => {
                // Browsers send an empty part for an untouched file input
                if file_name.is_empty() {
                    drain(&mut field).await?;
                    continue;
                }
                if field_name != IMAGE_FIELD {
                    return Err(malformed(format!("Unexpected file field: {}", field_name)));
                }
                if form.image.is_some() {
                    return Err(UploadError::TooManyFiles.into());
                }

                let content_type = field.content_type().map(|mime| mime.essence_str().to_string());
                policy.check_content_type(content_type.as_deref())?;

                let bytes = read_limited(&mut field, |received| policy.check_size(received)).await?;

                form.image = Some(UploadedImage::new(
                    file_name,
                    content_type.unwrap_or_default(),
                    bytes,
                ));
            }
            None => {
                let bytes = read_limited(&mut field, |received| {
                    if received > MAX_TEXT_FIELD_SIZE {
                        Err(UploadError::Malformed {
                            message: format!("Field {} exceeds {} bytes", field_name, MAX_TEXT_FIELD_SIZE),
                        })
                    } else {
                        Ok(())
                    }
                })
                .await?;
                let value = String::from_utf8(bytes)
                    .map_err(|_| malformed(format!("Field {} is not valid UTF-8", field_name)))?;

                if field_name == "name" {
                    form.name = Some(value);
                }
            }
        }
    }

    Ok(form)
}

/// Buffer a field, running `check` on the running total before each chunk
/// is kept so oversized parts fail without being fully read
async fn read_limited<F>(field: &mut Field, check: F) -> Result<Vec<u8>, ApiError>
where
    F: Fn(usize) -> Result<(), UploadError>,
{
    let mut buffer = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| malformed(e.to_string()))?;
        check(buffer.len() + chunk.len())?;
        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer)
}

async fn drain(field: &mut Field) -> Result<(), ApiError> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| malformed(e.to_string()))?;
    }
    Ok(())
}

fn malformed(message: impl Into<String>) -> ApiError {
    UploadError::Malformed {
        message: message.into(),
    }
    .into()
}
