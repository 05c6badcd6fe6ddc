//! Handlers shared by the category and note collections
//!
//! Each collection is mounted as its own scope carrying its
//! `ResourceService` as scope data, so the same generic handlers serve both.

use actix_web::{web, HttpResponse};
use nb_core::repositories::ResourceRepository;
use nb_core::services::resource::ResourceService;
use nb_core::services::upload::ImageStore;
use nb_shared::{CreatedResponse, DataResponse, ListQuery, Pagination};

use crate::extractors::ResourceForm;
use crate::handlers::error::ApiError;
use crate::middleware::auth::JwtAuth;

/// Register one collection under `path`, behind the auth gate
///
/// Routes: `GET /`, `POST /`, `GET /{id}`, `PUT /{id}`, `DELETE /{id}`.
pub fn configure<R, S>(
    cfg: &mut web::ServiceConfig,
    path: &str,
    service: ResourceService<R, S>,
    auth: JwtAuth,
) where
    R: ResourceRepository + 'static,
    S: ImageStore + 'static,
{
    cfg.service(
        web::scope(path)
            .app_data(web::Data::new(service))
            .wrap(auth)
            .service(
                web::resource("")
                    .route(web::get().to(list::<R, S>))
                    .route(web::post().to(create::<R, S>)),
            )
            .service(
                web::resource("/")
                    .route(web::get().to(list::<R, S>))
                    .route(web::post().to(create::<R, S>)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get::<R, S>))
                    .route(web::put().to(update::<R, S>))
                    .route(web::delete().to(delete::<R, S>)),
            ),
    );
}

/// Handler for `GET /api/v1/<resource>?page=&limit=`
///
/// # Response
///
/// ```json
/// { "total": 2, "page": 1, "data": [ ... ] }
/// ```
pub async fn list<R, S>(
    service: web::Data<ResourceService<R, S>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError>
where
    R: ResourceRepository + 'static,
    S: ImageStore + 'static,
{
    let pagination = Pagination::from_query(&query);
    let page = service.list(pagination).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Handler for `GET /api/v1/<resource>/{id}`
pub async fn get<R, S>(
    service: web::Data<ResourceService<R, S>>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    R: ResourceRepository + 'static,
    S: ImageStore + 'static,
{
    let resource = service.get(&id).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(resource)))
}

/// Handler for `POST /api/v1/<resource>`
///
/// Accepts multipart (optional `image` part), JSON or urlencoded bodies.
pub async fn create<R, S>(
    service: web::Data<ResourceService<R, S>>,
    form: ResourceForm,
) -> Result<HttpResponse, ApiError>
where
    R: ResourceRepository + 'static,
    S: ImageStore + 'static,
{
    let resource = service.create(form.into_input()).await?;
    let message = format!("{} created successfully", service.kind().title());
    Ok(HttpResponse::Created().json(CreatedResponse::new(message, resource)))
}

/// Handler for `PUT /api/v1/<resource>/{id}`
pub async fn update<R, S>(
    service: web::Data<ResourceService<R, S>>,
    id: web::Path<String>,
    form: ResourceForm,
) -> Result<HttpResponse, ApiError>
where
    R: ResourceRepository + 'static,
    S: ImageStore + 'static,
{
    let resource = service.update(&id, form.into_input()).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(resource)))
}

/// Handler for `DELETE /api/v1/<resource>/{id}`
pub async fn delete<R, S>(
    service: web::Data<ResourceService<R, S>>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    R: ResourceRepository + 'static,
    S: ImageStore + 'static,
{
    service.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
