//! Request routing
//!
//! Maps the catalog routes onto `CatalogService` calls.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::catalog::{Collection, IdentifiedEntry};
use crate::error::Result;
use crate::protocol::{json_payload, CreatedResponse, DeletedResponse, UpdatedResponse};
use crate::service::CatalogService;
use crate::storage::Store;

/// Build the catalog router over `service`
pub fn router<S: Store>(service: Arc<CatalogService<S>>) -> Router {
    Router::new()
        .route("/api/animes", get(list_animes::<S>).post(create_animes::<S>))
        .route(
            "/api/animes/:id",
            get(get_anime::<S>)
                .put(update_anime::<S>)
                .delete(delete_anime::<S>),
        )
        .route("/api/animes/nombre/:nombre", get(get_anime_by_name::<S>))
        .with_state(service)
}

/// `GET /api/animes/:id`
async fn get_anime<S: Store>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<IdentifiedEntry>> {
    service.get_by_id(&id).await.map(Json)
}

/// `GET /api/animes/nombre/:nombre`
async fn get_anime_by_name<S: Store>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(name): Path<String>,
) -> Result<Json<IdentifiedEntry>> {
    service.get_by_name(&name).await.map(Json)
}

/// `GET /api/animes`
async fn list_animes<S: Store>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Result<Json<Collection>> {
    service.list().await.map(Json)
}

/// `POST /api/animes` with one entry or an array of entries
async fn create_animes<S: Store>(
    State(service): State<Arc<CatalogService<S>>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let payload = json_payload(body)?;
    let created = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(created))))
}

/// `PUT /api/animes/:id` with the fields to overwrite
async fn update_anime<S: Store>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<String>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdatedResponse>> {
    let patch = json_payload(body)?;
    let updated = service.update(&id, patch).await?;
    Ok(Json(UpdatedResponse::new(updated)))
}

/// `DELETE /api/animes/:id`
async fn delete_anime<S: Store>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>> {
    let remaining = service.delete(&id).await?;
    Ok(Json(DeletedResponse::new(remaining)))
}
