//! Response definitions
//!
//! Success bodies and the mapping from errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::{Collection, Entry};
use crate::error::CatalogError;

pub const CREATED_MESSAGE: &str = "Animes agregados correctamente";
pub const UPDATED_MESSAGE: &str = "Animé actualizado correctamente";
pub const DELETED_MESSAGE: &str = "Animé eliminado y lista reordenada correctamente";

/// Body of a successful create (201)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,

    /// The entries as submitted, without their identifiers
    pub animes: Vec<Entry>,
}

impl CreatedResponse {
    pub fn new(animes: Vec<Entry>) -> Self {
        Self {
            message: CREATED_MESSAGE.to_string(),
            animes,
        }
    }
}

/// Body of a successful update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedResponse {
    #[serde(rename = "mensaje")]
    pub message: String,

    pub anime: Entry,
}

impl UpdatedResponse {
    pub fn new(anime: Entry) -> Self {
        Self {
            message: UPDATED_MESSAGE.to_string(),
            anime,
        }
    }
}

/// Body of a successful delete: the renumbered collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    #[serde(rename = "mensaje")]
    pub message: String,

    pub animes: Collection,
}

impl DeletedResponse {
    pub fn new(animes: Collection) -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
            animes,
        }
    }
}

/// Body of every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CatalogError {
    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::MissingFields | CatalogError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            CatalogError::StorageRead(_)
            | CatalogError::StorageParse(_)
            | CatalogError::StorageWrite(_)
            | CatalogError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        } else {
            tracing::error!(
                status = status.as_u16(),
                error = %self,
                cause = ?std::error::Error::source(&self),
                "Request failed"
            );
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
