//! Request bodies

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::error::{CatalogError, Result};

/// Unwrap an extracted JSON body, turning framework rejections (bad syntax,
/// wrong content type) into a catalog error with the usual `error` body
pub fn json_payload(body: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| CatalogError::InvalidPayload(rejection.body_text()))
}
