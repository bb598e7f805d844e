//! Error types for the anime catalog
//!
//! Provides a unified error type for all operations. The `Display` text of
//! each variant is the message sent to HTTP clients in the `error` field.

use std::fmt;

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// What a failed lookup was searching for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Identifier taken literally from the route
    Id(String),

    /// Name as the client typed it (original case)
    Name(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "ID: {}", id),
            Lookup::Name(name) => write!(f, "nombre: {}", name),
        }
    }
}

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // Client Errors
    // -------------------------------------------------------------------------
    #[error("No se encontró un animé con el {0}")]
    NotFound(Lookup),

    #[error("Todos los campos son obligatorios: nombre, genero, año, autor")]
    MissingFields,

    #[error("Cuerpo de la petición inválido: {0}")]
    InvalidPayload(String),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Error al leer el archivo JSON")]
    StorageRead(#[source] std::io::Error),

    #[error("Error al parsear el archivo JSON")]
    StorageParse(#[source] serde_json::Error),

    #[error("Error al guardar los cambios en el archivo JSON")]
    StorageWrite(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Server Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Shorthand for a missing identifier
    pub fn id_not_found(id: impl Into<String>) -> Self {
        CatalogError::NotFound(Lookup::Id(id.into()))
    }

    /// Shorthand for a missing name
    pub fn name_not_found(name: impl Into<String>) -> Self {
        CatalogError::NotFound(Lookup::Name(name.into()))
    }

    /// True for failures caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound(_) | CatalogError::MissingFields | CatalogError::InvalidPayload(_)
        )
    }
}
