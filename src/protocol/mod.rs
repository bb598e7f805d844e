//! Protocol Module
//!
//! JSON shapes exchanged with HTTP clients.
//!
//! ## Success Bodies
//! ```text
//! GET    /api/animes/:id             {"id": "1", "nombre": ..., ...}
//! GET    /api/animes/nombre/:nombre  {"id": "1", "nombre": ..., ...}
//! GET    /api/animes                 {"1": {...}, "2": {...}}
//! POST   /api/animes                 {"message": "...", "animes": [...]}
//! PUT    /api/animes/:id             {"mensaje": "...", "anime": {...}}
//! DELETE /api/animes/:id             {"mensaje": "...", "animes": {...}}
//! ```
//!
//! ## Error Body
//! ```text
//! {"error": "<message>"}   404 lookup, 400 payload, 500 storage
//! ```

mod request;
mod response;

pub use request::json_payload;
pub use response::{
    CreatedResponse, DeletedResponse, ErrorResponse, UpdatedResponse, CREATED_MESSAGE,
    DELETED_MESSAGE, UPDATED_MESSAGE,
};
