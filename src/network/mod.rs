//! Network Module
//!
//! HTTP server and request routing.
//!
//! ## Architecture
//! - axum router, one handler per catalog operation
//! - Handlers share one `CatalogService` behind an `Arc`
//! - Each request is handled independently; storage I/O is async
//! - Graceful shutdown through `Server::shutdown`

mod router;
mod server;

pub use router::router;
pub use server::Server;
