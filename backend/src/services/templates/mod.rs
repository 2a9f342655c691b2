//! # Template Download Service
//!
//! Serves blank import templates under `/api/templates`. A template is the
//! header row of the entity's column layout and nothing else, giving the
//! operator a starting point with the exact column names the importer will
//! match against.
//!
//! ## Registered Routes:
//!
//! *   **`GET /{entity_type}`**:
//!     - **Handler**: `download::process`
//!     - **Description**: Streams a header-only CSV named
//!       `template_{entity_type}.csv`. The header row is byte-identical to
//!       the one produced by the export service for the same entity type.
//!       Unknown entity types get `404` with an `{error}` body.

mod download;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/templates";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{entity_type}", get().to(download::process))
}
