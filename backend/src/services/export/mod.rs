//! # Export Service
//!
//! Serves the stored records of an entity type as a downloadable CSV under
//! `/api/export`. Exported data is projected through the same template
//! descriptor the importer uses, so an export re-imports cleanly.
//!
//! ## Registered Routes:
//!
//! *   **`GET /{entity_type}/template`**:
//!     - **Handler**: `data::process`
//!     - **Description**: Streams all current records of the entity type as
//!       CSV in template column order, named
//!       `export_{entity_type}_{YYYY-MM-DD}.csv`. No validation is applied;
//!       persisted data already satisfies the domain rules. Does not mutate
//!       stored data.

mod data;
pub mod sheet;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/export";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{entity_type}/template", get().to(data::process))
}
