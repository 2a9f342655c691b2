//! # Records Service
//!
//! Plain JSON access to the stored records of any registered entity type,
//! under the generic `/api/{entity_type}` path. Listing is what the export
//! service projects from; creation goes through the same descriptor
//! validation as the importer, so a record is a record no matter which door
//! it came in through.
//!
//! Registered last in `main.rs`, after the import/export/template scopes,
//! so those fixed prefixes keep winning the route match.

mod create;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{entity_type}", get().to(list::process))
        .route("/{entity_type}", post().to(create::process))
}
