//! # Import Service
//!
//! Handles bulk record import under `/api/import`. One call processes one
//! uploaded tabular file for one entity type, row by row, and always answers
//! with a structured `ImportResult` when the file itself is readable.
//!
//! Failure handling is two-tiered:
//! - file-level problems (unknown entity type, unreadable or empty file,
//!   a required column missing from the header) abort the call with an
//!   HTTP error and an `{error}` body, before any row is touched;
//! - row-level problems (missing required value, malformed cell, UNIQUE
//!   violation on insert) are isolated to their row and reported in the
//!   result's error list, keyed by the spreadsheet line number (the header
//!   is line 1, the first data row is 2).
//!
//! The operation is not transactional: rows inserted before a later failure
//! stay inserted. Operators bulk-loading hundreds of equipment records
//! expect partial success with a precise error report they can fix and
//! re-upload.
//!
//! ## Registered Routes:
//!
//! *   **`POST /{entity_type}?validate={true|false}`**:
//!     - **Handler**: `run::process`
//!     - **Description**: Multipart form with a single `file` field holding
//!       the CSV. With `validate=true` the full pipeline runs without any
//!       insertion, so a file can be checked before committing to it.

mod pipeline;
mod run;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/import";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{entity_type}", post().to(run::process))
}
