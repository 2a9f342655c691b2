use crate::config::AppConfig;
use crate::db;
use actix_web::{web, HttpResponse, Responder};
use common::model::entity::EntityType;
use serde_json::json;

/// `GET /api/{entity_type}`: all stored records in insertion order.
pub async fn process(
    cfg: web::Data<AppConfig>,
    entity_type: web::Path<String>,
) -> impl Responder {
    let entity: EntityType = match entity_type.parse() {
        Ok(entity) => entity,
        Err(e) => return HttpResponse::NotFound().json(json!({ "error": e })),
    };

    match db::list_records(&cfg.db_path, entity) {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => HttpResponse::ServiceUnavailable().json(json!({ "error": e })),
    }
}
