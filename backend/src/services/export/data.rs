use crate::config::AppConfig;
use crate::db;
use crate::registry;
use crate::services::export::sheet;
use actix_web::{web, HttpResponse, Responder};
use common::model::entity::EntityType;
use serde_json::json;

pub async fn process(
    cfg: web::Data<AppConfig>,
    entity_type: web::Path<String>,
) -> impl Responder {
    let entity: EntityType = match entity_type.parse() {
        Ok(entity) => entity,
        Err(e) => return HttpResponse::NotFound().json(json!({ "error": e })),
    };

    match export_data(&cfg, entity).await {
        Ok(bytes) => {
            let filename = format!(
                "export_{}_{}.csv",
                entity,
                chrono::Local::now().format("%Y-%m-%d")
            );
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(bytes)
        }
        Err(e) => HttpResponse::ServiceUnavailable().json(json!({ "error": e })),
    }
}

async fn export_data(cfg: &AppConfig, entity: EntityType) -> Result<Vec<u8>, String> {
    let records = db::list_records(&cfg.db_path, entity)?;
    sheet::write_sheet(registry::descriptor(entity), &records)
}
