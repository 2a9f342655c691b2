use crate::config::AppConfig;
use crate::services::import::pipeline;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::entity::EntityType;
use futures_util::StreamExt;
use log::info;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct ImportQuery {
    #[serde(default)]
    pub validate: bool,
}

/// HTTP handler for `POST /api/import/{entity_type}?validate={true|false}`.
///
/// Unknown entity types and unreadable uploads are rejected before any row
/// is processed; a readable file always answers `200` with the structured
/// result, partial failure included.
pub async fn process(
    cfg: web::Data<AppConfig>,
    entity_type: web::Path<String>,
    query: web::Query<ImportQuery>,
    payload: Multipart,
) -> impl Responder {
    let entity: EntityType = match entity_type.parse() {
        Ok(entity) => entity,
        Err(e) => return HttpResponse::NotFound().json(json!({ "error": e })),
    };

    let bytes = match read_upload(payload).await {
        Ok(bytes) => bytes,
        Err(e) => return HttpResponse::BadRequest().json(json!({ "error": e.to_string() })),
    };

    match pipeline::import_rows(&cfg.db_path, entity, &bytes, query.validate) {
        Ok(result) => {
            info!(
                "import {}: {} inserted, {} failed of {} rows (validate={})",
                entity, result.inserted, result.failed, result.summary.total, query.validate
            );
            HttpResponse::Ok().json(result)
        }
        Err(e) => HttpResponse::BadRequest().json(json!({ "error": e })),
    }
}

/// Streams the multipart `file` field into memory.
async fn read_upload(mut payload: Multipart) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() == Some("file") {
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                .unwrap_or_default();
            if !filename.is_empty() && !filename.ends_with(".csv") {
                return Err("O arquivo deve ter extensão .csv".into());
            }

            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                bytes.extend_from_slice(&chunk?);
            }
            return Ok(bytes);
        }
    }
    Err("Campo 'file' ausente no formulário".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use actix_web::{test, App};
    use common::model::import::ImportResult;
    use tempfile::TempDir;

    const BOUNDARY: &str = "----sgm-test-boundary";

    fn multipart_body(csv: &str) -> Vec<u8> {
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"dados.csv\"\r\nContent-Type: text/csv\r\n\r\n{csv}\r\n--{b}--\r\n",
            b = BOUNDARY,
            csv = csv
        )
        .into_bytes()
    }

    fn test_config() -> (TempDir, AppConfig) {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            db_path: dir.path().join("sgm.sqlite"),
            cache_version: "v-test".to_string(),
        };
        db::init_schema(&cfg.db_path).unwrap();
        (dir, cfg)
    }

    fn import_request(uri: &str, csv: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(multipart_body(csv))
    }

    #[actix_web::test]
    async fn import_answers_with_a_structured_result() {
        let (_dir, cfg) = test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(cfg.clone()))
                .service(crate::services::import::configure_routes()),
        )
        .await;

        let csv = "\
Código*,Nome*,Tipo*,Polo ID*,Instalação ID*,Status*
POC-001,Poço 1,produtor,1,1,ativo
,Poço 2,produtor,1,1,ativo
POC-003,Poço 3,produtor,1,1,ativo
";
        let resp = test::call_service(&app, import_request("/api/import/pocos", csv).to_request()).await;
        assert!(resp.status().is_success());
        let result: ImportResult = test::read_body_json(resp).await;
        assert_eq!(result.inserted, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].row, 3);
        assert_eq!(result.summary.total, 3);
        assert_eq!(result.summary.valid, 2);
        assert_eq!(result.summary.invalid, 1);
        assert_eq!(db::count_records(&cfg.db_path, EntityType::Pocos).unwrap(), 2);
    }

    #[actix_web::test]
    async fn validate_query_parameter_suppresses_insertion() {
        let (_dir, cfg) = test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(cfg.clone()))
                .service(crate::services::import::configure_routes()),
        )
        .await;

        let csv = "\
Código*,Nome*,Tipo*,Polo ID*,Instalação ID*,Status*
POC-001,Poço 1,produtor,1,1,ativo
";
        let resp = test::call_service(&app, import_request("/api/import/pocos?validate=true", csv).to_request()).await;
        assert!(resp.status().is_success());
        let result: ImportResult = test::read_body_json(resp).await;
        assert_eq!(result.inserted, 0);
        assert_eq!(result.summary.valid, 1);
        assert_eq!(db::count_records(&cfg.db_path, EntityType::Pocos).unwrap(), 0);
    }

    #[actix_web::test]
    async fn unknown_entity_type_is_rejected_before_parsing() {
        let (_dir, cfg) = test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(cfg))
                .service(crate::services::import::configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, import_request("/api/import/tanques", "a,b\n1,2\n").to_request()).await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("tanques"));
    }

    #[actix_web::test]
    async fn file_level_error_is_a_400_with_error_body() {
        let (_dir, cfg) = test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(cfg))
                .service(crate::services::import::configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, import_request("/api/import/pocos", "a,b,c\n1,2,3\n").to_request()).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("não corresponde"));
    }
}
