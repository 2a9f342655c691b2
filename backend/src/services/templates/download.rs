use crate::registry;
use crate::services::export::sheet;
use actix_web::{web, HttpResponse, Responder};
use common::model::entity::EntityType;
use serde_json::json;

/// `GET /api/templates/{entity_type}`: header-only CSV with the column names
/// the importer matches against.
pub async fn process(entity_type: web::Path<String>) -> impl Responder {
    let entity: EntityType = match entity_type.parse() {
        Ok(entity) => entity,
        Err(e) => return HttpResponse::NotFound().json(json!({ "error": e })),
    };

    match sheet::write_sheet(registry::descriptor(entity), &[]) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"template_{}.csv\"", entity),
            ))
            .body(bytes),
        Err(e) => HttpResponse::ServiceUnavailable().json(json!({ "error": e })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn template_is_header_only() {
        let app = test::init_service(
            App::new().service(crate::services::templates::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/templates/pocos")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("Content-Disposition").unwrap(),
            "attachment; filename=\"template_pocos.csv\""
        );

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Código*,Nome*,"));
    }

    #[actix_web::test]
    async fn template_matches_export_of_empty_dataset_byte_for_byte() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = crate::config::AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            db_path: dir.path().join("sgm.sqlite"),
            cache_version: "v-test".to_string(),
        };
        crate::db::init_schema(&cfg.db_path).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(cfg))
                .service(crate::services::templates::configure_routes())
                .service(crate::services::export::configure_routes()),
        )
        .await;

        for entity in EntityType::ALL {
            let req = test::TestRequest::get()
                .uri(&format!("/api/templates/{}", entity))
                .to_request();
            let template = test::read_body(test::call_service(&app, req).await).await;

            let req = test::TestRequest::get()
                .uri(&format!("/api/export/{}/template", entity))
                .to_request();
            let export = test::read_body(test::call_service(&app, req).await).await;

            assert_eq!(template, export, "{}", entity);
        }
    }

    #[actix_web::test]
    async fn unknown_entity_type_is_404() {
        let app = test::init_service(
            App::new().service(crate::services::templates::configure_routes()),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/templates/reservatorios")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
