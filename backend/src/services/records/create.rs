use crate::config::AppConfig;
use crate::db;
use crate::registry::{self, validate_record};
use actix_web::{web, HttpResponse, Responder};
use common::model::entity::EntityType;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// `POST /api/{entity_type}`: insert one record from a JSON field map.
pub async fn process(
    cfg: web::Data<AppConfig>,
    entity_type: web::Path<String>,
    payload: web::Json<serde_json::Map<String, Value>>,
) -> impl Responder {
    let entity: EntityType = match entity_type.parse() {
        Ok(entity) => entity,
        Err(e) => return HttpResponse::NotFound().json(json!({ "error": e })),
    };

    let fields = match scalar_fields(&payload) {
        Ok(fields) => fields,
        Err(e) => return HttpResponse::BadRequest().json(json!({ "error": e })),
    };

    let descriptor = registry::descriptor(entity);
    let violations = validate_record(descriptor, &fields);
    if !violations.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": violations.join("; ") }));
    }

    match db::insert_record(&cfg.db_path, entity, &fields) {
        Ok(()) => HttpResponse::Created().json(payload.into_inner()),
        Err(e) => HttpResponse::Conflict().json(json!({ "error": e })),
    }
}

/// Flattens the JSON body into cell texts, the shape the validator and the
/// importer share. Nested values are rejected.
fn scalar_fields(
    payload: &serde_json::Map<String, Value>,
) -> Result<BTreeMap<String, String>, String> {
    let mut fields = BTreeMap::new();
    for (key, value) in payload {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return Err(format!("Valor não escalar para '{}'", key)),
        };
        fields.insert(key.clone(), text);
    }
    Ok(fields)
}
