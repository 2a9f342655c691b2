//! SQLite storage for imported records.
//!
//! The schema is generated from the template registry: one table per entity
//! type, one typed column per descriptor field, plus a surrogate `id` rowid.
//! Natural keys listed in the descriptor (`equipamentos.tag`,
//! `pocos.codigo`, ...) get UNIQUE constraints, which is what turns a
//! duplicate re-import into row-level persistence failures instead of
//! silent duplicates.

use crate::registry::{self, FieldKind, TemplateDescriptor};
use common::model::entity::EntityType;
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params_from_iter, Connection};
use std::collections::BTreeMap;
use std::path::Path;

fn open(db_path: &Path) -> Result<Connection, String> {
    Connection::open(db_path).map_err(|e| e.to_string())
}

fn sql_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Integer => "INTEGER",
        FieldKind::Number => "REAL",
        FieldKind::Text | FieldKind::Date | FieldKind::Options(_) => "TEXT",
    }
}

fn create_table_sql(descriptor: &TemplateDescriptor) -> String {
    let mut columns = vec!["id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()];
    for f in &descriptor.fields {
        let unique = if descriptor.unique.contains(&f.field) {
            " UNIQUE"
        } else {
            ""
        };
        columns.push(format!("{} {}{}", f.field, sql_type(f.kind), unique));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        descriptor.entity.as_str(),
        columns.join(", ")
    )
}

/// Creates every entity table that does not exist yet. Called once at startup.
pub fn init_schema(db_path: &Path) -> Result<(), String> {
    let conn = open(db_path)?;
    for entity in EntityType::ALL {
        let sql = create_table_sql(registry::descriptor(entity));
        conn.execute(&sql, []).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Inserts one validated record. Keys of `fields` are descriptor field
/// names; values are the (already validated) cell texts. Numeric columns are
/// bound typed so that exports read back what was written.
pub fn insert_record(
    db_path: &Path,
    entity: EntityType,
    fields: &BTreeMap<String, String>,
) -> Result<(), String> {
    let descriptor = registry::descriptor(entity);
    let mut columns = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    for f in &descriptor.fields {
        let cell = fields.get(f.field).map(|v| v.trim()).unwrap_or("");
        if cell.is_empty() {
            continue;
        }
        columns.push(f.field);
        values.push(match f.kind {
            FieldKind::Integer => Value::Integer(
                cell.parse::<i64>()
                    .map_err(|_| format!("Valor não inteiro para '{}'", f.field))?,
            ),
            FieldKind::Number => Value::Real(
                cell.parse::<f64>()
                    .map_err(|_| format!("Valor não numérico para '{}'", f.field))?,
            ),
            _ => Value::Text(cell.to_string()),
        });
    }

    if columns.is_empty() {
        return Err("Registro vazio".to_string());
    }

    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        entity.as_str(),
        columns.join(", "),
        placeholders.join(", ")
    );

    let conn = open(db_path)?;
    conn.execute(&sql, params_from_iter(values))
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Reads all records of an entity type in insertion (rowid) order, as
/// field-name → JSON value maps. Null columns are omitted.
pub fn list_records(
    db_path: &Path,
    entity: EntityType,
) -> Result<Vec<serde_json::Map<String, serde_json::Value>>, String> {
    let descriptor = registry::descriptor(entity);
    let field_names: Vec<&str> = descriptor.fields.iter().map(|f| f.field).collect();
    let sql = format!(
        "SELECT {} FROM {} ORDER BY id",
        field_names.join(", "),
        entity.as_str()
    );

    let conn = open(db_path)?;
    let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
    let mut rows = stmt.query([]).map_err(|e| e.to_string())?;

    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(|e| e.to_string())? {
        let mut record = serde_json::Map::new();
        for (i, name) in field_names.iter().enumerate() {
            let value = match row.get_ref(i).map_err(|e| e.to_string())? {
                ValueRef::Null => continue,
                ValueRef::Integer(v) => serde_json::Value::from(v),
                ValueRef::Real(v) => serde_json::Value::from(v),
                ValueRef::Text(v) => {
                    serde_json::Value::from(String::from_utf8_lossy(v).into_owned())
                }
                ValueRef::Blob(_) => continue,
            };
            record.insert((*name).to_string(), value);
        }
        records.push(record);
    }
    Ok(records)
}

pub fn count_records(db_path: &Path, entity: EntityType) -> Result<usize, String> {
    let conn = open(db_path)?;
    let sql = format!("SELECT COUNT(*) FROM {}", entity.as_str());
    conn.query_row(&sql, [], |row| row.get::<_, i64>(0))
        .map(|n| n as usize)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_db() -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sgm.sqlite");
        init_schema(&path).unwrap();
        (dir, path)
    }

    fn poco(codigo: &str) -> BTreeMap<String, String> {
        let mut f = BTreeMap::new();
        f.insert("codigo".to_string(), codigo.to_string());
        f.insert("nome".to_string(), "Poço Produtor 1".to_string());
        f.insert("tipo".to_string(), "produtor".to_string());
        f.insert("poloId".to_string(), "1".to_string());
        f.insert("instalacaoId".to_string(), "1".to_string());
        f.insert("status".to_string(), "ativo".to_string());
        f
    }

    #[test]
    fn insert_and_list_preserve_order_and_types() {
        let (_dir, path) = test_db();
        insert_record(&path, EntityType::Pocos, &poco("POC-001")).unwrap();
        insert_record(&path, EntityType::Pocos, &poco("POC-002")).unwrap();

        let records = list_records(&path, EntityType::Pocos).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["codigo"], "POC-001");
        assert_eq!(records[1]["codigo"], "POC-002");
        // Integer column comes back as a JSON number, not a string.
        assert_eq!(records[0]["poloId"], 1);
        // Empty optional column is absent.
        assert!(!records[0].contains_key("observacoes"));
    }

    #[test]
    fn natural_key_is_unique() {
        let (_dir, path) = test_db();
        insert_record(&path, EntityType::Pocos, &poco("POC-001")).unwrap();
        let err = insert_record(&path, EntityType::Pocos, &poco("POC-001")).unwrap_err();
        assert!(err.to_lowercase().contains("unique"), "{}", err);
        assert_eq!(count_records(&path, EntityType::Pocos).unwrap(), 1);
    }

    #[test]
    fn schema_covers_every_entity() {
        let (_dir, path) = test_db();
        for entity in EntityType::ALL {
            assert_eq!(count_records(&path, entity).unwrap(), 0);
        }
    }
}
