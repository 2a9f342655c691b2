use crate::db;
use crate::registry::{self, validate_record, FieldSpec};
use common::model::entity::EntityType;
use common::model::import::{ImportResult, ImportRowError};
use std::collections::BTreeMap;
use std::path::Path;

/// Runs the whole import pipeline over the raw bytes of an uploaded file.
///
/// `Err` is reserved for file-level failures detected before row processing
/// starts; everything after that point is reported inside the `ImportResult`,
/// partial failure included.
pub fn import_rows(
    db_path: &Path,
    entity: EntityType,
    bytes: &[u8],
    validate_only: bool,
) -> Result<ImportResult, String> {
    let descriptor = registry::descriptor(entity);

    if bytes.is_empty() {
        return Err("Arquivo vazio".to_string());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| format!("Arquivo ilegível: {}", e))?
        .clone();

    // Column position -> descriptor field, by normalized header match.
    // Unrecognized columns are carried as None and ignored per row.
    let columns: Vec<Option<&FieldSpec>> = headers
        .iter()
        .map(|cell| descriptor.match_header(cell))
        .collect();

    if columns.iter().all(Option::is_none) {
        return Err(format!(
            "Cabeçalho não corresponde ao template de {}",
            descriptor.name
        ));
    }
    for f in descriptor.fields.iter().filter(|f| f.required) {
        if !columns.iter().flatten().any(|spec| spec.field == f.field) {
            return Err(format!("Coluna obrigatória '{}' ausente", f.header));
        }
    }

    let mut result = ImportResult::empty();
    for (index, record) in reader.records().enumerate() {
        // Spreadsheet line number; the header is line 1.
        let row = index + 2;
        result.summary.total += 1;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                result.summary.invalid += 1;
                result.failed += 1;
                result.errors.push(ImportRowError {
                    row,
                    errors: vec![format!("Linha ilegível: {}", e)],
                });
                continue;
            }
        };

        let mut fields = BTreeMap::new();
        for (i, column) in columns.iter().enumerate() {
            if let (Some(spec), Some(cell)) = (column, record.get(i)) {
                let cell = cell.trim();
                if !cell.is_empty() {
                    fields.insert(spec.field.to_string(), cell.to_string());
                }
            }
        }

        let violations = validate_record(descriptor, &fields);
        if !violations.is_empty() {
            result.summary.invalid += 1;
            result.failed += 1;
            result.errors.push(ImportRowError {
                row,
                errors: violations,
            });
            continue;
        }

        result.summary.valid += 1;
        if validate_only {
            continue;
        }

        match db::insert_record(db_path, entity, &fields) {
            Ok(()) => result.inserted += 1,
            Err(e) => {
                result.failed += 1;
                result.errors.push(ImportRowError {
                    row,
                    errors: vec![e],
                });
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_db() -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sgm.sqlite");
        db::init_schema(&path).unwrap();
        (dir, path)
    }

    const POCOS_CSV: &str = "\
Código*,Nome*,Código ANP,Tipo*,Polo ID*,Instalação ID*,Campo ID,Status*,Frequência Teste (dias),Observações
POC-001,Poço Produtor 1,ANP-12345,produtor,1,1,1,ativo,90,Poço de alta produção
POC-002,Poço Injetor 1,,injetor,1,1,,ativo,,
POC-003,Poço Observação 1,,observacao,1,2,,inativo,30,
";

    #[test]
    fn imports_every_valid_row() {
        let (_dir, path) = test_db();
        let result = import_rows(&path, EntityType::Pocos, POCOS_CSV.as_bytes(), false).unwrap();
        assert_eq!(result.inserted, 3);
        assert_eq!(result.failed, 0);
        assert!(result.errors.is_empty());
        assert_eq!(result.summary.total, 3);
        assert_eq!(result.summary.valid, 3);
        assert_eq!(result.summary.invalid, 0);
        assert_eq!(db::count_records(&path, EntityType::Pocos).unwrap(), 3);
    }

    #[test]
    fn bad_rows_are_isolated_with_their_spreadsheet_line() {
        let (_dir, path) = test_db();
        let csv = "\
Código*,Nome*,Código ANP,Tipo*,Polo ID*,Instalação ID*,Campo ID,Status*,Frequência Teste (dias),Observações
POC-001,Poço 1,,produtor,1,1,,ativo,,
,Poço 2,,produtor,1,1,,ativo,,
POC-003,Poço 3,,perfurador,1,1,,ativo,,
";
        let result = import_rows(&path, EntityType::Pocos, csv.as_bytes(), false).unwrap();
        assert_eq!(result.inserted, 1);
        assert_eq!(result.failed, 2);
        assert_eq!(result.summary.total, 3);
        assert_eq!(result.summary.valid, 1);
        assert_eq!(result.summary.invalid, 2);

        // The header is spreadsheet line 1, so the second data row is 3.
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].row, 3);
        assert_eq!(
            result.errors[0].errors,
            vec!["Campo obrigatório 'Código*' não preenchido".to_string()]
        );
        assert_eq!(result.errors[1].row, 4);
        assert!(result.errors[1].errors[0].contains("valores aceitos"));
    }

    #[test]
    fn first_data_row_is_reported_as_spreadsheet_line_two() {
        let (_dir, path) = test_db();
        let csv = "\
Código*,Nome*,Tipo*,Polo ID*,Instalação ID*,Status*
,Poço sem código,produtor,1,1,ativo
";
        let result = import_rows(&path, EntityType::Pocos, csv.as_bytes(), false).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].row, 2);
    }

    #[test]
    fn exported_records_reimport_cleanly_into_a_fresh_database() {
        let (_dir, path) = test_db();
        let result = import_rows(&path, EntityType::Pocos, POCOS_CSV.as_bytes(), false).unwrap();
        assert_eq!(result.inserted, 3);

        let records = db::list_records(&path, EntityType::Pocos).unwrap();
        let sheet = crate::services::export::sheet::write_sheet(
            registry::descriptor(EntityType::Pocos),
            &records,
        )
        .unwrap();

        let (_dir2, fresh) = test_db();
        let reimported = import_rows(&fresh, EntityType::Pocos, &sheet, false).unwrap();
        assert_eq!(reimported.inserted, 3);
        assert_eq!(reimported.failed, 0);
        assert!(reimported.errors.is_empty());
        assert_eq!(db::count_records(&fresh, EntityType::Pocos).unwrap(), 3);
    }

    #[test]
    fn validate_only_runs_the_pipeline_without_inserting() {
        let (_dir, path) = test_db();
        let result = import_rows(&path, EntityType::Pocos, POCOS_CSV.as_bytes(), true).unwrap();
        assert_eq!(result.inserted, 0);
        assert_eq!(result.summary.valid, 3);
        assert_eq!(db::count_records(&path, EntityType::Pocos).unwrap(), 0);
    }

    #[test]
    fn reimporting_the_same_file_fails_per_row_on_the_natural_key() {
        let (_dir, path) = test_db();
        import_rows(&path, EntityType::Pocos, POCOS_CSV.as_bytes(), false).unwrap();
        let second = import_rows(&path, EntityType::Pocos, POCOS_CSV.as_bytes(), false).unwrap();

        // Rows are still valid; they fail at insertion, row by row.
        assert_eq!(second.inserted, 0);
        assert_eq!(second.failed, 3);
        assert_eq!(second.summary.valid, 3);
        assert_eq!(second.summary.invalid, 0);
        assert_eq!(second.errors.len(), 3);
        assert!(second.errors[0].errors[0].to_lowercase().contains("unique"));
        assert_eq!(db::count_records(&path, EntityType::Pocos).unwrap(), 3);
    }

    #[test]
    fn header_matching_is_normalized() {
        let (_dir, path) = test_db();
        let csv = "\
código*,NOME*,tipo*,polo id*,instalação  id*,status*
POC-010,Poço 10,produtor,1,1,ativo
";
        let result = import_rows(&path, EntityType::Pocos, csv.as_bytes(), false).unwrap();
        assert_eq!(result.inserted, 1);
    }

    #[test]
    fn empty_file_is_a_file_level_error() {
        let (_dir, path) = test_db();
        let err = import_rows(&path, EntityType::Pocos, b"", false).unwrap_err();
        assert_eq!(err, "Arquivo vazio");
    }

    #[test]
    fn foreign_header_is_a_file_level_error() {
        let (_dir, path) = test_db();
        let err =
            import_rows(&path, EntityType::Pocos, b"a,b,c\n1,2,3\n", false).unwrap_err();
        assert!(err.contains("não corresponde"), "{}", err);
    }

    #[test]
    fn missing_required_column_is_a_file_level_error() {
        let (_dir, path) = test_db();
        let csv = "Código*,Nome*,Tipo*,Polo ID*,Instalação ID*\nPOC-001,P,produtor,1,1\n";
        let err = import_rows(&path, EntityType::Pocos, csv.as_bytes(), false).unwrap_err();
        assert_eq!(err, "Coluna obrigatória 'Status*' ausente");
        assert_eq!(db::count_records(&path, EntityType::Pocos).unwrap(), 0);
    }

    #[test]
    fn partial_failure_keeps_earlier_inserts() {
        let (_dir, path) = test_db();
        let csv = "\
Código*,Nome*,Tipo*,Polo ID*,Instalação ID*,Status*
POC-001,Poço 1,produtor,1,1,ativo
POC-002,Poço 2,produtor,não-numérico,1,ativo
";
        let result = import_rows(&path, EntityType::Pocos, csv.as_bytes(), false).unwrap();
        assert_eq!(result.inserted, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(db::count_records(&path, EntityType::Pocos).unwrap(), 1);
    }
}
