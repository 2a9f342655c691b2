use crate::registry::TemplateDescriptor;
use serde_json::Value;

/// Writes one CSV sheet: the descriptor's header row, then one row per
/// record projected through the field mapping in descriptor column order.
/// Fields outside the mapping are not emitted; absent cells are empty.
pub fn write_sheet(
    descriptor: &TemplateDescriptor,
    records: &[serde_json::Map<String, Value>],
) -> Result<Vec<u8>, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(descriptor.headers())
        .map_err(|e| e.to_string())?;

    for record in records {
        let row: Vec<String> = descriptor
            .fields
            .iter()
            .map(|f| cell_text(record.get(f.field)))
            .collect();
        writer.write_record(&row).map_err(|e| e.to_string())?;
    }

    writer.into_inner().map_err(|e| e.to_string())
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}
