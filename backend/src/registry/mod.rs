//! Template registry: the single source of truth mapping an entity type to
//! the tabular column layout used for template download, export and import
//! parsing.
//!
//! Each importable entity type has one `TemplateDescriptor` listing its
//! columns in order. Export writes the headers in descriptor order; import
//! matches uploaded header cells back to field names with a normalized
//! (case/whitespace-insensitive) comparison. Fields outside the descriptor
//! are simply not import/export-eligible; audit and computed columns are
//! excluded on purpose.

mod defs;

use common::model::entity::EntityType;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// How the cells of one column are validated on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Whole number, used for referential ids (`Polo ID`) and day counts.
    Integer,
    /// Decimal number (diameters, ranges, concentrations).
    Number,
    /// ISO date, `AAAA-MM-DD`.
    Date,
    /// Closed vocabulary; the cell must equal one of the listed values.
    Options(&'static [&'static str]),
}

/// One column of a template: header text as shown in the file, the internal
/// field name it maps to, and its validation rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub header: &'static str,
    pub field: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Column layout for one importable/exportable entity type.
#[derive(Debug, Clone)]
pub struct TemplateDescriptor {
    pub entity: EntityType,
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
    /// Field names carrying a UNIQUE constraint in storage (natural keys).
    pub unique: &'static [&'static str],
}

impl TemplateDescriptor {
    /// Headers in descriptor order, as written to template and export files.
    pub fn headers(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.header).collect()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.field == name)
    }

    /// Finds the column spec for an uploaded header cell.
    pub fn match_header(&self, cell: &str) -> Option<&FieldSpec> {
        let wanted = normalize_header(cell);
        self.fields
            .iter()
            .find(|f| normalize_header(f.header) == wanted)
    }
}

impl FieldSpec {
    /// Checks one non-empty cell against this column's kind. Returns the
    /// user-facing error, or `None` if the value is acceptable.
    pub fn check_value(&self, value: &str) -> Option<String> {
        match self.kind {
            FieldKind::Text => None,
            FieldKind::Integer => {
                if value.parse::<i64>().is_ok() {
                    None
                } else {
                    Some(format!(
                        "Valor inválido para '{}': esperado número inteiro",
                        self.header
                    ))
                }
            }
            FieldKind::Number => {
                if value.parse::<f64>().is_ok() {
                    None
                } else {
                    Some(format!(
                        "Valor inválido para '{}': esperado número",
                        self.header
                    ))
                }
            }
            FieldKind::Date => {
                if date_regex().is_match(value) {
                    None
                } else {
                    Some(format!(
                        "Valor inválido para '{}': esperado data AAAA-MM-DD",
                        self.header
                    ))
                }
            }
            FieldKind::Options(options) => {
                if options.iter().any(|o| *o == value) {
                    None
                } else {
                    Some(format!(
                        "Valor inválido para '{}': valores aceitos: {}",
                        self.header,
                        options.join(", ")
                    ))
                }
            }
        }
    }
}

fn date_regex() -> &'static Regex {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    DATE_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex"))
}

/// Validates one record (field name → cell text) against a descriptor.
/// Returns every violation, in descriptor column order: required columns
/// left empty, then per-kind format checks on the filled cells.
pub fn validate_record(
    descriptor: &TemplateDescriptor,
    fields: &BTreeMap<String, String>,
) -> Vec<String> {
    let mut errors = Vec::new();
    for f in &descriptor.fields {
        let value = fields.get(f.field).map(|v| v.trim()).unwrap_or("");
        if value.is_empty() {
            if f.required {
                errors.push(format!("Campo obrigatório '{}' não preenchido", f.header));
            }
            continue;
        }
        if let Some(err) = f.check_value(value) {
            errors.push(err);
        }
    }
    errors
}

/// Header comparison key: trimmed, lowercased, internal whitespace collapsed.
pub fn normalize_header(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn registry() -> &'static HashMap<EntityType, TemplateDescriptor> {
    static REGISTRY: OnceLock<HashMap<EntityType, TemplateDescriptor>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        defs::all()
            .into_iter()
            .map(|d| (d.entity, d))
            .collect()
    })
}

/// Returns the descriptor for an entity type. Every `EntityType` variant is
/// registered; unknown type strings are rejected earlier, when the URL path
/// segment is parsed.
pub fn descriptor(entity: EntityType) -> &'static TemplateDescriptor {
    registry()
        .get(&entity)
        .unwrap_or_else(|| panic!("no descriptor registered for {}", entity))
}
