use serde::{Deserialize, Serialize};

/// The failure record for a single spreadsheet row.
///
/// `row` is the spreadsheet line number of the failing row, counting the
/// header as line 1, so the first data row is `2` and the number matches
/// the one the operator sees in their spreadsheet program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRowError {
    pub row: usize,
    pub errors: Vec<String>,
}

/// Row counters for one import call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Aggregate outcome of one import call.
///
/// Partial failure is a normal outcome: rows that could not be validated or
/// inserted are listed in `errors`, rows before and after them are unaffected.
/// The operation is not transactional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub inserted: usize,
    pub failed: usize,
    pub errors: Vec<ImportRowError>,
    pub summary: ImportSummary,
}

impl ImportResult {
    pub fn empty() -> Self {
        ImportResult {
            inserted: 0,
            failed: 0,
            errors: Vec::new(),
            summary: ImportSummary {
                total: 0,
                valid: 0,
                invalid: 0,
            },
        }
    }
}
