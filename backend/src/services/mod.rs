pub mod export;
pub mod import;
pub mod records;
pub mod templates;
