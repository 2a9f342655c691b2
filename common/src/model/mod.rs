pub mod entity;
pub mod import;
