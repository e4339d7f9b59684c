pub mod annotation;
pub mod import;

pub use annotation::parse_import;
pub use import::ParsedImport;
