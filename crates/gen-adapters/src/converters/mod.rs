//! Converters builtin y resolución de la configuración.

pub mod builtin;
pub mod catalog;

pub use builtin::{JsonCompactConverter, JsonPrettyConverter};
pub use catalog::{build_registry, ConverterCatalog};
