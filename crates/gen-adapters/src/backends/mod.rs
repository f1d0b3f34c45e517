//! Backends de scripting en árbol y su catálogo.
//!
//! El backend "real" de la instalación (un motor de scripting embebido) se
//! conecta implementando `gen_core::ScriptBackend`; aquí viven los backends
//! que el repo trae consigo:
//! - `text`: el contenido del archivo ya es el texto resultante.
//! - `json`: el archivo parsea como JSON y el valor pasa como objeto (lo
//!   resuelve un converter registrado).
//! - `FixtureBackend`: resultados programados por ruta, para tests y
//!   embedding.

pub mod catalog;
pub mod fixture;
pub mod json;
pub mod text;

pub use catalog::BackendCatalog;
pub use fixture::FixtureBackend;
pub use json::JsonBackend;
pub use text::TextBackend;
