//! gen-domain: Modelo de dominio del generador.
//!
//! Este crate define los valores con los que trabaja el pipeline:
//! - `ScriptValue`: el resultado dinámico de evaluar un script (una variante
//!   por estrategia de render del core).
//! - `Document`/`Element`/`Node`: documento de marcado estructurado con
//!   serialización determinista y parser de ida y vuelta.
//! - `DomainError`: errores de validación/parseo propios del dominio.
//!
//! No contiene lógica de pipeline ni IO; eso vive en `gen-core` y
//! `gen-adapters`.

pub mod document;
pub mod errors;
pub mod markup_parser;
pub mod value;

pub use document::{Document, Element, Node};
pub use errors::DomainError;
pub use markup_parser::parse_document;
pub use value::{DynValue, ScriptValue};
