//! Contratos de los colaboradores externos del pipeline.
//!
//! El core define los seams y no sus implementaciones (eso vive en
//! `gen-adapters`), igual que `EventStore`/`RunRepository`:
//! - `SourceLocator`: enumeración de fuentes bajo una raíz.
//! - `ScriptBackend`: evaluación de un script a un valor dinámico.
//! - `OutputSink`: materialización del texto renderizado.

pub mod backend;
pub mod locate;
pub mod sink;

pub use backend::{BackendError, ScriptBackend};
pub use locate::SourceLocator;
pub use sink::OutputSink;
