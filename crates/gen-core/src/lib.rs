//! gen-core: Motor del generador de archivos por scripts.
//!
//! Orquesta el pipeline descubrir → evaluar → render → escribir en un solo
//! hilo lógico, con eventos append-only y stop-on-failure. El núcleo real es
//! `render`: la cascada que decide cómo volver texto el valor dinámico de un
//! script (ver `render/mod.rs`).

pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod repo;

pub use engine::{GenerationPlan, PipelineEngine, RunReport, WrittenFile};
pub use errors::PipelineError;
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use model::{map_destination, RenderStrategy, RenderedOutput, ScriptSource};
pub use pipeline::{BackendError, OutputSink, ScriptBackend, SourceLocator};
pub use render::{render, Converter, ConverterRegistry, RenderError, Rendered};
pub use repo::{FileStatus, InMemoryRunRepository, RunInstance, RunRepository};
