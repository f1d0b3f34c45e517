//! gen-adapters: Implementaciones de los colaboradores del core.
//!
//! Este crate provee:
//! - Localizadores de fuentes (`WalkdirLocator` real, `StaticLocator` para
//!   tests).
//! - Backends de scripting en árbol (`text`, `json`) más el `FixtureBackend`
//!   programable, y su catálogo por nombre.
//! - El catálogo de converters builtin y `build_registry`, que resuelve la
//!   asociación nombre→nombre de la configuración contra converters ya
//!   instanciados (fail-fast, sin reflexión).
//! - El sink de filesystem con codificaciones de texto.
//!
//! Nota: el core sólo conoce los traits `SourceLocator`, `ScriptBackend` y
//! `OutputSink`; todo lo concreto vive aquí.

pub mod backends;
pub mod converters;
pub mod locator;
pub mod writer;

pub use backends::{BackendCatalog, FixtureBackend, JsonBackend, TextBackend};
pub use converters::{build_registry, ConverterCatalog};
pub use locator::{StaticLocator, WalkdirLocator};
pub use writer::{FsOutputSink, MemoryOutputSink, TextEncoding};
