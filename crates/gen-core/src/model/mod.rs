//! Tipos neutrales del pipeline: fuente localizada y salida renderizada.

pub mod output;
pub mod source;

pub use output::{map_destination, RenderStrategy, RenderedOutput};
pub use source::ScriptSource;
