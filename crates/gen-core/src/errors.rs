//! Errores del core del generador.
//!
//! Dos niveles, por diseño:
//! - `RenderError`: fallo local del renderer, sin conocer la ruta fuente.
//! - `PipelineError`: fallo de corrida; siempre lleva la ruta ofensora y es
//!   terminal (stop-on-failure, sin recuperación local).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::RenderError;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum PipelineError {
    #[error("scan failed under {root}: {cause}")] Scan { root: String, cause: String },
    #[error("script execution failed for {path}: {cause}")] Execution { path: String, cause: String },
    #[error("script returned no result: {path}")] NullResult { path: String },
    #[error("no converter for result type {actual_type} ({path})")] Unrenderable { path: String, actual_type: String },
    #[error("converter {name} failed for {path}: {cause}")] Converter { path: String, name: String, cause: String },
    #[error("write failed for {path}: {cause}")] Write { path: String, cause: String },
    #[error("configuration: {0}")] Configuration(String),
}

impl PipelineError {
    /// Envuelve un error de render con la ruta fuente que lo produjo.
    pub fn from_render(path: &str, err: RenderError) -> Self {
        match err {
            RenderError::NullResult => PipelineError::NullResult { path: path.to_string() },
            RenderError::Unrenderable { actual_type } => {
                PipelineError::Unrenderable { path: path.to_string(), actual_type }
            }
            RenderError::Converter { name, cause } => {
                PipelineError::Converter { path: path.to_string(), name, cause }
            }
        }
    }

    /// Ruta fuente ofensora, si el error está ligado a un archivo.
    pub fn source_path(&self) -> Option<&str> {
        match self {
            PipelineError::Execution { path, .. }
            | PipelineError::NullResult { path }
            | PipelineError::Unrenderable { path, .. }
            | PipelineError::Converter { path, .. }
            | PipelineError::Write { path, .. } => Some(path),
            PipelineError::Scan { .. } | PipelineError::Configuration(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_render_preserva_taxonomia() {
        let e = PipelineError::from_render("a/b.xml.kts", RenderError::NullResult);
        assert_eq!(e, PipelineError::NullResult { path: "a/b.xml.kts".into() });
        assert_eq!(e.source_path(), Some("a/b.xml.kts"));

        let e = PipelineError::from_render("x", RenderError::Unrenderable { actual_type: "u32".into() });
        assert!(matches!(e, PipelineError::Unrenderable { ref actual_type, .. } if actual_type == "u32"));
    }

    #[test]
    fn configuration_no_tiene_ruta() {
        assert_eq!(PipelineError::Configuration("x".into()).source_path(), None);
    }
}
