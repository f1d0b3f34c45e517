//! Fuente de script localizada.

use std::path::PathBuf;

use serde_json::Value;

/// Una fuente descubierta por el locator, lista para evaluar.
///
/// `relative_path` usa siempre `/` como separador (es la clave estable para
/// eventos, errores y mapeo de destino); `absolute_path` es la resolución
/// contra la raíz de fuentes para backends que leen del filesystem.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    pub relative_path: String,
    pub absolute_path: PathBuf,
    /// Bindings visibles para el script: ruta actual + propiedades de
    /// configuración. Los backends deciden cómo exponerlos.
    pub bindings: Value,
}

impl ScriptSource {
    pub fn new(relative_path: &str, absolute_path: PathBuf, bindings: Value) -> Self {
        Self { relative_path: relative_path.to_string(),
               absolute_path,
               bindings }
    }
}
