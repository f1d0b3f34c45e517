//! Backend identidad: el archivo fuente ya contiene el texto final.

use std::fs;

use gen_core::{BackendError, ScriptBackend, ScriptSource};
use gen_domain::ScriptValue;

/// El "script" es el propio contenido; evaluar es leerlo. Es el camino
/// rápido para plantillas estáticas y el backend por defecto.
#[derive(Debug)]
pub struct TextBackend;

impl ScriptBackend for TextBackend {
    fn name(&self) -> &str {
        "text"
    }

    fn evaluate(&mut self, source: &ScriptSource) -> Result<ScriptValue, BackendError> {
        let content = fs::read_to_string(&source.absolute_path)?;
        Ok(ScriptValue::Text(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lee_el_contenido_tal_cual() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("f.xml.kts");
        std::fs::write(&path, "<root/>").unwrap();
        let source = ScriptSource::new("f.xml.kts", path, json!(null));
        let value = TextBackend.evaluate(&source).expect("eval");
        assert!(matches!(value, ScriptValue::Text(ref s) if s == "<root/>"));
    }

    #[test]
    fn archivo_inexistente_es_error_de_io() {
        let source = ScriptSource::new("no.xml.kts", "/inexistente/no.xml.kts".into(), json!(null));
        assert!(matches!(TextBackend.evaluate(&source), Err(BackendError::Io(_))));
    }
}
