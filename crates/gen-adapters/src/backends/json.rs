//! Backend JSON: el archivo parsea como JSON y el valor resultante viaja
//! como objeto dinámico (requiere un converter registrado para
//! `serde_json::Value`, p.ej. `json-pretty`).

use std::fs;

use gen_core::{BackendError, ScriptBackend, ScriptSource};
use gen_domain::ScriptValue;

#[derive(Debug)]
pub struct JsonBackend;

impl ScriptBackend for JsonBackend {
    fn name(&self) -> &str {
        "json"
    }

    fn evaluate(&mut self, source: &ScriptSource) -> Result<ScriptValue, BackendError> {
        let content = fs::read_to_string(&source.absolute_path)?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| BackendError::Parse(e.to_string()))?;
        Ok(ScriptValue::object(value))
    }
}
