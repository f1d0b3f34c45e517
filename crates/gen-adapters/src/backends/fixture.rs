//! Backend programable para tests y embedding.
//!
//! Mantiene un resultado preparado por ruta relativa (valores construidos a
//! demanda, porque un `ScriptValue` se consume al renderizar) y registra el
//! orden de evaluación, útil para asertar el procesamiento secuencial.

use std::collections::HashMap;

use gen_core::{BackendError, ScriptBackend, ScriptSource};
use gen_domain::{Document, ScriptValue};

type FixtureFn = Box<dyn Fn(&ScriptSource) -> Result<ScriptValue, BackendError> + Send>;

pub struct FixtureBackend {
    results: HashMap<String, FixtureFn>,
    calls: Vec<String>,
}

impl FixtureBackend {
    pub fn new() -> Self {
        Self { results: HashMap::new(), calls: Vec::new() }
    }

    /// Resultado arbitrario construido por closure.
    pub fn with_result<F>(mut self, path: &str, f: F) -> Self
        where F: Fn(&ScriptSource) -> Result<ScriptValue, BackendError> + Send + 'static
    {
        self.results.insert(path.to_string(), Box::new(f));
        self
    }

    /// El script "devuelve" un literal de texto.
    pub fn with_text(self, path: &str, text: &str) -> Self {
        let text = text.to_string();
        self.with_result(path, move |_| Ok(ScriptValue::Text(text.clone())))
    }

    /// El script no produce valor.
    pub fn with_null(self, path: &str) -> Self {
        self.with_result(path, |_| Ok(ScriptValue::Null))
    }

    /// El script produce un documento (el builder se invoca por evaluación).
    pub fn with_document<F>(self, path: &str, build: F) -> Self
        where F: Fn() -> Document + Send + 'static
    {
        self.with_result(path, move |_| Ok(ScriptValue::Document(build())))
    }

    /// El script falla al ejecutar.
    pub fn with_error(self, path: &str, message: &str) -> Self {
        let message = message.to_string();
        self.with_result(path, move |_| Err(BackendError::Eval(message.clone())))
    }

    /// Rutas evaluadas, en orden.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl Default for FixtureBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FixtureBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureBackend")
         .field("results", &self.results.keys().collect::<Vec<_>>())
         .field("calls", &self.calls)
         .finish()
    }
}

impl ScriptBackend for FixtureBackend {
    fn name(&self) -> &str {
        "fixture"
    }

    fn evaluate(&mut self, source: &ScriptSource) -> Result<ScriptValue, BackendError> {
        self.calls.push(source.relative_path.clone());
        match self.results.get(&source.relative_path) {
            Some(f) => f(source),
            None => Err(BackendError::Eval(format!("sin resultado programado para {}",
                                                   source.relative_path))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source(path: &str) -> ScriptSource {
        ScriptSource::new(path, format!("/src/{path}").into(), json!(null))
    }

    #[test]
    fn devuelve_lo_programado_y_registra_llamadas() {
        let mut backend = FixtureBackend::new().with_text("a.xml.kts", "<a/>")
                                               .with_null("b.xml.kts");
        assert!(matches!(backend.evaluate(&source("a.xml.kts")),
                         Ok(ScriptValue::Text(ref s)) if s == "<a/>"));
        assert!(matches!(backend.evaluate(&source("b.xml.kts")), Ok(ScriptValue::Null)));
        assert!(backend.evaluate(&source("zzz.xml.kts")).is_err());
        assert_eq!(backend.calls(), ["a.xml.kts", "b.xml.kts", "zzz.xml.kts"]);
    }
}
