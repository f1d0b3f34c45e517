//! Catálogo de backends por nombre.
//!
//! Reemplazo del lookup reflexivo del diseño original: los selectores de
//! configuración se resuelven contra factorías explícitas, y un nombre
//! desconocido falla antes de procesar archivo alguno.

use indexmap::IndexMap;

use gen_core::{PipelineError, ScriptBackend};

type BackendFactory = Box<dyn Fn() -> Box<dyn ScriptBackend>>;

pub struct BackendCatalog {
    factories: IndexMap<String, BackendFactory>,
}

impl BackendCatalog {
    pub fn empty() -> Self {
        Self { factories: IndexMap::new() }
    }

    /// Catálogo con los backends en árbol (`text`, `json`).
    pub fn with_builtins() -> Self {
        let mut catalog = Self::empty();
        catalog.register("text", || Box::new(super::TextBackend));
        catalog.register("json", || Box::new(super::JsonBackend));
        catalog
    }

    /// Registra (o reemplaza) una factoría bajo un selector.
    pub fn register<F>(&mut self, name: &str, factory: F)
        where F: Fn() -> Box<dyn ScriptBackend> + 'static
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Instancia el backend seleccionado; una instancia por corrida.
    pub fn create(&self, name: &str) -> Result<Box<dyn ScriptBackend>, PipelineError> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(PipelineError::Configuration(format!(
                "backend desconocido: {name:?} (disponibles: {})",
                self.names().join(", ")
            ))),
        }
    }

    /// Selectores registrados, en orden de inserción.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl Default for BackendCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}
