//! Catálogo de converters y construcción del registry desde configuración.
//!
//! La configuración entrega pares nombre-de-tipo → nombre-de-converter. El
//! diseño original los resolvía por reflexión al primer uso; aquí el
//! catálogo contiene converters ya instanciados (construcción eager) y la
//! resolución completa ocurre al armar el registry, antes de procesar
//! archivo alguno. Todo nombre que no resuelve es `Configuration`.

use std::sync::Arc;

use indexmap::IndexMap;

use gen_core::render::Converter;
use gen_core::{ConverterRegistry, PipelineError};

use super::{JsonCompactConverter, JsonPrettyConverter};

/// Catálogo nombre → converter instanciado.
pub struct ConverterCatalog {
    entries: IndexMap<String, Arc<dyn Converter>>,
}

impl ConverterCatalog {
    pub fn empty() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Catálogo con los builtin (`json-pretty`, `json-compact`).
    pub fn with_builtins() -> Self {
        let mut catalog = Self::empty();
        catalog.register("json-pretty", JsonPrettyConverter::new());
        catalog.register("json-compact", JsonCompactConverter::new());
        catalog
    }

    /// Registra (o reemplaza) un converter bajo un nombre de catálogo.
    pub fn register<C>(&mut self, name: &str, converter: C)
        where C: Converter + 'static
    {
        self.entries.insert(name.to_string(), Arc::new(converter));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Converter>> {
        self.entries.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl Default for ConverterCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// ¿El nombre de tipo configurado nombra al tipo real del converter?
///
/// Acepta el nombre completo o un sufijo de ruta (`Value` y
/// `serde_json::value::Value` nombran lo mismo); así la configuración no
/// depende de la forma exacta que produce `std::any::type_name`.
fn type_name_matches(configured: &str, actual: &str) -> bool {
    actual == configured || actual.ends_with(&format!("::{configured}"))
}

/// Construye el registry resolviendo la asociación de configuración contra
/// el catálogo. Fail-fast: converter desconocido, tipo que no coincide con
/// el que el converter declara, o tipo duplicado, abortan aquí.
pub fn build_registry(mapping: &IndexMap<String, String>,
                      catalog: &ConverterCatalog)
                      -> Result<ConverterRegistry, PipelineError> {
    let mut builder = ConverterRegistry::builder();
    for (type_name, converter_name) in mapping {
        let converter = catalog.get(converter_name)
                               .ok_or_else(|| PipelineError::Configuration(format!(
                                   "converter desconocido: {converter_name:?} (disponibles: {})",
                                   catalog.names().join(", ")
                               )))?;
        if !type_name_matches(type_name, converter.value_type_name()) {
            return Err(PipelineError::Configuration(format!(
                "el converter {:?} acepta {} pero la configuración lo asocia a {:?}",
                converter_name,
                converter.value_type_name(),
                type_name
            )));
        }
        builder = builder.register_arc(converter_name, converter)?;
    }
    Ok(builder.build())
}
