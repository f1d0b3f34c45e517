//! Configuración central del generador.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! El host (sistema de build) entrega aquí las raíces, sufijos, selector de
//! backend, codificación y la asociación tipo→converter que puebla el registry.
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::env;

use gen_core::constants::{DEFAULT_BACKEND, DEFAULT_DEST_SUFFIX, DEFAULT_ENCODING,
                          DEFAULT_SOURCE_SUFFIX};

/// Configuración global del generador (una corrida = una foto de esto).
pub struct GeneratorConfig {
    /// Raíz del árbol de fuentes a escanear.
    pub source_root: String,
    /// Raíz bajo la que se materializan las salidas.
    pub output_root: String,
    /// Sufijo que identifica fuentes (extensión de dos partes por defecto).
    pub source_suffix: String,
    /// Sufijo de los archivos generados.
    pub dest_suffix: String,
    /// Selector de backend de scripting.
    pub backend: String,
    /// Nombre de la codificación de salida.
    pub encoding: String,
    /// Asociación nombre-de-tipo → nombre-de-converter (puebla el registry).
    pub converters: IndexMap<String, String>,
    /// Propiedades expuestas a los scripts como bindings.
    pub properties: serde_json::Value,
}

impl GeneratorConfig {
    /// Lee la configuración del ambiente, con defaults donde aplica.
    /// `GENFLOW_CONVERTERS` y `GENFLOW_PROPERTIES` son objetos JSON.
    pub fn from_env() -> Self {
        let converters = env::var("GENFLOW_CONVERTERS").ok()
            .and_then(|raw| serde_json::from_str::<serde_json::Value>(&raw).ok())
            .and_then(|v| match v {
                serde_json::Value::Object(map) => {
                    Some(map.into_iter()
                            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                            .collect::<IndexMap<String, String>>())
                }
                _ => None,
            })
            .unwrap_or_default();
        let properties = env::var("GENFLOW_PROPERTIES").ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(serde_json::Value::Null);
        GeneratorConfig {
            source_root: env::var("GENFLOW_SOURCE_ROOT").unwrap_or_else(|_| "src/main/generated".into()),
            output_root: env::var("GENFLOW_OUTPUT_ROOT").unwrap_or_else(|_| "target/generated".into()),
            source_suffix: env::var("GENFLOW_SOURCE_SUFFIX").unwrap_or_else(|_| DEFAULT_SOURCE_SUFFIX.into()),
            dest_suffix: env::var("GENFLOW_DEST_SUFFIX").unwrap_or_else(|_| DEFAULT_DEST_SUFFIX.into()),
            backend: env::var("GENFLOW_BACKEND").unwrap_or_else(|_| DEFAULT_BACKEND.into()),
            encoding: env::var("GENFLOW_ENCODING").unwrap_or_else(|_| DEFAULT_ENCODING.into()),
            converters,
            properties,
        }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<GeneratorConfig> = Lazy::new(GeneratorConfig::from_env);
