//! Salida renderizada y mapeo de destino.

use serde::{Deserialize, Serialize};

/// Estrategia que resolvió el valor a texto (para eventos y trazas).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStrategy {
    /// El script ya produjo texto; se usa sin cambios.
    Identity,
    /// Documento de marcado serializado por el core.
    DocumentSerialization,
    /// Converter registrado, identificado por su nombre de catálogo.
    Converter(String),
}

impl RenderStrategy {
    pub fn label(&self) -> String {
        match self {
            RenderStrategy::Identity => "identity".to_string(),
            RenderStrategy::DocumentSerialization => "document".to_string(),
            RenderStrategy::Converter(name) => format!("converter:{name}"),
        }
    }
}

/// Texto final + destino, producido por el renderer y consumido exactamente
/// una vez por el sink. `fingerprint` es el hash del texto (testigo de
/// idempotencia entre corridas).
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub destination: String, // ruta relativa con sufijo de destino ya aplicado
    pub text: String,
    pub strategy: RenderStrategy,
    pub fingerprint: String,
}

/// Calcula la ruta de destino sustituyendo el sufijo fuente por el de
/// destino al final de la ruta relativa.
///
/// Precondición del caller: `relative_path` termina en `source_suffix`
/// (garantizado por un scan con ese sufijo). Si no, el comportamiento
/// definido aquí es conservador: la ruta se devuelve sin cambios.
pub fn map_destination(relative_path: &str, source_suffix: &str, dest_suffix: &str) -> String {
    match relative_path.strip_suffix(source_suffix) {
        Some(stem) => format!("{stem}{dest_suffix}"),
        None => relative_path.to_string(),
    }
}
