//! Constantes del motor core.
//!
//! Valores estáticos que participan en el cálculo de fingerprints. Un cambio
//! de versión del motor invalida determinísticamente los fingerprints de
//! corrida aunque la configuración y las fuentes no cambien.

/// Versión lógica del motor. Se incluye en el hash de configuración y en el
/// fingerprint de corrida. Mantener estable mientras no haya cambios
/// incompatibles de comportamiento observable.
pub const ENGINE_VERSION: &str = "G1.0";

/// Sufijo de fuente por defecto (extensión de dos partes).
pub const DEFAULT_SOURCE_SUFFIX: &str = ".xml.kts";
/// Sufijo de destino por defecto.
pub const DEFAULT_DEST_SUFFIX: &str = ".xml";
/// Selector de backend por defecto.
pub const DEFAULT_BACKEND: &str = "text";
/// Codificación de salida por defecto.
pub const DEFAULT_ENCODING: &str = "utf-8";
