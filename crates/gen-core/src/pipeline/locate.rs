//! Contrato del localizador de fuentes.

use std::io;
use std::path::Path;

/// Enumera archivos fuente bajo `root` cuyo nombre termina en `suffix`.
///
/// Contrato:
/// - Devuelve rutas relativas a `root`, con `/` como separador.
/// - La secuencia es exhaustiva, finita y está ordenada (determinismo del
///   orden de procesamiento entre corridas).
/// - No es un watch: una corrida ve una foto del árbol.
pub trait SourceLocator {
    fn scan(&self, root: &Path, suffix: &str) -> io::Result<Vec<String>>;
}
