//! Contrato del sink de salida.

use std::io;

use crate::model::RenderedOutput;

/// Materializa una salida renderizada en su destino.
///
/// Contrato:
/// - Crea directorios padre de forma idempotente.
/// - Escribe el texto completo antes de retornar; devuelve los bytes
///   escritos.
/// - Sin limpieza de escrituras parciales: un fallo puede dejar un archivo
///   truncado (limitación aceptada).
pub trait OutputSink {
    fn write(&mut self, output: &RenderedOutput) -> io::Result<u64>;
}
