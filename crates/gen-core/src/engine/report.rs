//! Reporte de una corrida exitosa.

use uuid::Uuid;

use crate::repo::{FileStatus, RunInstance};

/// Un archivo materializado: ruta fuente, destino y testigos de contenido.
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: String,
    pub destination: String,
    pub strategy: String,
    pub fingerprint: String,
    pub bytes: u64,
}

/// Resultado de una corrida completa (sólo existe si todo archivo escribió).
///
/// No hay reporte parcial de éxito/fallo: una corrida fallida surge como
/// `PipelineError` y lo ya escrito queda únicamente visible en disco.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub run_fingerprint: String,
    pub files: Vec<WrittenFile>,
}

impl RunReport {
    /// Construye el reporte desde el estado replayado de la corrida.
    pub(crate) fn from_instance(instance: &RunInstance) -> Self {
        let files = instance.files
                            .iter()
                            .filter(|slot| slot.status == FileStatus::Written)
                            .map(|slot| WrittenFile { path: slot.path.clone(),
                                                      destination: slot.destination.clone().unwrap_or_default(),
                                                      strategy: slot.strategy.clone().unwrap_or_default(),
                                                      fingerprint: slot.fingerprint.clone().unwrap_or_default(),
                                                      bytes: slot.bytes.unwrap_or(0) })
                            .collect();
        Self { run_id: instance.id,
               run_fingerprint: instance.run_fingerprint.clone().unwrap_or_default(),
               files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
