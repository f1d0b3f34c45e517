//! Tipos de evento de una corrida y estructura `RunEvent`.
//!
//! Rol en el flujo:
//! - Cada corrida del `PipelineEngine` emite eventos a un `EventStore`
//!   append-only.
//! - Los eventos permiten reconstruir el estado de la corrida (replay) sin
//!   depender de estructuras mutables, y hacen observable la máquina de
//!   estados Idle → Scanning → Running(i) → Done | Failed.
//! - El enum `RunEventKind` es el contrato observable y estable del motor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PipelineError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Emisión inicial: fija el hash de configuración y cuántos archivos
    /// encontró el scan. Invariante: primer evento de todo `run_id`.
    RunInitialized { config_hash: String, file_count: usize },
    /// Un archivo comenzó a procesarse. No implica éxito.
    FileStarted { index: usize, path: String },
    /// El valor del script se resolvió a texto, con estrategia y fingerprint
    /// del contenido (testigo de idempotencia).
    FileRendered {
        index: usize,
        path: String,
        strategy: String,
        fingerprint: String,
    },
    /// El texto quedó materializado en su destino.
    FileWritten {
        index: usize,
        path: String,
        destination: String,
        bytes: u64,
    },
    /// Un archivo terminó con error terminal. La corrida no continúa
    /// (stop-on-failure).
    FileFailed {
        index: usize,
        path: String,
        error: PipelineError,
    },
    /// Evento de cierre con fingerprint agregado de la corrida (hash de los
    /// fingerprints ordenados de archivos escritos + hash de configuración).
    RunCompleted { run_fingerprint: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprint)
}
