//! Tipos de repositorio: estado reconstruido (`RunInstance`) por replay.
//!
//! El repositorio aplica un replay lineal: consume eventos en orden y
//! actualiza un slot por archivo. No almacena textos renderizados (sólo
//! fingerprints y destinos) para mantener neutralidad.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::event::{RunEvent, RunEventKind};

/// Estado de un archivo dentro de la corrida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Pending,
    Running,
    Written,
    Failed,
}

/// Estado por archivo, reconstruido desde eventos.
#[derive(Debug, Clone)]
pub struct FileSlot {
    pub path: String,
    pub status: FileStatus,
    pub strategy: Option<String>,
    pub fingerprint: Option<String>,
    pub destination: Option<String>,
    pub bytes: Option<u64>,
    pub error: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Estado completo de una corrida.
pub struct RunInstance {
    pub id: Uuid,
    pub files: Vec<FileSlot>,
    /// Índice del primer archivo aún pendiente (== files.len() si terminó).
    pub cursor: usize,
    pub completed: bool,
    pub run_fingerprint: Option<String>,
}

/// Trait para reconstruir (`replay`) el estado de una corrida.
pub trait RunRepository {
    fn load(&self, run_id: Uuid, events: &[RunEvent], paths: &[String]) -> RunInstance;
}

pub struct InMemoryRunRepository;

impl InMemoryRunRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InMemoryRunRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RunRepository for InMemoryRunRepository {
    fn load(&self, run_id: Uuid, events: &[RunEvent], paths: &[String]) -> RunInstance {
        let mut files: Vec<FileSlot> = paths.iter()
                                            .map(|p| FileSlot { path: p.clone(),
                                                                status: FileStatus::Pending,
                                                                strategy: None,
                                                                fingerprint: None,
                                                                destination: None,
                                                                bytes: None,
                                                                error: None,
                                                                started_at: None,
                                                                finished_at: None })
                                            .collect();
        let mut completed = false;
        let mut run_fingerprint = None;
        for ev in events {
            match &ev.kind {
                RunEventKind::RunInitialized { .. } => {}
                RunEventKind::FileStarted { index, .. } => {
                    if let Some(slot) = files.get_mut(*index) {
                        slot.status = FileStatus::Running;
                        slot.started_at = Some(ev.ts);
                    }
                }
                RunEventKind::FileRendered { index, strategy, fingerprint, .. } => {
                    if let Some(slot) = files.get_mut(*index) {
                        slot.strategy = Some(strategy.clone());
                        slot.fingerprint = Some(fingerprint.clone());
                    }
                }
                RunEventKind::FileWritten { index, destination, bytes, .. } => {
                    if let Some(slot) = files.get_mut(*index) {
                        slot.status = FileStatus::Written;
                        slot.destination = Some(destination.clone());
                        slot.bytes = Some(*bytes);
                        slot.finished_at = Some(ev.ts);
                    }
                }
                RunEventKind::FileFailed { index, error, .. } => {
                    if let Some(slot) = files.get_mut(*index) {
                        slot.status = FileStatus::Failed;
                        slot.error = Some(error.to_string());
                        slot.finished_at = Some(ev.ts);
                    }
                }
                RunEventKind::RunCompleted { run_fingerprint: fp } => {
                    completed = true;
                    run_fingerprint = Some(fp.clone());
                }
            }
        }
        let cursor = files.iter()
                          .position(|s| matches!(s.status, FileStatus::Pending))
                          .unwrap_or(files.len());
        RunInstance { id: run_id,
                      files,
                      cursor,
                      completed,
                      run_fingerprint }
    }
}
