use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{RunEvent, RunEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo
    /// (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: RunEventKind) -> RunEvent;
    /// Lista eventos de una corrida (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<RunEvent>;
}

#[derive(Default)]
pub struct InMemoryEventStore {
    pub inner: HashMap<Uuid, Vec<RunEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, run_id: Uuid, kind: RunEventKind) -> RunEvent {
        let vec = self.inner.entry(run_id).or_default();
        let seq = vec.len() as u64;
        let ev = RunEvent { seq, run_id, kind, ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<RunEvent> {
        self.inner.get(&run_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_incremental_por_corrida() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let e0 = store.append_kind(a, RunEventKind::RunInitialized { config_hash: "h".into(), file_count: 0 });
        let e1 = store.append_kind(a, RunEventKind::RunCompleted { run_fingerprint: "f".into() });
        let e2 = store.append_kind(b, RunEventKind::RunInitialized { config_hash: "h".into(), file_count: 0 });
        assert_eq!((e0.seq, e1.seq, e2.seq), (0, 1, 0));
        assert_eq!(store.list(a).len(), 2);
        assert_eq!(store.list(b).len(), 1);
        assert!(store.list(Uuid::new_v4()).is_empty());
    }
}
