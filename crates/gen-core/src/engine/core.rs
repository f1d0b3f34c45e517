//! Core PipelineEngine implementation

use std::path::PathBuf;

use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::PipelineError;
use crate::event::{EventStore, RunEventKind};
use crate::hashing::{hash_str, hash_value};
use crate::model::{map_destination, RenderedOutput, ScriptSource};
use crate::pipeline::{OutputSink, ScriptBackend, SourceLocator};
use crate::render::{render, ConverterRegistry};
use crate::repo::{RunInstance, RunRepository};
use crate::RunReport;

/// Parámetros de una corrida: raíz de fuentes y sustitución de sufijos.
///
/// El caller garantiza que `source_suffix` es el mismo patrón usado por el
/// scan; el mapeo de destino asume rutas producidas por ese scan.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub source_root: PathBuf,
    pub source_suffix: String,
    pub dest_suffix: String,
}

impl GenerationPlan {
    pub fn new(source_root: impl Into<PathBuf>, source_suffix: &str, dest_suffix: &str) -> Self {
        Self { source_root: source_root.into(),
               source_suffix: source_suffix.to_string(),
               dest_suffix: dest_suffix.to_string() }
    }
}

/// Motor de ejecución del pipeline de generación.
///
/// Responsable de orquestar scan → evaluación → render → escritura en un
/// solo hilo lógico, archivo por archivo en orden de scan, con
/// stop-on-failure y eventos append-only para observabilidad y replay.
pub struct PipelineEngine<E, R>
    where E: EventStore,
          R: RunRepository
{
    event_store: E,
    repository: R,
    registry: ConverterRegistry,
    properties: Value,
    last_run_id: Option<Uuid>,
}

impl PipelineEngine<crate::event::InMemoryEventStore, crate::repo::InMemoryRunRepository> {
    /// Crea un motor con stores en memoria.
    #[inline]
    pub fn in_memory(registry: ConverterRegistry) -> Self {
        Self::new_with_stores(crate::event::InMemoryEventStore::default(),
                              crate::repo::InMemoryRunRepository::new(),
                              registry)
    }
}

impl<E, R> PipelineEngine<E, R>
    where E: EventStore,
          R: RunRepository
{
    /// Crea un motor con los stores proporcionados y un registry ya
    /// construido (inmutable durante toda corrida).
    pub fn new_with_stores(event_store: E, repository: R, registry: ConverterRegistry) -> Self {
        Self { event_store,
               repository,
               registry,
               properties: Value::Null,
               last_run_id: None }
    }

    /// Propiedades de configuración expuestas a los scripts como bindings.
    pub fn set_properties(&mut self, properties: Value) {
        self.properties = properties;
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Id de la última corrida iniciada, si hay alguna.
    pub fn last_run_id(&self) -> Option<Uuid> {
        self.last_run_id
    }

    /// Lista eventos de una corrida específica.
    pub fn events_for(&self, run_id: Uuid) -> Vec<crate::event::RunEvent> {
        self.event_store.list(run_id)
    }

    /// Eventos de la última corrida.
    pub fn events(&self) -> Option<Vec<crate::event::RunEvent>> {
        self.last_run_id.map(|rid| self.event_store.list(rid))
    }

    /// Variante compacta de eventos para la última corrida.
    pub fn event_variants(&self) -> Option<Vec<&'static str>> {
        self.events().map(|events| {
                         events.iter()
                               .map(|e| match e.kind {
                                   RunEventKind::RunInitialized { .. } => "I",
                                   RunEventKind::FileStarted { .. } => "S",
                                   RunEventKind::FileRendered { .. } => "R",
                                   RunEventKind::FileWritten { .. } => "W",
                                   RunEventKind::FileFailed { .. } => "X",
                                   RunEventKind::RunCompleted { .. } => "C",
                               })
                               .collect()
                     })
    }

    /// Reconstruye el estado de una corrida por replay (la lista de rutas es
    /// la misma que produjo el scan de esa corrida).
    pub fn load_instance(&self, run_id: Uuid, paths: &[String]) -> RunInstance {
        let events = self.event_store.list(run_id);
        self.repository.load(run_id, &events, paths)
    }

    /// Ejecuta una corrida completa: scan, y por cada ruta en orden,
    /// evaluar → render → escribir. Primer fallo detiene el resto.
    pub fn run(&mut self,
               plan: &GenerationPlan,
               locator: &dyn SourceLocator,
               backend: &mut dyn ScriptBackend,
               sink: &mut dyn OutputSink)
               -> Result<RunReport, PipelineError> {
        let run_id = Uuid::new_v4();
        self.last_run_id = Some(run_id);

        // Scanning: la foto del árbol de fuentes para toda la corrida.
        let paths = locator.scan(&plan.source_root, &plan.source_suffix)
                           .map_err(|e| PipelineError::Scan { root: plan.source_root.display().to_string(),
                                                              cause: e.to_string() })?;

        let config_hash = self.config_hash(plan, backend.name());
        self.event_store.append_kind(run_id,
                                     RunEventKind::RunInitialized { config_hash: config_hash.clone(),
                                                                    file_count: paths.len() });
        log::info!("corrida {run_id}: {} fuente(s) bajo {}", paths.len(), plan.source_root.display());

        for (index, path) in paths.iter().enumerate() {
            self.process_file(run_id, plan, index, path, backend, sink)?;
        }

        let run_fingerprint = self.complete_run(run_id, &config_hash);
        let instance = self.load_instance(run_id, &paths);
        debug_assert!(instance.completed && instance.cursor == paths.len());
        log::info!("corrida {run_id} completa: fingerprint {run_fingerprint}");
        Ok(RunReport::from_instance(&instance))
    }

    /// Running(i): un archivo de principio a fin.
    fn process_file(&mut self,
                    run_id: Uuid,
                    plan: &GenerationPlan,
                    index: usize,
                    path: &str,
                    backend: &mut dyn ScriptBackend,
                    sink: &mut dyn OutputSink)
                    -> Result<(), PipelineError> {
        self.event_store.append_kind(run_id,
                                     RunEventKind::FileStarted { index, path: path.to_string() });
        log::debug!("[{}] evaluando {}", index, path);

        let source = ScriptSource::new(path,
                                       plan.source_root.join(path),
                                       json!({ "path": path, "properties": self.properties }));

        let value = match backend.evaluate(&source) {
            Ok(v) => v,
            Err(e) => {
                return Err(self.fail_file(run_id, index, path,
                                          PipelineError::Execution { path: path.to_string(),
                                                                     cause: e.to_string() }));
            }
        };

        let rendered = match render(value, &self.registry) {
            Ok(r) => r,
            Err(e) => return Err(self.fail_file(run_id, index, path, PipelineError::from_render(path, e))),
        };

        let destination = map_destination(path, &plan.source_suffix, &plan.dest_suffix);
        let fingerprint = hash_str(&rendered.text);
        self.event_store.append_kind(run_id,
                                     RunEventKind::FileRendered { index,
                                                                  path: path.to_string(),
                                                                  strategy: rendered.strategy.label(),
                                                                  fingerprint: fingerprint.clone() });

        let output = RenderedOutput { destination: destination.clone(),
                                      text: rendered.text,
                                      strategy: rendered.strategy,
                                      fingerprint };
        let bytes = match sink.write(&output) {
            Ok(b) => b,
            Err(e) => {
                return Err(self.fail_file(run_id, index, path,
                                          PipelineError::Write { path: path.to_string(),
                                                                 cause: e.to_string() }));
            }
        };

        self.event_store.append_kind(run_id,
                                     RunEventKind::FileWritten { index,
                                                                 path: path.to_string(),
                                                                 destination,
                                                                 bytes });
        Ok(())
    }

    /// Registra el fallo terminal del archivo y lo devuelve (stop-on-failure).
    fn fail_file(&mut self, run_id: Uuid, index: usize, path: &str, error: PipelineError) -> PipelineError {
        log::error!("[{}] {} falló: {}", index, path, error);
        self.event_store.append_kind(run_id,
                                     RunEventKind::FileFailed { index,
                                                                path: path.to_string(),
                                                                error: error.clone() });
        error
    }

    /// Hash de configuración de la corrida: todo lo que, al cambiar, debe
    /// cambiar el fingerprint aunque las fuentes sean las mismas.
    fn config_hash(&self, plan: &GenerationPlan, backend_name: &str) -> String {
        hash_value(&json!({
            "engine_version": crate::constants::ENGINE_VERSION,
            "source_suffix": plan.source_suffix,
            "dest_suffix": plan.dest_suffix,
            "backend": backend_name,
            "converters": self.registry.names(),
            "properties": self.properties,
        }))
    }

    fn complete_run(&mut self, run_id: Uuid, config_hash: &str) -> String {
        let events = self.event_store.list(run_id);
        let file_fps: Vec<String> = events.iter()
                                          .filter_map(|e| match &e.kind {
                                              RunEventKind::FileRendered { fingerprint, .. } => Some(fingerprint.clone()),
                                              _ => None,
                                          })
                                          .collect();

        let run_fp = hash_value(&json!({
                                   "engine_version": crate::constants::ENGINE_VERSION,
                                   "config_hash": config_hash,
                                   "file_fingerprints": file_fps
                               }));

        self.event_store
            .append_kind(run_id, RunEventKind::RunCompleted { run_fingerprint: run_fp.clone() });
        run_fp
    }
}
