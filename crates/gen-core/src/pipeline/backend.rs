//! Contrato del backend de scripting.

use thiserror::Error;

use gen_domain::ScriptValue;

use crate::model::ScriptSource;

/// Fallo del backend al parsear o ejecutar un script.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse: {0}")]
    Parse(String),
    #[error("eval: {0}")]
    Eval(String),
}

/// Backend de ejecución de scripts.
///
/// Una instancia se crea al inicio de la corrida y se reutiliza para todos
/// los archivos (amortiza el arranque y serializa el estado compartido del
/// motor de scripting: `&mut self` hace imposible la evaluación
/// concurrente). Sin retry: un script que falla aborta su archivo.
pub trait ScriptBackend: std::fmt::Debug {
    /// Nombre estable del backend (selector de configuración).
    fn name(&self) -> &str;

    /// Evalúa la fuente y devuelve su valor dinámico. Efectos secundarios
    /// del script quedan fuera del control del pipeline.
    fn evaluate(&mut self, source: &ScriptSource) -> Result<ScriptValue, BackendError>;
}
