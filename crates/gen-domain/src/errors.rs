// errors.rs
use thiserror::Error;

/// Error del dominio del generador.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    Validation(String),

    #[error("Error de parseo de marcado (offset {offset}): {message}")]
    Markup { offset: usize, message: String },

    #[error("Error de serialización: {0}")]
    Serialization(String),
}

// Conversión desde serde_json::Error (valores JSON embebidos en scripts).
impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Serialization(e.to_string())
    }
}
