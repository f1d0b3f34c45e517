//! Sink de salida: materialización del texto renderizado.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use gen_core::{OutputSink, PipelineError, RenderedOutput};

/// Codificación del texto de salida.
///
/// El nombre llega de configuración y se valida antes de procesar archivo
/// alguno (un nombre desconocido es error de configuración, no de
/// escritura). Las variantes UTF-16 emiten BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    pub fn from_name(name: &str) -> Result<Self, PipelineError> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16le" | "utf16le" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(TextEncoding::Utf16Be),
            other => Err(PipelineError::Configuration(format!("codificación desconocida: {other:?}"))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
        }
    }

    /// Codifica el texto completo a bytes.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Utf16Le => {
                let mut bytes = vec![0xFF, 0xFE];
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&unit.to_le_bytes());
                }
                bytes
            }
            TextEncoding::Utf16Be => {
                let mut bytes = vec![0xFE, 0xFF];
                for unit in text.encode_utf16() {
                    bytes.extend_from_slice(&unit.to_be_bytes());
                }
                bytes
            }
        }
    }
}

/// Sink real: escribe bajo `output_root` creando padres idempotentemente.
///
/// Sin limpieza de escrituras parciales (limitación aceptada del diseño):
/// un fallo de IO puede dejar un archivo truncado.
pub struct FsOutputSink {
    output_root: PathBuf,
    encoding: TextEncoding,
}

impl FsOutputSink {
    pub fn new(output_root: impl Into<PathBuf>, encoding: TextEncoding) -> Self {
        Self { output_root: output_root.into(), encoding }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }
}

impl OutputSink for FsOutputSink {
    fn write(&mut self, output: &RenderedOutput) -> io::Result<u64> {
        let dest = self.output_root.join(&output.destination);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = self.encoding.encode(&output.text);
        fs::write(&dest, &bytes)?;
        log::debug!("escrito {} ({} bytes, {})", dest.display(), bytes.len(), self.encoding.name());
        Ok(bytes.len() as u64)
    }
}

/// Sink en memoria para tests: destino → texto.
#[derive(Default)]
pub struct MemoryOutputSink {
    pub written: HashMap<String, String>,
}

impl MemoryOutputSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for MemoryOutputSink {
    fn write(&mut self, output: &RenderedOutput) -> io::Result<u64> {
        self.written.insert(output.destination.clone(), output.text.clone());
        Ok(output.text.len() as u64)
    }
}
