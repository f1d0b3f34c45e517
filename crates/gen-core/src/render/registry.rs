//! Registry inmutable de converters.
//!
//! Rol en el flujo:
//! - Se construye una sola vez por corrida, antes de procesar archivo alguno
//!   (la resolución de nombres de configuración vive en `gen-adapters`;
//!   aquí sólo llegan converters ya instanciados).
//! - Claves por `TypeId` exacto del valor; un tipo admite a lo sumo un
//!   converter y el duplicado es error de configuración (fail-fast).
//! - `IndexMap` mantiene el orden de inserción para que listados y
//!   diagnósticos sean estables entre corridas.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::Converter;
use crate::errors::PipelineError;

/// Entrada registrada: nombre de catálogo + converter instanciado.
#[derive(Clone)]
pub struct RegisteredConverter {
    pub name: String,
    pub converter: Arc<dyn Converter>,
}

/// Tabla tipo→converter, inmutable tras `build()`.
#[derive(Clone, Default)]
pub struct ConverterRegistry {
    entries: IndexMap<TypeId, RegisteredConverter>,
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry").field("names", &self.names()).finish()
    }
}

impl ConverterRegistry {
    /// Registry vacío (válido: las estrategias 1–3 no lo consultan).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ConverterRegistryBuilder {
        ConverterRegistryBuilder { entries: IndexMap::new() }
    }

    /// Lookup exacto por tipo en runtime. O(1), determinista.
    pub fn lookup(&self, type_id: TypeId) -> Option<&RegisteredConverter> {
        self.entries.get(&type_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nombres registrados, en orden de inserción (entra al hash de config).
    pub fn names(&self) -> Vec<&str> {
        self.entries.values().map(|e| e.name.as_str()).collect()
    }
}

pub struct ConverterRegistryBuilder {
    entries: IndexMap<TypeId, RegisteredConverter>,
}

impl fmt::Debug for ConverterRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.entries.values().map(|e| e.name.as_str()).collect();
        f.debug_struct("ConverterRegistryBuilder").field("names", &names).finish()
    }
}

impl ConverterRegistryBuilder {
    /// Registra un converter bajo un nombre de catálogo.
    ///
    /// Falla con `Configuration` si el tipo ya tiene converter: el registro
    /// por tipo exacto no admite ambigüedad (a diferencia del barrido
    /// primera-coincidencia que este diseño reemplaza).
    pub fn register<C>(mut self, name: &str, converter: C) -> Result<Self, PipelineError>
        where C: Converter + 'static
    {
        let type_id = converter.value_type();
        if let Some(previous) = self.entries.get(&type_id) {
            return Err(PipelineError::Configuration(format!(
                "tipo {} ya registrado por el converter {:?} (intento: {:?})",
                converter.value_type_name(),
                previous.name,
                name
            )));
        }
        self.entries.insert(type_id,
                            RegisteredConverter { name: name.to_string(),
                                                  converter: Arc::new(converter) });
        Ok(self)
    }

    /// Variante para converters ya compartidos (catálogos).
    pub fn register_arc(mut self, name: &str, converter: Arc<dyn Converter>) -> Result<Self, PipelineError> {
        let type_id = converter.value_type();
        if let Some(previous) = self.entries.get(&type_id) {
            return Err(PipelineError::Configuration(format!(
                "tipo {} ya registrado por el converter {:?} (intento: {:?})",
                converter.value_type_name(),
                previous.name,
                name
            )));
        }
        self.entries.insert(type_id,
                            RegisteredConverter { name: name.to_string(), converter });
        Ok(self)
    }

    pub fn build(self) -> ConverterRegistry {
        ConverterRegistry { entries: self.entries }
    }
}
