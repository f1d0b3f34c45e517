//! Contrato para converters de valores.
//!
//! Un `Converter` acepta exactamente un tipo de valor en runtime (declarado
//! por `value_type`) y lo convierte a texto. Implementaciones deben ser
//! deterministas y no provocar efectos secundarios; un fallo se reporta como
//! mensaje y el pipeline lo trata como terminal.

use std::any::{Any, TypeId};

/// Trait para converters de valores.
pub trait Converter: Send + Sync {
    /// `TypeId` exacto del tipo que este converter acepta.
    fn value_type(&self) -> TypeId;

    /// Nombre del tipo aceptado (diagnóstico).
    fn value_type_name(&self) -> &'static str;

    /// Convierte el valor a texto. El registry garantiza que `value` es del
    /// tipo `value_type()`; un downcast fallido es error de programación.
    fn convert(&self, value: &dyn Any) -> Result<String, String>;
}
