//! Valor dinámico producido por la evaluación de un script.
//!
//! `ScriptValue` es la variante etiquetada que el renderer del core resuelve
//! en orden estricto: nulo, texto, documento, objeto registrado. Un valor se
//! construye una vez y lo consume exactamente una llamada de render; no hay
//! mutación ni persistencia.

use std::any::{Any, TypeId};
use std::fmt;

use crate::document::Document;

/// Carga type-erased para objetos de dominio arbitrarios.
///
/// Conserva el nombre del tipo en tiempo de ejecución para diagnósticos:
/// cuando ningún converter aplica, el error debe nombrar el tipo real.
pub struct DynValue {
    inner: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl DynValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self { inner: Box::new(value),
               type_name: std::any::type_name::<T>() }
    }

    /// `TypeId` del valor contenido (clave exacta del registry).
    pub fn type_id(&self) -> TypeId {
        self.inner.as_ref().type_id()
    }

    /// Nombre del tipo contenido, para mensajes de error.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    pub fn as_any(&self) -> &dyn Any {
        self.inner.as_ref()
    }
}

impl fmt::Debug for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynValue").field("type_name", &self.type_name).finish()
    }
}

/// Resultado dinámico de un script.
#[derive(Debug)]
pub enum ScriptValue {
    /// Ausencia de valor. Siempre es un error de render.
    Null,
    /// Texto ya ensamblado (camino rápido de identidad).
    Text(String),
    /// Documento de marcado a serializar.
    Document(Document),
    /// Objeto de dominio arbitrario; requiere converter registrado.
    Object(DynValue),
}

impl ScriptValue {
    /// Envuelve un objeto de dominio arbitrario.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        ScriptValue::Object(DynValue::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScriptValue::Null)
    }

    /// Etiqueta del tipo en runtime, para eventos y errores.
    pub fn type_label(&self) -> &str {
        match self {
            ScriptValue::Null => "null",
            ScriptValue::Text(_) => "text",
            ScriptValue::Document(_) => "document",
            ScriptValue::Object(v) => v.type_name(),
        }
    }
}

impl From<String> for ScriptValue {
    fn from(s: String) -> Self {
        ScriptValue::Text(s)
    }
}

impl From<&str> for ScriptValue {
    fn from(s: &str) -> Self {
        ScriptValue::Text(s.to_string())
    }
}

impl From<Document> for ScriptValue {
    fn from(d: Document) -> Self {
        ScriptValue::Document(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;

    #[test]
    fn dynvalue_conserva_tipo_y_nombre() {
        struct Widget;
        let v = DynValue::new(Widget);
        assert_eq!(v.type_id(), TypeId::of::<Widget>());
        assert!(v.type_name().ends_with("Widget"));
        assert!(v.downcast_ref::<Widget>().is_some());
        assert!(v.downcast_ref::<String>().is_none());
    }

    #[test]
    fn etiquetas_por_variante() {
        assert_eq!(ScriptValue::Null.type_label(), "null");
        assert_eq!(ScriptValue::from("x").type_label(), "text");
        assert_eq!(ScriptValue::from(Document::new(Element::named("r"))).type_label(), "document");
        assert_eq!(ScriptValue::object(42u32).type_label(), "u32");
    }
}
