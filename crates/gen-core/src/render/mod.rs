//! Renderer de resultados: el núcleo del generador.
//!
//! Dado el valor dinámico que produjo un script, decide cómo convertirlo a
//! texto aplicando una cascada de resolución en orden estricto (primera que
//! aplica gana; el orden es contrato, las estrategias posteriores son más
//! caras y más ambiguas):
//!
//! 1. Nulo → error (`NullResult`): un script debe producir un valor.
//! 2. Identidad → el valor ya es texto; se devuelve sin cambios.
//! 3. Documento → serialización determinista del árbol de marcado.
//! 4. Converter registrado → lookup exacto por `TypeId` en el registry.
//! 5. Nada aplica → `Unrenderable` nombrando el tipo real.
//!
//! Decisión (redeseño del original): el paso 4 usa registro por tipo exacto
//! con lookup O(1); no se reproduce el barrido por ancestros con
//! primera-coincidencia en orden de iteración del original.

pub mod converter;
pub mod macros;
pub mod registry;

use thiserror::Error;

use gen_domain::ScriptValue;

use crate::model::RenderStrategy;

pub use converter::Converter;
pub use registry::{ConverterRegistry, RegisteredConverter};

/// Fallo local del renderer (el pipeline añade la ruta fuente).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RenderError {
    #[error("script returned no result")] NullResult,
    #[error("no converter for result type {actual_type}")] Unrenderable { actual_type: String },
    #[error("converter {name} failed: {cause}")] Converter { name: String, cause: String },
}

/// Texto resuelto + estrategia que lo produjo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub strategy: RenderStrategy,
}

/// Resuelve un valor de script a texto contra el registry dado.
///
/// Consume el valor: cada resultado de script se renderiza exactamente una
/// vez. El registry es de sólo lectura durante toda la corrida.
pub fn render(value: ScriptValue, registry: &ConverterRegistry) -> Result<Rendered, RenderError> {
    match value {
        ScriptValue::Null => Err(RenderError::NullResult),

        ScriptValue::Text(text) => {
            log::trace!("render: identidad ({} bytes)", text.len());
            Ok(Rendered { text, strategy: RenderStrategy::Identity })
        }

        ScriptValue::Document(doc) => {
            let text = doc.serialize();
            log::trace!("render: documento serializado ({} bytes)", text.len());
            Ok(Rendered { text, strategy: RenderStrategy::DocumentSerialization })
        }

        ScriptValue::Object(value) => match registry.lookup(value.type_id()) {
            Some(entry) => {
                log::trace!("render: converter {} para {}", entry.name, value.type_name());
                let text = entry.converter
                                .convert(value.as_any())
                                .map_err(|cause| RenderError::Converter { name: entry.name.clone(), cause })?;
                Ok(Rendered { text, strategy: RenderStrategy::Converter(entry.name.clone()) })
            }
            None => Err(RenderError::Unrenderable { actual_type: value.type_name().to_string() }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed_converter;
    use gen_domain::{Document, Element};

    #[derive(Debug, Clone, PartialEq)]
    struct Widget;

    typed_converter! {
        WidgetConverter for Widget {
            convert(_w) { Ok("WIDGET".to_string()) }
        }
    }

    typed_converter! {
        FailingConverter for u32 {
            convert(n) { Err(format!("no puedo con {n}")) }
        }
    }

    fn registry_con_widget() -> ConverterRegistry {
        ConverterRegistry::builder().register("widget", WidgetConverter::new())
                                    .expect("registro")
                                    .build()
    }

    #[test]
    fn nulo_siempre_falla_sin_importar_el_registry() {
        assert_eq!(render(ScriptValue::Null, &ConverterRegistry::empty()),
                   Err(RenderError::NullResult));
        assert_eq!(render(ScriptValue::Null, &registry_con_widget()),
                   Err(RenderError::NullResult));
    }

    #[test]
    fn identidad_devuelve_el_texto_sin_cambios() {
        for s in ["", "<root/>", "texto con ñ"] {
            let r = render(ScriptValue::from(s), &ConverterRegistry::empty()).expect("texto");
            assert_eq!(r.text, s);
            assert_eq!(r.strategy, RenderStrategy::Identity);
        }
    }

    #[test]
    fn documento_se_serializa() {
        let doc = Document::new(Element::named("root"));
        let r = render(ScriptValue::from(doc), &ConverterRegistry::empty()).expect("doc");
        assert_eq!(r.text, "<root/>");
        assert_eq!(r.strategy, RenderStrategy::DocumentSerialization);
    }

    #[test]
    fn objeto_registrado_usa_su_converter() {
        let r = render(ScriptValue::object(Widget), &registry_con_widget()).expect("widget");
        assert_eq!(r.text, "WIDGET");
        assert_eq!(r.strategy, RenderStrategy::Converter("widget".into()));
    }

    #[test]
    fn objeto_sin_converter_nombra_el_tipo_real() {
        let err = render(ScriptValue::object(3.5f64), &registry_con_widget()).unwrap_err();
        assert_eq!(err, RenderError::Unrenderable { actual_type: "f64".into() });
    }

    #[test]
    fn fallo_de_converter_se_propaga_con_nombre() {
        let registry = ConverterRegistry::builder().register("u32", FailingConverter::new())
                                                   .expect("registro")
                                                   .build();
        let err = render(ScriptValue::object(7u32), &registry).unwrap_err();
        assert_eq!(err,
                   RenderError::Converter { name: "u32".into(), cause: "no puedo con 7".into() });
    }

    #[test]
    fn texto_gana_sobre_converters_registrados_para_string() {
        // aunque exista un converter para String, la variante Text nunca lo usa
        typed_converter! {
            ShoutConverter for String {
                convert(s) { Ok(s.to_uppercase()) }
            }
        }
        let registry = ConverterRegistry::builder().register("shout", ShoutConverter::new())
                                                   .expect("registro")
                                                   .build();
        let r = render(ScriptValue::from("quieto"), &registry).expect("texto");
        assert_eq!(r.text, "quieto");
        // pero un String envuelto como objeto sí pasa por el converter
        let r = render(ScriptValue::object("fuerte".to_string()), &registry).expect("objeto");
        assert_eq!(r.text, "FUERTE");
    }
}
