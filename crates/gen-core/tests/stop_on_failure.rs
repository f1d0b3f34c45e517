//! Stop-on-failure: el primer fallo detiene la corrida y nada posterior se
//! evalúa ni se escribe.

use gen_adapters::{FixtureBackend, MemoryOutputSink, StaticLocator};
use gen_core::{ConverterRegistry, GenerationPlan, PipelineEngine, PipelineError};

fn plan() -> GenerationPlan {
    GenerationPlan::new("/src", ".xml.kts", ".xml")
}

#[test]
fn fallo_de_ejecucion_detiene_los_restantes() {
    let locator = StaticLocator::new(vec!["a.xml.kts".into(), "b.xml.kts".into(), "c.xml.kts".into()]);
    let mut backend = FixtureBackend::new().with_text("a.xml.kts", "<a/>")
                                           .with_error("b.xml.kts", "explota")
                                           .with_text("c.xml.kts", "<c/>");
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(ConverterRegistry::empty());

    let err = engine.run(&plan(), &locator, &mut backend, &mut sink).unwrap_err();
    match &err {
        PipelineError::Execution { path, cause } => {
            assert_eq!(path, "b.xml.kts");
            assert!(cause.contains("explota"));
        }
        other => unreachable!("se esperaba Execution, hay {other}"),
    }

    // a se escribió antes del fallo; c nunca se evaluó ni escribió
    assert!(sink.written.contains_key("a.xml"));
    assert!(!sink.written.contains_key("b.xml"));
    assert!(!sink.written.contains_key("c.xml"));
    assert_eq!(backend.calls(), ["a.xml.kts", "b.xml.kts"]);

    // la secuencia de eventos termina en FileFailed, sin RunCompleted
    assert_eq!(engine.event_variants().unwrap(),
               vec!["I", "S", "R", "W", "S", "X"]);
}

#[test]
fn resultado_nulo_detiene_con_null_result() {
    let locator = StaticLocator::new(vec!["nulo.xml.kts".into(), "z.xml.kts".into()]);
    let mut backend = FixtureBackend::new().with_null("nulo.xml.kts").with_text("z.xml.kts", "z");
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(ConverterRegistry::empty());

    let err = engine.run(&plan(), &locator, &mut backend, &mut sink).unwrap_err();
    assert_eq!(err, PipelineError::NullResult { path: "nulo.xml.kts".into() });
    assert!(sink.written.is_empty());
    assert_eq!(err.source_path(), Some("nulo.xml.kts"));
}

#[test]
fn objeto_sin_converter_detiene_nombrando_el_tipo() {
    struct Widget;
    let locator = StaticLocator::new(vec!["w.xml.kts".into()]);
    let mut backend = FixtureBackend::new()
        .with_result("w.xml.kts", |_| Ok(gen_domain::ScriptValue::object(Widget)));
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(ConverterRegistry::empty());

    let err = engine.run(&plan(), &locator, &mut backend, &mut sink).unwrap_err();
    match err {
        PipelineError::Unrenderable { path, actual_type } => {
            assert_eq!(path, "w.xml.kts");
            assert!(actual_type.ends_with("Widget"), "tipo real ausente: {actual_type}");
        }
        other => unreachable!("se esperaba Unrenderable, hay {other}"),
    }
}
