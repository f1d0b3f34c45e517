//! Integración del cuarto nivel de la cascada: objetos de dominio resueltos
//! por converters registrados desde configuración, y escenarios de fallo
//! (nulo, tipo sin converter, configuración inválida).

use indexmap::IndexMap;

use gen_adapters::{build_registry, BackendCatalog, ConverterCatalog, FixtureBackend,
                   MemoryOutputSink, StaticLocator};
use gen_core::typed_converter;
use gen_core::{ConverterRegistry, GenerationPlan, PipelineEngine, PipelineError};
use gen_domain::ScriptValue;

#[derive(Debug, Clone, PartialEq)]
struct Widget;

typed_converter! {
    WidgetConverter for Widget {
        convert(_w) { Ok("WIDGET".to_string()) }
    }
}

fn plan() -> GenerationPlan {
    GenerationPlan::new("/src", ".xml.kts", ".xml")
}

#[test]
fn widget_configurado_produce_su_texto() {
    let mut catalog = ConverterCatalog::with_builtins();
    catalog.register("widget", WidgetConverter::new());
    let mapping: IndexMap<String, String> =
        [("Widget".to_string(), "widget".to_string())].into_iter().collect();
    let registry = build_registry(&mapping, &catalog).expect("registry");

    let locator = StaticLocator::new(vec!["w.xml.kts".into()]);
    let mut backend = FixtureBackend::new().with_result("w.xml.kts", |_| Ok(ScriptValue::object(Widget)));
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(registry);

    engine.run(&plan(), &locator, &mut backend, &mut sink).expect("corrida");
    assert_eq!(sink.written.get("w.xml").map(String::as_str), Some("WIDGET"));
}

#[test]
fn backend_json_mas_converter_compacto() {
    let src = tempfile::tempdir().expect("src");
    std::fs::write(src.path().join("data.xml.kts"), "{\"b\": 2, \"a\": 1}").unwrap();

    let mapping: IndexMap<String, String> =
        [("Value".to_string(), "json-compact".to_string())].into_iter().collect();
    let registry = build_registry(&mapping, &ConverterCatalog::with_builtins()).expect("registry");

    let mut backend = BackendCatalog::with_builtins().create("json").expect("backend");
    let locator = StaticLocator::new(vec!["data.xml.kts".into()]);
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(registry);

    let plan = GenerationPlan::new(src.path(), ".xml.kts", ".xml");
    engine.run(&plan, &locator, backend.as_mut(), &mut sink).expect("corrida");
    assert_eq!(sink.written.get("data.xml").map(String::as_str), Some(r#"{"a":1,"b":2}"#));
}

#[test]
fn configuracion_invalida_falla_antes_de_procesar() {
    let mapping: IndexMap<String, String> =
        [("Widget".to_string(), "no-existe".to_string())].into_iter().collect();
    let err = build_registry(&mapping, &ConverterCatalog::with_builtins()).unwrap_err();
    assert!(matches!(err, PipelineError::Configuration(_)));

    let err = BackendCatalog::with_builtins().create("kts").unwrap_err();
    assert!(matches!(err, PipelineError::Configuration(_)));
}

#[test]
fn converter_que_falla_aborta_la_corrida() {
    typed_converter! {
        NuncaConverter for Widget {
            convert(_w) { Err("rechazado".to_string()) }
        }
    }
    let registry = ConverterRegistry::builder().register("nunca", NuncaConverter::new())
                                               .expect("registro")
                                               .build();
    let locator = StaticLocator::new(vec!["w.xml.kts".into()]);
    let mut backend = FixtureBackend::new().with_result("w.xml.kts", |_| Ok(ScriptValue::object(Widget)));
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(registry);

    let err = engine.run(&plan(), &locator, &mut backend, &mut sink).unwrap_err();
    match err {
        PipelineError::Converter { path, name, cause } => {
            assert_eq!(path, "w.xml.kts");
            assert_eq!(name, "nunca");
            assert_eq!(cause, "rechazado");
        }
        other => unreachable!("se esperaba Converter, hay {other}"),
    }
    assert!(sink.written.is_empty());
}
