//! Idempotencia: dos corridas con las mismas entradas producen salidas
//! byte-idénticas y el mismo fingerprint de corrida.

use gen_adapters::{FixtureBackend, MemoryOutputSink, StaticLocator};
use gen_core::{ConverterRegistry, GenerationPlan, PipelineEngine};
use gen_domain::{Document, Element};

fn backend() -> FixtureBackend {
    FixtureBackend::new().with_text("a.xml.kts", "<root/>")
                         .with_document("b/doc.xml.kts", || {
                             Document::new(Element::named("cfg").attr("v", "1"))
                         })
}

fn correr() -> (String, std::collections::HashMap<String, String>) {
    let locator = StaticLocator::new(vec!["a.xml.kts".into(), "b/doc.xml.kts".into()]);
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(ConverterRegistry::empty());
    let report = engine.run(&GenerationPlan::new("/src", ".xml.kts", ".xml"),
                            &locator,
                            &mut backend(),
                            &mut sink)
                       .expect("corrida exitosa");
    (report.run_fingerprint, sink.written)
}

#[test]
fn corridas_repetidas_son_identicas() {
    let (fp1, out1) = correr();
    let (fp2, out2) = correr();
    assert_eq!(fp1, fp2, "el fingerprint de corrida debe ser estable");
    assert_eq!(out1, out2, "las salidas deben ser byte-idénticas");
    assert_eq!(out1.get("a.xml").map(String::as_str), Some("<root/>"));
    assert_eq!(out1.get("b/doc.xml").map(String::as_str), Some(r#"<cfg v="1"/>"#));
}

#[test]
fn cambiar_el_contenido_cambia_el_fingerprint() {
    let locator = StaticLocator::new(vec!["a.xml.kts".into()]);
    let plan = GenerationPlan::new("/src", ".xml.kts", ".xml");

    let mut fps = Vec::new();
    for contenido in ["<root/>", "<root2/>"] {
        let mut sink = MemoryOutputSink::new();
        let mut engine = PipelineEngine::in_memory(ConverterRegistry::empty());
        let mut backend = FixtureBackend::new().with_text("a.xml.kts", contenido);
        let report = engine.run(&plan, &locator, &mut backend, &mut sink).expect("corrida");
        fps.push(report.run_fingerprint);
    }
    assert_ne!(fps[0], fps[1]);
}
