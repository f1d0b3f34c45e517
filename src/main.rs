//! Validación mínima del pipeline completo en memoria: identidad, documento,
//! converter registrado y stop-on-failure con resultado nulo. Para correr
//! contra el filesystem real está el binario `genflow` (crate `gen-cli`),
//! que honra la misma configuración ambiental que `config::CONFIG`.
use genflow_rust::config::CONFIG;

use gen_adapters::{FixtureBackend, MemoryOutputSink, StaticLocator};
use gen_core::typed_converter;
use gen_core::{ConverterRegistry, GenerationPlan, PipelineEngine};
use gen_domain::{Document, Element, ScriptValue};

#[derive(Debug, Clone, PartialEq)]
struct Widget;

typed_converter! {
    WidgetConverter for Widget {
        convert(_w) { Ok("WIDGET".to_string()) }
    }
}

fn demo_plan() -> GenerationPlan {
    GenerationPlan::new("/demo", &CONFIG.source_suffix, &CONFIG.dest_suffix)
}

fn run_identity_and_document() {
    println!("=== identidad + documento ===");
    let locator = StaticLocator::new(vec!["plain.xml.kts".into(), "tree.xml.kts".into()]);
    let mut backend =
        FixtureBackend::new().with_text("plain.xml.kts", "<root/>")
                             .with_document("tree.xml.kts", || {
                                 Document::new(Element::named("beans")
                                                   .child(Element::named("bean").attr("id", "a")))
                             });
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(ConverterRegistry::empty());

    match engine.run(&demo_plan(), &locator, &mut backend, &mut sink) {
        Ok(report) => {
            for f in &report.files {
                println!("  {} -> {} [{}]", f.path, f.destination, f.strategy);
            }
            println!("  eventos: {:?}", engine.event_variants().unwrap_or_default());
            println!("  tree.xml = {}", sink.written["tree.xml"]);
        }
        Err(e) => println!("  inesperado: {e}"),
    }
}

fn run_registered_converter() {
    println!("=== converter registrado ===");
    let registry = match ConverterRegistry::builder().register("widget", WidgetConverter::new()) {
        Ok(b) => b.build(),
        Err(e) => {
            println!("  configuración inválida: {e}");
            return;
        }
    };
    let locator = StaticLocator::new(vec!["w.xml.kts".into()]);
    let mut backend = FixtureBackend::new().with_result("w.xml.kts", |_| Ok(ScriptValue::object(Widget)));
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(registry);

    match engine.run(&demo_plan(), &locator, &mut backend, &mut sink) {
        Ok(_) => println!("  w.xml = {}", sink.written["w.xml"]),
        Err(e) => println!("  inesperado: {e}"),
    }
}

fn run_null_stops_the_run() {
    println!("=== resultado nulo detiene la corrida ===");
    let locator = StaticLocator::new(vec!["a.xml.kts".into(), "b.xml.kts".into()]);
    let mut backend = FixtureBackend::new().with_null("a.xml.kts").with_text("b.xml.kts", "<b/>");
    let mut sink = MemoryOutputSink::new();
    let mut engine = PipelineEngine::in_memory(ConverterRegistry::empty());

    match engine.run(&demo_plan(), &locator, &mut backend, &mut sink) {
        Ok(_) => println!("  inesperado: la corrida debía fallar"),
        Err(e) => {
            println!("  error (esperado): {e}");
            println!("  b.xml escrito: {}", sink.written.contains_key("b.xml"));
            println!("  eventos: {:?}", engine.event_variants().unwrap_or_default());
        }
    }
}

fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();

    println!("genflow demo — backend configurado: {}, sufijos {} -> {}",
             CONFIG.backend, CONFIG.source_suffix, CONFIG.dest_suffix);
    run_identity_and_document();
    run_registered_converter();
    run_null_stops_the_run();
}
