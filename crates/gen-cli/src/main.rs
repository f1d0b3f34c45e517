use std::path::PathBuf;

use indexmap::IndexMap;

use gen_adapters::{build_registry, BackendCatalog, ConverterCatalog, FsOutputSink, TextEncoding,
                   WalkdirLocator};
use gen_core::constants::{DEFAULT_BACKEND, DEFAULT_DEST_SUFFIX, DEFAULT_ENCODING,
                          DEFAULT_SOURCE_SUFFIX};
use gen_core::{GenerationPlan, PipelineEngine};

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn usage() -> ! {
    eprintln!("Uso: genflow generate --source-root <DIR> --output-root <DIR> \
               [--source-suffix <S>] [--dest-suffix <S>] [--backend <NAME>] \
               [--encoding <NAME>] [--convert <TYPE=CONVERTER>]... [--property <K=V>]...");
    std::process::exit(2);
}

fn main() {
    // Cargar .env si existe para las variables GENFLOW_*
    let _ = dotenvy::dotenv();
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] != "generate" {
        println!("genflow: use el subcomando 'generate'");
        std::process::exit(2);
    }

    let mut source_root: Option<String> = std::env::var("GENFLOW_SOURCE_ROOT").ok();
    let mut output_root: Option<String> = std::env::var("GENFLOW_OUTPUT_ROOT").ok();
    let mut source_suffix = env_or("GENFLOW_SOURCE_SUFFIX", DEFAULT_SOURCE_SUFFIX);
    let mut dest_suffix = env_or("GENFLOW_DEST_SUFFIX", DEFAULT_DEST_SUFFIX);
    let mut backend_name = env_or("GENFLOW_BACKEND", DEFAULT_BACKEND);
    let mut encoding_name = env_or("GENFLOW_ENCODING", DEFAULT_ENCODING);
    let mut mapping: IndexMap<String, String> = IndexMap::new();
    let mut properties = serde_json::Map::new();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--source-root" => {
                i += 1;
                if i < args.len() { source_root = Some(args[i].clone()); }
            }
            "--output-root" => {
                i += 1;
                if i < args.len() { output_root = Some(args[i].clone()); }
            }
            "--source-suffix" => {
                i += 1;
                if i < args.len() { source_suffix = args[i].clone(); }
            }
            "--dest-suffix" => {
                i += 1;
                if i < args.len() { dest_suffix = args[i].clone(); }
            }
            "--backend" => {
                i += 1;
                if i < args.len() { backend_name = args[i].clone(); }
            }
            "--encoding" => {
                i += 1;
                if i < args.len() { encoding_name = args[i].clone(); }
            }
            "--convert" => {
                i += 1;
                if i < args.len() {
                    match args[i].split_once('=') {
                        Some((ty, conv)) => { mapping.insert(ty.to_string(), conv.to_string()); }
                        None => usage(),
                    }
                }
            }
            "--property" => {
                i += 1;
                if i < args.len() {
                    match args[i].split_once('=') {
                        Some((k, v)) => { properties.insert(k.to_string(), serde_json::Value::String(v.to_string())); }
                        None => usage(),
                    }
                }
            }
            _ => usage(),
        }
        i += 1;
    }

    let (source_root, output_root) = match (source_root, output_root) {
        (Some(s), Some(o)) => (s, o),
        _ => usage(),
    };

    // Resolución eager de toda la configuración: cualquier nombre inválido
    // aborta aquí, antes de tocar archivo alguno.
    let encoding = match TextEncoding::from_name(&encoding_name) {
        Ok(e) => e,
        Err(e) => { eprintln!("[genflow generate] {e}"); std::process::exit(3); }
    };
    let registry = match build_registry(&mapping, &ConverterCatalog::with_builtins()) {
        Ok(r) => r,
        Err(e) => { eprintln!("[genflow generate] {e}"); std::process::exit(3); }
    };
    let mut backend = match BackendCatalog::with_builtins().create(&backend_name) {
        Ok(b) => b,
        Err(e) => { eprintln!("[genflow generate] {e}"); std::process::exit(3); }
    };

    let mut engine = PipelineEngine::in_memory(registry);
    if !properties.is_empty() {
        engine.set_properties(serde_json::Value::Object(properties));
    }
    let plan = GenerationPlan::new(PathBuf::from(&source_root), &source_suffix, &dest_suffix);
    let mut sink = FsOutputSink::new(&output_root, encoding);

    match engine.run(&plan, &WalkdirLocator, backend.as_mut(), &mut sink) {
        Ok(report) => {
            for file in &report.files {
                println!("{} -> {} [{}]", file.path, file.destination, file.strategy);
            }
            println!("ok: {} archivo(s), fingerprint {}", report.len(), report.run_fingerprint);
        }
        Err(e) => {
            eprintln!("[genflow generate] error: {e}");
            std::process::exit(4);
        }
    }
}
