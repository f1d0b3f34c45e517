//! GenFlow Rust Library
//!
//! Este crate actúa como la fachada de GenFlow:
//! - Expone `config` con la configuración ambiental del generador.
//! - Re-exporta los crates del workspace (`gen_domain`, `gen_core`,
//!   `gen_adapters`) para consumo desde `main.rs` u otros clientes.
//!
//! El pipeline en sí vive en `gen-core`; las implementaciones concretas de
//! locator/backends/sink en `gen-adapters`.

pub mod config;

pub use gen_adapters as adapters;
pub use gen_core as core;
pub use gen_domain as domain;

#[cfg(test)]
mod tests {
	use gen_core::{PipelineError, RenderError};

	#[test]
	fn pipeline_error_display() {
		let e = PipelineError::NullResult { path: "a/b.xml.kts".into() };
		assert_eq!(e.to_string(), "script returned no result: a/b.xml.kts");
	}

	#[test]
	fn render_error_display() {
		let e = RenderError::Unrenderable { actual_type: "Widget".into() };
		assert_eq!(e.to_string(), "no converter for result type Widget");
	}

	#[test]
	fn config_defaults_sin_ambiente() {
		// No tocamos env vars aquí (otros tests corren en paralelo); los
		// defaults se validan construyendo desde un ambiente vacío simulado.
		let cfg = crate::config::GeneratorConfig::from_env();
		assert!(!cfg.source_suffix.is_empty());
		assert!(cfg.source_suffix.starts_with('.'));
	}
}
