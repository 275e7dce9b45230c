//! sidequest-fx: ambient particle field for the Sidequest Digital hero.
//!
//! This crate provides a WASM canvas component that renders drifting,
//! pointer-repelled particles joined by faint proximity lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Browser entropy backend for `rand`.
use getrandom as _;

pub mod components;

pub use components::particle_field::{
	DrawSurface, EventSource, FieldConfig, FieldStyle, FrameLoop, Particle, ParticleField,
	ParticleFieldCanvas,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("sidequest-fx: logging initialized");
}

/// Load field configuration from a script element with id="field-config".
/// Expected format: JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	parse_field_config(&json_text)
}

fn parse_field_config(json_text: &str) -> Option<FieldConfig> {
	match serde_json::from_str::<FieldConfig>(json_text) {
		Ok(config) => {
			info!("sidequest-fx: loaded field config (theme {:?})", config.theme);
			Some(config)
		}
		Err(e) => {
			warn!("sidequest-fx: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the field configuration from the DOM and renders the hero section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Sidequest Digital" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero">
			<ParticleFieldCanvas config=config />
			<div class="hero-content">
				<h1>"Sidequest Digital"</h1>
				<p class="subtitle">"Websites with a little mischief in them."</p>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_field_config() {
		let config = parse_field_config(r#"{ "link_distance": 120 }"#).unwrap();
		assert_eq!(config.link_distance, 120.0);
		assert_eq!(config.theme, "sidequest");
	}

	#[test]
	fn test_parse_field_config_rejects_malformed() {
		assert!(parse_field_config("{ link_distance: }").is_none());
		assert!(parse_field_config(r#"{ "link_distance": "far" }"#).is_none());
	}
}
