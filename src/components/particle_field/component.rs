//! Leptos component wrapping the particle field canvas.
//!
//! The component mounts a full-viewport canvas that ignores pointer input, so
//! page content under it stays interactive. Pointer and resize notifications
//! come from `window` through [`WebEventSource`]; frames are driven by
//! `requestAnimationFrame` through [`FrameLoop`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use super::field::ParticleField;
use super::host::{self, EventSource, FrameLoop, WebEventSource};
use super::surface::CanvasSurface;
use super::types::FieldConfig;

/// Live loop plus the event source whose listeners feed it.
type Running = Rc<RefCell<Option<(FrameLoop, Rc<WebEventSource>)>>>;

/// Renders the ambient particle field behind the page content.
///
/// `config` tunes density, radii and the color preset; see [`FieldConfig`].
#[component]
pub fn ParticleFieldCanvas(
	#[prop(optional)] config: FieldConfig,
	#[prop(default = "particle-field-canvas")] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running: Running = Rc::new(RefCell::new(None));

	// The pending frame callback returns without rescheduling once stopped,
	// releasing the last reference to the event source and its listeners.
	let running_cleanup = SendWrapper::new(running.clone());
	on_cleanup(move || {
		if let Some((frames, _)) = running_cleanup.borrow_mut().take() {
			frames.stop();
			info!("sidequest-fx: particle field stopped after {} frames", frames.frames());
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = start(canvas, config.clone(), &running) {
			warn!("sidequest-fx: particle field disabled: {e:?}");
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			aria-hidden="true"
			style="display: block; position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}

fn start(canvas: HtmlCanvasElement, config: FieldConfig, running: &Running) -> Result<(), JsValue> {
	let source = Rc::new(WebEventSource::new()?);
	let surface = Rc::new(RefCell::new(CanvasSurface::new(canvas)?));
	let (w, h) = source.viewport_size();
	let field = Rc::new(RefCell::new(ParticleField::new(config, w, h)));

	host::attach(source.as_ref(), &field);
	let frames = FrameLoop::start(source.clone(), field, surface);

	// Dropping the old source unregisters its listeners.
	if let Some((previous, _)) = running.borrow_mut().replace((frames, source)) {
		previous.stop();
	}
	Ok(())
}
