//! Host environment seam.
//!
//! The field itself never touches `window`. An [`EventSource`] supplies the
//! viewport size, resize and pointer notifications, and a frame scheduler;
//! [`attach`] routes notifications into a shared field and [`FrameLoop`]
//! drives `advance_frame` once per scheduled frame until stopped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

use super::field::ParticleField;
use super::surface::DrawSurface;

/// Field shared between the frame callback and event handlers.
pub type SharedField = Rc<RefCell<ParticleField>>;

/// Everything the field needs from its environment.
pub trait EventSource {
	/// Current viewport extent in CSS pixels.
	fn viewport_size(&self) -> (f64, f64);
	fn on_resize(&self, handler: Box<dyn FnMut(f64, f64)>);
	/// Pointer position in viewport coordinates.
	fn on_pointer_move(&self, handler: Box<dyn FnMut(f64, f64)>);
	fn on_pointer_leave(&self, handler: Box<dyn FnMut()>);
	/// Invoke `callback` once, at the next display refresh.
	fn schedule_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Route resize and pointer notifications from `source` into `field`.
///
/// Resizes are queued; the field regenerates at the start of its next frame.
pub fn attach<S: EventSource + ?Sized>(source: &S, field: &SharedField) {
	let resize_field = field.clone();
	source.on_resize(Box::new(move |w, h| {
		resize_field.borrow_mut().queue_resize(w, h);
	}));

	let move_field = field.clone();
	source.on_pointer_move(Box::new(move |x, y| {
		move_field.borrow_mut().pointer_moved(x, y);
	}));

	let leave_field = field.clone();
	source.on_pointer_leave(Box::new(move || {
		leave_field.borrow_mut().pointer_left();
	}));
}

/// Self-rescheduling frame loop. Dropping the handle does not stop the loop;
/// call [`FrameLoop::stop`].
#[derive(Clone, Debug)]
pub struct FrameLoop {
	running: Rc<Cell<bool>>,
	frames: Rc<Cell<u64>>,
}

impl FrameLoop {
	/// Schedule the first frame and keep rescheduling while running.
	pub fn start<S, D>(source: Rc<S>, field: SharedField, surface: Rc<RefCell<D>>) -> Self
	where
		S: EventSource + 'static,
		D: DrawSurface + 'static,
	{
		let handle = Self {
			running: Rc::new(Cell::new(true)),
			frames: Rc::new(Cell::new(0)),
		};
		{
			let f = field.borrow();
			let (w, h) = f.size();
			info!(
				"sidequest-fx: starting field with {} particles at {w}x{h}",
				f.particles().len()
			);
		}
		schedule(source, field, surface, handle.clone());
		handle
	}

	/// Stop after the frame in flight; the pending callback becomes a no-op.
	pub fn stop(&self) {
		self.running.set(false);
	}

	/// Whether [`FrameLoop::stop`] has not been called yet.
	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Frames completed so far.
	pub fn frames(&self) -> u64 {
		self.frames.get()
	}
}

fn schedule<S, D>(source: Rc<S>, field: SharedField, surface: Rc<RefCell<D>>, handle: FrameLoop)
where
	S: EventSource + 'static,
	D: DrawSurface + 'static,
{
	let next_source = source.clone();
	source.schedule_frame(Box::new(move || {
		if !handle.running.get() {
			return;
		}
		field.borrow_mut().advance_frame(&mut *surface.borrow_mut());
		handle.frames.set(handle.frames.get() + 1);
		schedule(next_source, field, surface, handle);
	}));
}

type Listener = (&'static str, Closure<dyn FnMut(web_sys::Event)>);

/// [`EventSource`] over the browser `window`.
///
/// Keeps its listener closures alive and unregisters them on drop.
pub struct WebEventSource {
	window: Window,
	listeners: RefCell<Vec<Listener>>,
}

impl WebEventSource {
	/// Bind to the global `window`.
	pub fn new() -> Result<Self, JsValue> {
		let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
		Ok(Self {
			window,
			listeners: RefCell::new(Vec::new()),
		})
	}

	fn listen(&self, event: &'static str, closure: Closure<dyn FnMut(web_sys::Event)>) {
		if let Err(e) = self
			.window
			.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		{
			warn!("sidequest-fx: failed to listen for {event}: {e:?}");
			return;
		}
		self.listeners.borrow_mut().push((event, closure));
	}

	fn dimension(value: Result<JsValue, JsValue>) -> f64 {
		value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
	}
}

impl EventSource for WebEventSource {
	fn viewport_size(&self) -> (f64, f64) {
		(
			Self::dimension(self.window.inner_width()),
			Self::dimension(self.window.inner_height()),
		)
	}

	fn on_resize(&self, mut handler: Box<dyn FnMut(f64, f64)>) {
		let window = self.window.clone();
		self.listen(
			"resize",
			Closure::new(move |_: web_sys::Event| {
				handler(
					Self::dimension(window.inner_width()),
					Self::dimension(window.inner_height()),
				);
			}),
		);
	}

	fn on_pointer_move(&self, mut handler: Box<dyn FnMut(f64, f64)>) {
		self.listen(
			"mousemove",
			Closure::new(move |ev: web_sys::Event| {
				if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
					handler(ev.client_x() as f64, ev.client_y() as f64);
				}
			}),
		);
	}

	fn on_pointer_leave(&self, mut handler: Box<dyn FnMut()>) {
		// `mouseout` bubbles from every element; no related target means the
		// pointer left the document.
		self.listen(
			"mouseout",
			Closure::new(move |ev: web_sys::Event| {
				let left_window = ev
					.dyn_ref::<MouseEvent>()
					.is_some_and(|ev| ev.related_target().is_none());
				if left_window {
					handler();
				}
			}),
		);
	}

	fn schedule_frame(&self, callback: Box<dyn FnOnce()>) {
		let cb = Closure::once_into_js(move || callback());
		if let Err(e) = self.window.request_animation_frame(cb.unchecked_ref()) {
			warn!("sidequest-fx: requestAnimationFrame failed: {e:?}");
		}
	}
}

impl Drop for WebEventSource {
	fn drop(&mut self) {
		for (event, closure) in self.listeners.get_mut().drain(..) {
			let _ = self
				.window
				.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
		}
	}
}
