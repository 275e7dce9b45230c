//! Immediate-mode drawing surface the field renders to.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Paint;

/// The handful of 2D operations the field needs.
pub trait DrawSurface {
	/// Resize the backing store. Called whenever the field extent changes.
	fn set_size(&mut self, width: f64, height: f64);
	/// Clear `[0, width] x [0, height]`.
	fn clear(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint);
}

/// [`DrawSurface`] backed by an HTML canvas 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap `canvas`, failing if it has no 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
			.dyn_into()
			.map_err(JsValue::from)?;
		Ok(Self { canvas, ctx })
	}
}

impl DrawSurface for CanvasSurface {
	fn set_size(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width.max(0.0) as u32);
		self.canvas.set_height(height.max(0.0) as u32);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint) {
		self.ctx.set_fill_style_str(&paint.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint) {
		self.ctx.set_stroke_style_str(&paint.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// One recorded surface call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum Call {
		SetSize(f64, f64),
		Clear(f64, f64),
		Circle { x: f64, y: f64, radius: f64, paint: Paint },
		Line { from: (f64, f64), to: (f64, f64), width: f64, paint: Paint },
	}

	/// Surface that records every call instead of drawing.
	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub calls: Vec<Call>,
	}

	impl RecordingSurface {
		pub fn circles(&self) -> usize {
			self.calls.iter().filter(|c| matches!(c, Call::Circle { .. })).count()
		}

		pub fn lines(&self) -> impl Iterator<Item = &Call> {
			self.calls.iter().filter(|c| matches!(c, Call::Line { .. }))
		}

		pub fn take(&mut self) -> Vec<Call> {
			std::mem::take(&mut self.calls)
		}
	}

	impl DrawSurface for RecordingSurface {
		fn set_size(&mut self, width: f64, height: f64) {
			self.calls.push(Call::SetSize(width, height));
		}

		fn clear(&mut self, width: f64, height: f64) {
			self.calls.push(Call::Clear(width, height));
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, paint: &Paint) {
			self.calls.push(Call::Circle {
				x,
				y,
				radius,
				paint: *paint,
			});
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, paint: &Paint) {
			self.calls.push(Call::Line {
				from,
				to,
				width,
				paint: *paint,
			});
		}
	}
}
