//! Drawing for the particle field.
//!
//! Two passes per frame, after clearing:
//! 1. Particles as filled circles, in collection order
//! 2. Connections between every pair closer than the link distance
//!
//! The connection pass is quadratic in particle count; the count is bounded by
//! surface area so it stays in the low hundreds on typical viewports.

use super::field::ParticleField;
use super::particles::Particle;
use super::surface::DrawSurface;
use super::theme::FieldStyle;

/// Renders the field's current state. A surface with no area gets no calls.
pub fn render<S: DrawSurface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let (width, height) = field.size();
	if width <= 0.0 || height <= 0.0 {
		return;
	}

	surface.clear(width, height);
	draw_particles(field.particles(), field.style(), field.hue(), surface);
	draw_connections(
		field.particles(),
		field.style(),
		field.config().link_distance,
		surface,
	);
}

fn draw_particles<S: DrawSurface + ?Sized>(
	particles: &[Particle],
	style: &FieldStyle,
	hue: f64,
	surface: &mut S,
) {
	for (i, p) in particles.iter().enumerate() {
		let paint = style.particle_paint(hue, i, p.size);
		surface.fill_circle(p.x, p.y, p.size, &paint);
	}
}

fn draw_connections<S: DrawSurface + ?Sized>(
	particles: &[Particle],
	style: &FieldStyle,
	link_distance: f64,
	surface: &mut S,
) {
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if let Some(paint) = style.link_paint(distance, link_distance) {
				surface.stroke_line((a.x, a.y), (b.x, b.y), style.link_width, &paint);
			}
		}
	}
}
