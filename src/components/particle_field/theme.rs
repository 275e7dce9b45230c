//! Colors and named visual presets for the particle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
	/// Alpha in `[0, 1]`
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba(...)` string.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// HSLA color. Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	/// Hue (degrees)
	pub h: f64,
	/// Saturation (percent)
	pub s: f64,
	/// Lightness (percent)
	pub l: f64,
	/// Alpha in `[0, 1]`
	pub a: f64,
}

impl Hsla {
	/// Color from hue, saturation, lightness and alpha.
	pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h, s, l, a }
	}

	/// CSS `hsla(...)` string.
	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Fill or stroke color handed to a [`DrawSurface`](super::surface::DrawSurface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
	/// Fixed RGBA color
	Rgba(Color),
	/// HSLA color
	Hsla(Hsla),
}

impl Paint {
	/// Opacity in `[0, 1]`.
	pub fn alpha(&self) -> f64 {
		match self {
			Paint::Rgba(c) => c.a,
			Paint::Hsla(c) => c.a,
		}
	}

	/// CSS color string.
	pub fn to_css(&self) -> String {
		match self {
			Paint::Rgba(c) => c.to_css(),
			Paint::Hsla(c) => c.to_css(),
		}
	}
}

/// Visual style of particles and their connections.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
	/// Preset name, matched by [`FieldStyle::by_name`]
	pub name: &'static str,
	/// Particle saturation (percent)
	pub saturation: f64,
	/// Particle lightness (percent)
	pub lightness: f64,
	/// Width of the hue band spread across particle indices
	pub hue_spread: f64,
	/// Hue offset added per particle index (wraps at `hue_spread`)
	pub hue_per_index: f64,
	/// Alpha of a zero-size particle
	pub alpha_base: f64,
	/// Extra alpha gained at `size == alpha_size_scale`
	pub alpha_span: f64,
	/// Particle size that earns the full `alpha_span`
	pub alpha_size_scale: f64,
	/// Connection line color (alpha is computed per pair)
	pub link_color: Color,
	/// Connection alpha at zero distance
	pub link_opacity: f64,
	/// Connection stroke width in pixels
	pub link_width: f64,
}

impl FieldStyle {
	/// Violet links over a cycling hue band (default)
	pub fn sidequest() -> Self {
		Self {
			name: "sidequest",
			saturation: 80.0,
			lightness: 60.0,
			hue_spread: 60.0,
			hue_per_index: 0.5,
			alpha_base: 0.3,
			alpha_span: 0.4,
			alpha_size_scale: 4.0,
			link_color: Color::rgb(139, 92, 246),
			link_opacity: 0.15,
			link_width: 1.0,
		}
	}

	/// Warm orange links, the site's accent color
	pub fn ember() -> Self {
		Self {
			name: "ember",
			saturation: 85.0,
			lightness: 58.0,
			hue_spread: 40.0,
			link_color: Color::rgb(249, 115, 22),
			..Self::sidequest()
		}
	}

	/// Desaturated, for pages where the field sits behind dense content
	pub fn mono() -> Self {
		Self {
			name: "mono",
			saturation: 0.0,
			lightness: 75.0,
			hue_spread: 0.0,
			hue_per_index: 0.0,
			alpha_base: 0.15,
			alpha_span: 0.3,
			link_color: Color::rgb(200, 200, 210),
			link_opacity: 0.1,
			..Self::sidequest()
		}
	}

	/// Preset by name, `None` if unknown.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"sidequest" => Some(Self::sidequest()),
			"ember" => Some(Self::ember()),
			"mono" => Some(Self::mono()),
			_ => None,
		}
	}

	/// Fill for the particle at `index` with radius `size` under ambient `hue`.
	pub fn particle_paint(&self, hue: f64, index: usize, size: f64) -> Paint {
		let offset = if self.hue_spread > 0.0 {
			(index as f64 * self.hue_per_index) % self.hue_spread
		} else {
			0.0
		};
		let alpha = self.alpha_base + (size / self.alpha_size_scale) * self.alpha_span;
		Paint::Hsla(Hsla::new(hue + offset, self.saturation, self.lightness, alpha))
	}

	/// Stroke for a connection of the given length, `None` at or beyond `max_distance`.
	pub fn link_paint(&self, distance: f64, max_distance: f64) -> Option<Paint> {
		let opacity = link_opacity(distance, max_distance, self.link_opacity);
		(opacity > 0.0).then(|| Paint::Rgba(self.link_color.with_alpha(opacity)))
	}
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self::sidequest()
	}
}

/// Connection opacity: `peak` at distance 0, falling linearly to 0 at `max_distance`.
pub fn link_opacity(distance: f64, max_distance: f64, peak: f64) -> f64 {
	if distance >= max_distance {
		0.0
	} else {
		peak * (1.0 - distance / max_distance)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_css_formats() {
		assert_eq!(Color::rgba(139, 92, 246, 0.15).to_css(), "rgba(139, 92, 246, 0.15)");
		assert_eq!(Hsla::new(270.0, 80.0, 60.0, 0.5).to_css(), "hsla(270, 80%, 60%, 0.5)");
	}

	#[test]
	fn test_particle_paint_hue_offset_wraps() {
		let style = FieldStyle::sidequest();
		let Paint::Hsla(first) = style.particle_paint(270.0, 0, 1.0) else {
			panic!("expected hsla");
		};
		let Paint::Hsla(later) = style.particle_paint(270.0, 130, 1.0) else {
			panic!("expected hsla");
		};
		assert_eq!(first.h, 270.0);
		// 130 * 0.5 = 65, wraps to 5
		assert!((later.h - 275.0).abs() < 1e-9);
		assert_eq!((later.s, later.l), (80.0, 60.0));
	}

	#[test]
	fn test_particle_alpha_grows_with_size() {
		let style = FieldStyle::sidequest();
		let small = style.particle_paint(0.0, 0, 1.0).alpha();
		let large = style.particle_paint(0.0, 0, 4.0).alpha();
		assert!((small - 0.4).abs() < 1e-9);
		assert!((large - 0.7).abs() < 1e-9);
	}

	#[test]
	fn test_link_opacity_monotonic_and_zero_at_cutoff() {
		let mut previous = f64::INFINITY;
		for step in 0..100 {
			let opacity = link_opacity(step as f64, 100.0, 0.15);
			assert!(opacity < previous);
			assert!(opacity > 0.0);
			previous = opacity;
		}
		assert!((link_opacity(0.0, 100.0, 0.15) - 0.15).abs() < 1e-12);
		assert_eq!(link_opacity(100.0, 100.0, 0.15), 0.0);
		assert_eq!(link_opacity(250.0, 100.0, 0.15), 0.0);
	}

	#[test]
	fn test_link_paint() {
		let style = FieldStyle::sidequest();
		assert!(style.link_paint(100.0, 100.0).is_none());
		let paint = style.link_paint(50.0, 100.0).unwrap();
		assert_eq!(paint, Paint::Rgba(Color::rgba(139, 92, 246, 0.075)));
	}

	#[test]
	fn test_by_name() {
		assert_eq!(FieldStyle::by_name("ember").unwrap().name, "ember");
		assert_eq!(FieldStyle::by_name("mono").unwrap().saturation, 0.0);
		assert!(FieldStyle::by_name("neon").is_none());
		assert_eq!(FieldStyle::default(), FieldStyle::sidequest());
	}
}
