//! Tunable parameters and pointer state for the particle field.

use log::warn;
use serde::Deserialize;

/// Half-open `[min, max)` sampling range.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
	/// Inclusive lower bound.
	pub min: f64,
	/// Exclusive upper bound.
	pub max: f64,
}

impl Range {
	/// Range covering `[min, max)`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Whether the range can be sampled: `min < max` and a finite width.
	pub fn is_valid(&self) -> bool {
		self.min < self.max && (self.max - self.min).is_finite()
	}

	/// Whether `value` lies in `[min, max)`.
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value < self.max
	}
}

/// Smallest accepted `area_per_particle` (px²).
pub const MIN_AREA_PER_PARTICLE: f64 = 1.0;

/// Upper bound on the particle count regardless of surface size. Keeps the
/// quadratic connection pass bounded for absurd extents.
pub const MAX_PARTICLES: usize = 10_000;

/// Field parameters. Every field is optional when deserializing; missing
/// values take the defaults below.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Surface area (px²) per particle. Count is `floor(w * h / area_per_particle)`.
	pub area_per_particle: f64,
	/// Pointer repulsion radius in pixels.
	pub interaction_radius: f64,
	/// Maximum distance at which two particles are connected by a line.
	pub link_distance: f64,
	/// Fraction of the remaining distance to the anchor covered each frame.
	pub elasticity: f64,
	/// Anchor drift as a fraction of the particle's drift velocity.
	pub anchor_drift: f64,
	/// Initial ambient hue in degrees.
	pub hue_start: f64,
	/// Hue advance per frame in degrees.
	pub hue_step: f64,
	/// Particle radius range.
	pub size_range: Range,
	/// Drift velocity is sampled from `[-drift_speed, drift_speed)` per axis.
	pub drift_speed: f64,
	/// Repulsion multiplier range.
	pub density_range: Range,
	/// Name of the [`FieldStyle`](super::theme::FieldStyle) preset.
	pub theme: String,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			area_per_particle: 12_000.0,
			interaction_radius: 150.0,
			link_distance: 100.0,
			elasticity: 0.02,
			anchor_drift: 0.1,
			hue_start: 270.0,
			hue_step: 0.1,
			size_range: Range::new(1.0, 4.0),
			drift_speed: 0.25,
			density_range: Range::new(1.0, 31.0),
			theme: "sidequest".to_string(),
		}
	}
}

impl FieldConfig {
	/// Replace unusable values with defaults.
	///
	/// Magnitudes that divide or bound something (area, radii, distances) must be
	/// finite and positive; rates must be finite and non-negative; ranges must
	/// be non-empty. Each replacement is logged.
	pub fn sanitized(self) -> Self {
		let defaults = Self::default();

		fn at_least(name: &str, value: f64, min: f64, fallback: f64) -> f64 {
			if value.is_finite() && value >= min {
				value
			} else {
				warn!("sidequest-fx: {name} = {value} is below {min}, using {fallback}");
				fallback
			}
		}
		fn positive(name: &str, value: f64, fallback: f64) -> f64 {
			if value.is_finite() && value > 0.0 {
				value
			} else {
				warn!("sidequest-fx: {name} = {value} is not positive, using {fallback}");
				fallback
			}
		}
		fn non_negative(name: &str, value: f64, fallback: f64) -> f64 {
			if value.is_finite() && value >= 0.0 {
				value
			} else {
				warn!("sidequest-fx: {name} = {value} is negative or not finite, using {fallback}");
				fallback
			}
		}
		fn range(name: &str, value: Range, fallback: Range) -> Range {
			if value.is_valid() {
				value
			} else {
				warn!(
					"sidequest-fx: {name} = [{}, {}) is empty, using [{}, {})",
					value.min, value.max, fallback.min, fallback.max
				);
				fallback
			}
		}

		Self {
			area_per_particle: at_least(
				"area_per_particle",
				self.area_per_particle,
				MIN_AREA_PER_PARTICLE,
				defaults.area_per_particle,
			),
			interaction_radius: positive(
				"interaction_radius",
				self.interaction_radius,
				defaults.interaction_radius,
			),
			link_distance: positive("link_distance", self.link_distance, defaults.link_distance),
			elasticity: non_negative("elasticity", self.elasticity, defaults.elasticity),
			anchor_drift: non_negative("anchor_drift", self.anchor_drift, defaults.anchor_drift),
			hue_start: if self.hue_start.is_finite() {
				self.hue_start.rem_euclid(360.0)
			} else {
				defaults.hue_start
			},
			hue_step: non_negative("hue_step", self.hue_step, defaults.hue_step),
			size_range: range("size_range", self.size_range, defaults.size_range),
			drift_speed: if (self.drift_speed * 2.0).is_finite() {
				non_negative("drift_speed", self.drift_speed, defaults.drift_speed)
			} else {
				warn!(
					"sidequest-fx: drift_speed = {} is too large, using {}",
					self.drift_speed, defaults.drift_speed
				);
				defaults.drift_speed
			},
			density_range: range("density_range", self.density_range, defaults.density_range),
			theme: self.theme,
		}
	}

	/// Number of particles for a surface of the given extent, capped at
	/// [`MAX_PARTICLES`].
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		let area = width.max(0.0) * height.max(0.0);
		if !area.is_finite() || self.area_per_particle.is_nan() || self.area_per_particle <= 0.0 {
			return 0;
		}
		let count = (area / self.area_per_particle).floor();
		if count >= MAX_PARTICLES as f64 {
			MAX_PARTICLES
		} else {
			count as usize
		}
	}
}

/// Last known pointer position and the radius it repels within.
#[derive(Clone, Debug, PartialEq)]
pub struct Pointer {
	/// `None` once the pointer has left the surface.
	pub position: Option<(f64, f64)>,
	/// Repulsion radius in pixels.
	pub radius: f64,
}

impl Pointer {
	/// Pointer with no known position.
	pub fn new(radius: f64) -> Self {
		Self {
			position: None,
			radius,
		}
	}
}
