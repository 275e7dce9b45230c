//! Elastically anchored particles and their per-frame motion.

use rand::Rng;

use super::types::{FieldConfig, Range};

/// A single particle. `x`/`y` chase the anchor (`base_x`/`base_y`), which
/// itself wanders slowly and wraps around the surface edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Anchor x the position relaxes toward.
	pub base_x: f64,
	/// Anchor y.
	pub base_y: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Horizontal drift per frame.
	pub speed_x: f64,
	/// Vertical drift per frame.
	pub speed_y: f64,
	/// Scales pointer repulsion. Higher density is pushed further.
	pub density: f64,
}

fn sample<R: Rng>(rng: &mut R, range: Range) -> f64 {
	if range.is_valid() {
		rng.gen_range(range.min..range.max)
	} else {
		range.min
	}
}

impl Particle {
	/// A particle at rest on its anchor, placed uniformly over `width` x `height`.
	pub fn spawn<R: Rng>(rng: &mut R, config: &FieldConfig, width: f64, height: f64) -> Self {
		let size = sample(rng, config.size_range);
		let x = sample(rng, Range::new(0.0, width));
		let y = sample(rng, Range::new(0.0, height));
		let drift = Range::new(-config.drift_speed, config.drift_speed);
		let speed_x = sample(rng, drift);
		let speed_y = sample(rng, drift);

		Self {
			x,
			y,
			base_x: x,
			base_y: y,
			size,
			speed_x,
			speed_y,
			density: sample(rng, config.density_range),
		}
	}

	/// Displacement pushing the particle away from a pointer at (`px`, `py`).
	///
	/// Zero at or beyond `radius` and when the particle sits exactly on the
	/// pointer (no direction to push along).
	pub fn repulsion(&self, px: f64, py: f64, radius: f64) -> (f64, f64) {
		let (dx, dy) = (px - self.x, py - self.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance >= radius || distance == 0.0 || !distance.is_finite() {
			return (0.0, 0.0);
		}

		let force = (radius - distance) / radius;
		(
			-(dx / distance) * force * self.density,
			-(dy / distance) * force * self.density,
		)
	}

	/// Move `elasticity` of the remaining way back toward the anchor.
	pub fn restore(&mut self, elasticity: f64) {
		self.x += (self.base_x - self.x) * elasticity;
		self.y += (self.base_y - self.y) * elasticity;
	}

	/// Ambient wander. The anchor moves at `anchor_drift` of the particle's speed.
	pub fn drift(&mut self, anchor_drift: f64) {
		self.x += self.speed_x;
		self.y += self.speed_y;
		self.base_x += self.speed_x * anchor_drift;
		self.base_y += self.speed_y * anchor_drift;
	}

	/// Wrap the anchor to the opposite edge once it leaves `[0, width] x [0, height]`.
	/// The position is left alone and follows elastically.
	pub fn wrap_anchor(&mut self, width: f64, height: f64) {
		if self.base_x < 0.0 {
			self.base_x = width;
		} else if self.base_x > width {
			self.base_x = 0.0;
		}
		if self.base_y < 0.0 {
			self.base_y = height;
		} else if self.base_y > height {
			self.base_y = 0.0;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			base_x: x,
			base_y: y,
			size: 2.0,
			speed_x: 0.0,
			speed_y: 0.0,
			density: 10.0,
		}
	}

	#[test]
	fn test_spawn_ranges() {
		let config = FieldConfig::default();
		let mut rng = SmallRng::seed_from_u64(7);
		for _ in 0..1000 {
			let p = Particle::spawn(&mut rng, &config, 1200.0, 800.0);
			assert!(config.size_range.contains(p.size));
			assert!(config.density_range.contains(p.density));
			assert!((-0.25..0.25).contains(&p.speed_x));
			assert!((-0.25..0.25).contains(&p.speed_y));
			assert!((0.0..1200.0).contains(&p.x));
			assert!((0.0..800.0).contains(&p.y));
			assert_eq!((p.base_x, p.base_y), (p.x, p.y));
		}
	}

	#[test]
	fn test_spawn_with_zero_drift() {
		let config = FieldConfig {
			drift_speed: 0.0,
			..FieldConfig::default()
		};
		let mut rng = SmallRng::seed_from_u64(1);
		let p = Particle::spawn(&mut rng, &config, 100.0, 100.0);
		assert_eq!((p.speed_x, p.speed_y), (0.0, 0.0));
	}

	#[test]
	fn test_repulsion_points_away_from_pointer() {
		let p = at(100.0, 100.0);
		let (dx, dy) = p.repulsion(150.0, 100.0, 150.0);
		// distance 50: force = 100/150, pushed toward -x
		assert!((dx + (100.0 / 150.0) * 10.0).abs() < 1e-9);
		assert_eq!(dy, 0.0);
	}

	#[test]
	fn test_repulsion_boundary_is_exclusive() {
		let p = at(0.0, 0.0);
		assert_eq!(p.repulsion(150.0, 0.0, 150.0), (0.0, 0.0));
		assert_eq!(p.repulsion(90.0, 120.0, 150.0), (0.0, 0.0));
		assert_ne!(p.repulsion(149.0, 0.0, 150.0), (0.0, 0.0));
	}

	#[test]
	fn test_repulsion_on_pointer_is_zero_not_nan() {
		let p = at(42.0, 17.0);
		let (dx, dy) = p.repulsion(42.0, 17.0, 150.0);
		assert_eq!((dx, dy), (0.0, 0.0));
	}

	#[test]
	fn test_restore_fixed_point() {
		let mut p = at(30.0, 40.0);
		p.restore(0.02);
		assert_eq!((p.x, p.y), (30.0, 40.0));
	}

	#[test]
	fn test_restore_moves_two_percent() {
		let mut p = at(0.0, 0.0);
		p.base_x = 100.0;
		p.base_y = -50.0;
		p.restore(0.02);
		assert!((p.x - 2.0).abs() < 1e-12);
		assert!((p.y + 1.0).abs() < 1e-12);
	}

	#[test]
	fn test_anchor_drifts_slower() {
		let mut p = at(10.0, 10.0);
		p.speed_x = 0.2;
		p.speed_y = -0.1;
		p.drift(0.1);
		assert!((p.x - 10.2).abs() < 1e-12);
		assert!((p.y - 9.9).abs() < 1e-12);
		assert!((p.base_x - 10.02).abs() < 1e-12);
		assert!((p.base_y - 9.99).abs() < 1e-12);
	}

	#[test]
	fn test_wrap_anchor_edges() {
		let mut p = at(0.0, 0.0);
		p.base_x = 1201.0;
		p.base_y = -1.0;
		p.x = 1199.0;
		p.wrap_anchor(1200.0, 800.0);
		assert_eq!(p.base_x, 0.0);
		assert_eq!(p.base_y, 800.0);
		// position is not wrapped
		assert_eq!(p.x, 1199.0);

		p.base_x = -1.0;
		p.base_y = 801.0;
		p.wrap_anchor(1200.0, 800.0);
		assert_eq!(p.base_x, 1200.0);
		assert_eq!(p.base_y, 0.0);
	}

	#[test]
	fn test_wrap_anchor_keeps_edges_inclusive() {
		let mut p = at(0.0, 0.0);
		p.base_x = 1200.0;
		p.base_y = 0.0;
		p.wrap_anchor(1200.0, 800.0);
		assert_eq!((p.base_x, p.base_y), (1200.0, 0.0));
	}
}
