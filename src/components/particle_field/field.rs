//! Particle field state.
//!
//! Owns the particle set, pointer state and ambient hue. The host drives it by
//! calling [`ParticleField::advance_frame`] once per display refresh; the field
//! never schedules itself. Resize notifications are queued and applied at the
//! start of the next frame so regeneration never interleaves with an update.

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::particles::Particle;
use super::render;
use super::surface::DrawSurface;
use super::theme::FieldStyle;
use super::types::{FieldConfig, Pointer};

/// Elastically anchored particles reacting to the pointer.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	pointer: Pointer,
	hue: f64,
	width: f64,
	height: f64,
	config: FieldConfig,
	style: FieldStyle,
	pending_resize: Option<(f64, f64)>,
	/// Extent last pushed to the surface, `None` until the first frame.
	surface_size: Option<(f64, f64)>,
	rng: SmallRng,
}

impl ParticleField {
	/// Field over `width` x `height` with an entropy-seeded RNG.
	pub fn new(config: FieldConfig, width: f64, height: f64) -> Self {
		Self::with_rng(config, width, height, SmallRng::from_entropy())
	}

	/// Deterministic field for headless use.
	pub fn with_seed(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
		Self::with_rng(config, width, height, SmallRng::seed_from_u64(seed))
	}

	fn with_rng(config: FieldConfig, width: f64, height: f64, rng: SmallRng) -> Self {
		let config = config.sanitized();
		let style = FieldStyle::by_name(&config.theme).unwrap_or_else(|| {
			warn!("sidequest-fx: unknown theme {:?}, using default", config.theme);
			FieldStyle::default()
		});

		let mut field = Self {
			particles: Vec::new(),
			pointer: Pointer::new(config.interaction_radius),
			hue: config.hue_start,
			width: 0.0,
			height: 0.0,
			config,
			style,
			pending_resize: None,
			surface_size: None,
			rng,
		};
		field.resize(width, height);
		field
	}

	/// Adopt a new extent and regenerate every particle.
	pub fn resize(&mut self, width: f64, height: f64) {
		let (width, height) = (sanitize_extent(width), sanitize_extent(height));
		self.width = width;
		self.height = height;

		let count = self.config.particle_count(width, height);
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let p = Particle::spawn(&mut self.rng, &self.config, width, height);
			self.particles.push(p);
		}
		debug!("sidequest-fx: regenerated {count} particles for {width}x{height}");
	}

	/// Record a resize to apply at the start of the next frame. Later calls
	/// before that frame replace earlier ones.
	pub fn queue_resize(&mut self, width: f64, height: f64) {
		self.pending_resize = Some((width, height));
	}

	/// Record the pointer position in surface coordinates.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer.position = Some((x, y));
	}

	/// Forget the pointer; particles relax to their anchors.
	pub fn pointer_left(&mut self) {
		self.pointer.position = None;
	}

	/// Advance hue and particle motion by one frame without drawing.
	pub fn step(&mut self) {
		self.hue += self.config.hue_step;
		if self.hue > 360.0 {
			self.hue = 0.0;
		}

		let (width, height) = (self.width, self.height);
		let pointer = self.pointer.position;
		let radius = self.pointer.radius;
		let (elasticity, anchor_drift) = (self.config.elasticity, self.config.anchor_drift);

		for p in &mut self.particles {
			if let Some((px, py)) = pointer {
				let (dx, dy) = p.repulsion(px, py, radius);
				p.x += dx;
				p.y += dy;
			}
			p.restore(elasticity);
			p.drift(anchor_drift);
			p.wrap_anchor(width, height);
		}
	}

	/// Run one complete frame against `surface`: pending resize, surface sizing,
	/// physics, then drawing.
	pub fn advance_frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
		if let Some((width, height)) = self.pending_resize.take() {
			self.resize(width, height);
		}
		let extent = (self.width, self.height);
		if self.surface_size != Some(extent) {
			surface.set_size(extent.0, extent.1);
			self.surface_size = Some(extent);
		}

		self.step();
		render::render(self, surface);
	}

	/// Particles in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Current pointer state.
	pub fn pointer(&self) -> &Pointer {
		&self.pointer
	}

	/// Ambient hue in degrees.
	pub fn hue(&self) -> f64 {
		self.hue
	}

	/// Field extent as `(width, height)`.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Sanitized configuration in effect.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Resolved visual style.
	pub fn style(&self) -> &FieldStyle {
		&self.style
	}
}

fn sanitize_extent(value: f64) -> f64 {
	if value.is_finite() { value.max(0.0) } else { 0.0 }
}
