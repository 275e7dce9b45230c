//! Pointer-reactive ambient particle field.
//!
//! Renders elastically anchored particles on an HTML canvas with:
//! - Anchors that wander slowly and wrap around the viewport edges
//! - Repulsion from the pointer within a fixed radius
//! - Faint connecting lines between nearby particles
//! - A slowly cycling hue band
//!
//! The simulation ([`ParticleField`]) has no knowledge of the browser. It draws
//! through a [`DrawSurface`] and is fed by an [`EventSource`], so it runs
//! headless under test.
//!
//! # Example
//!
//! ```ignore
//! use sidequest_fx::{FieldConfig, ParticleFieldCanvas};
//!
//! let config = FieldConfig { theme: "ember".into(), ..Default::default() };
//! view! { <ParticleFieldCanvas config=config /> }
//! ```

mod component;
mod field;
pub mod host;
mod particles;
mod render;
pub mod surface;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use field::ParticleField;
pub use host::{EventSource, FrameLoop};
pub use particles::Particle;
pub use surface::DrawSurface;
pub use theme::FieldStyle;
pub use types::{FieldConfig, Pointer, Range};
