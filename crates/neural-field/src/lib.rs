pub mod api;
pub mod core;
pub mod renderer;
pub mod runtime;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{FieldConfig, MAX_PARTICLES};
pub use api::types::{Color, FrameStats, MotionPreference, ParseRgbError, Rgb, SurfaceSize};
pub use crate::core::field::ParticleField;
pub use crate::core::particle::Particle;
pub use crate::core::pointer::PointerState;
pub use crate::core::rng::Rng;
pub use renderer::draw_list::{DrawCommand, DrawList};
pub use renderer::traits::Surface;
pub use runtime::animation::{FieldAnimation, DEFAULT_SEED};
pub use runtime::scheduler::{FrameCallback, FrameId, FrameScheduler, ManualScheduler};
pub use systems::connections::{connection_opacity, pair_count, pointer_link_opacity};
pub use systems::render::draw_frame;
