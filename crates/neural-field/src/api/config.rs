use serde::{Deserialize, Serialize};

use super::types::Rgb;

/// Upper bound on `particle_count`. The pair pass is O(n²) per frame.
pub const MAX_PARTICLES: usize = 2000;

/// Tunables for the particle field. Every field is optional in JSON.
///
/// Keys are camelCase so the host can pass its component props through as-is:
///
/// ```json
/// { "particleCount": 60, "lineColor": "0, 240, 255", "mouseInfluence": 120 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Number of particles generated per surface size (default: 80).
    pub particle_count: usize,
    /// Pair connection threshold in logical pixels (default: 150).
    pub connection_distance: f32,
    /// Pointer influence radius in logical pixels (default: 100).
    #[serde(alias = "pointerInfluence")]
    pub mouse_influence: f32,
    pub particle_color: Rgb,
    pub line_color: Rgb,
    pub pointer_line_color: Rgb,
    /// RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 80,
            connection_distance: 150.0,
            mouse_influence: 100.0,
            particle_color: Rgb::CYAN,
            line_color: Rgb::CYAN,
            pointer_line_color: Rgb::MAGENTA,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON string. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    // -- Builder pattern --

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_connection_distance(mut self, distance: f32) -> Self {
        self.connection_distance = distance;
        self
    }

    pub fn with_mouse_influence(mut self, radius: f32) -> Self {
        self.mouse_influence = radius;
        self
    }

    pub fn with_particle_color(mut self, color: Rgb) -> Self {
        self.particle_color = color;
        self
    }

    pub fn with_line_color(mut self, color: Rgb) -> Self {
        self.line_color = color;
        self
    }

    pub fn with_pointer_line_color(mut self, color: Rgb) -> Self {
        self.pointer_line_color = color;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace negative or non-finite distances with their defaults and cap
    /// the particle count at [`MAX_PARTICLES`].
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.particle_count > MAX_PARTICLES {
            log::warn!(
                "particle count {} is too large, using {}",
                self.particle_count,
                MAX_PARTICLES
            );
            self.particle_count = MAX_PARTICLES;
        }
        if !valid_distance(self.connection_distance) {
            log::warn!(
                "connection distance {} is invalid, using {}",
                self.connection_distance,
                defaults.connection_distance
            );
            self.connection_distance = defaults.connection_distance;
        }
        if !valid_distance(self.mouse_influence) {
            log::warn!(
                "mouse influence {} is invalid, using {}",
                self.mouse_influence,
                defaults.mouse_influence
            );
            self.mouse_influence = defaults.mouse_influence;
        }
        self
    }
}

fn valid_distance(d: f32) -> bool {
    d.is_finite() && d >= 0.0
}
