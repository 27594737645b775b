use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque RGB triplet. Hosts usually pass these as `"r, g, b"` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RgbRepr", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Accent cyan used for particles and pair connections.
    pub const CYAN: Rgb = Rgb::new(0, 240, 255);
    /// Magenta used for particle-to-pointer links.
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 170);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha value, clamped to [0, 1].
    pub fn with_alpha(self, alpha: f32) -> Color {
        Color {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Error returned when an `"r, g, b"` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRgbError(String);

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rgb triplet: {:?}", self.0)
    }
}

impl std::error::Error for ParseRgbError {}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError(s.to_string());
        let mut parts = s.split(',').map(|p| p.trim().parse::<u8>());
        let mut next = || parts.next().ok_or_else(err)?.map_err(|_| err());
        let rgb = Rgb::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(rgb)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RgbRepr {
    Triplet([u8; 3]),
    Css(String),
}

impl TryFrom<RgbRepr> for Rgb {
    type Error = ParseRgbError;

    fn try_from(repr: RgbRepr) -> Result<Self, Self::Error> {
        match repr {
            RgbRepr::Triplet([r, g, b]) => Ok(Rgb::new(r, g, b)),
            RgbRepr::Css(s) => s.parse(),
        }
    }
}

/// An RGB color with alpha, as handed to a [`Surface`](crate::Surface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Color {
    /// CSS color string, e.g. `rgba(0, 240, 255, 0.5)`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Logical drawing-surface size plus the device pixel ratio.
///
/// Simulation runs in logical (CSS) pixels; the backing store is
/// `logical × device_pixel_ratio` so strokes stay crisp on dense displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            device_pixel_ratio,
        }
    }

    /// DPR with nonsense values (zero, negative, NaN) treated as 1.
    pub fn scale(&self) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    pub fn backing_width(&self) -> u32 {
        (self.width * self.scale()).round() as u32
    }

    pub fn backing_height(&self) -> u32 {
        (self.height * self.scale()).round() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Platform accessibility preference for animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    /// Animate every display refresh.
    #[default]
    Full,
    /// Draw one static frame and never schedule another.
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Self::Reduced
        } else {
            Self::Full
        }
    }
}

/// Counters for a single drawn frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles_drawn: usize,
    /// Pairwise distance checks performed (always N×(N−1)/2).
    pub pairs_checked: usize,
    pub connections_drawn: usize,
    pub pointer_links_drawn: usize,
}
