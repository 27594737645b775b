//! Proximity links between particles, and between particles and the pointer.

/// Peak opacity of a particle-to-particle connection.
pub const CONNECTION_MAX_OPACITY: f32 = 0.3;
/// Peak opacity of a particle-to-pointer link.
pub const POINTER_LINK_MAX_OPACITY: f32 = 0.5;
/// Pointer links reach this multiple of the connection distance.
pub const POINTER_LINK_REACH: f32 = 1.5;
/// Stroke width of every link, in logical pixels.
pub const LINE_WIDTH: f32 = 1.0;

/// Linear falloff: `peak` at distance 0, 0 at `reach`. `None` at or beyond `reach`.
pub fn fade(distance: f32, reach: f32, peak: f32) -> Option<f32> {
    if reach.is_nan() || reach <= 0.0 || distance.is_nan() || distance >= reach {
        return None;
    }
    Some(((1.0 - distance / reach) * peak).clamp(0.0, peak))
}

/// Opacity of a line between two particles `distance` apart.
pub fn connection_opacity(distance: f32, threshold: f32) -> Option<f32> {
    fade(distance, threshold, CONNECTION_MAX_OPACITY)
}

/// Opacity of a line between a particle and the pointer.
pub fn pointer_link_opacity(distance: f32, threshold: f32) -> Option<f32> {
    fade(distance, threshold * POINTER_LINK_REACH, POINTER_LINK_MAX_OPACITY)
}

/// Number of unordered pairs among `n` particles.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
