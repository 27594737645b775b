use glam::Vec2;

/// Last known pointer location relative to the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PointerState {
    /// Pointer left the surface or never entered it. Exerts no pull.
    #[default]
    Absent,
    /// Pointer at surface-relative logical coordinates.
    At(Vec2),
}

impl PointerState {
    pub fn position(&self) -> Option<Vec2> {
        match self {
            Self::Absent => None,
            Self::At(p) => Some(*p),
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        *self = if x.is_finite() && y.is_finite() {
            Self::At(Vec2::new(x, y))
        } else {
            Self::Absent
        };
    }

    pub fn leave(&mut self) {
        *self = Self::Absent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_and_leave() {
        let mut p = PointerState::default();
        assert_eq!(p.position(), None);
        p.move_to(3.0, 4.0);
        assert_eq!(p.position(), Some(Vec2::new(3.0, 4.0)));
        p.leave();
        assert_eq!(p, PointerState::Absent);
    }

    #[test]
    fn non_finite_coordinates_are_absent() {
        let mut p = PointerState::At(Vec2::ZERO);
        p.move_to(f32::NAN, 1.0);
        assert_eq!(p.position(), None);
    }
}
