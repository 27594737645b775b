//! Drawing surface contract.
//!
//! The field never touches a platform API directly. Hosts implement [`Surface`]
//! over whatever 2D target they have (an HTML canvas, a pixel buffer, a
//! recording list for tests).

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::api::types::Color;

/// A 2D target in logical pixels.
pub trait Surface {
    /// Whether the target can be drawn on right now. A surface that is not
    /// ready makes the frame a silent no-op.
    fn is_ready(&self) -> bool {
        true
    }

    /// Erase the `width × height` logical area.
    fn clear(&mut self, width: f32, height: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn clear(&mut self, width: f32, height: f32) {
        (**self).clear(width, height)
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        (**self).fill_circle(center, radius, color)
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        (**self).stroke_line(from, to, width, color)
    }
}

/// Shared surfaces let a host keep inspecting what the animation drew.
impl<S: Surface + ?Sized> Surface for Rc<RefCell<S>> {
    fn is_ready(&self) -> bool {
        self.borrow().is_ready()
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.borrow_mut().clear(width, height)
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.borrow_mut().fill_circle(center, radius, color)
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.borrow_mut().stroke_line(from, to, width, color)
    }
}
