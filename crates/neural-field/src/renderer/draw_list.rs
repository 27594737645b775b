use glam::Vec2;

use super::traits::Surface;
use crate::api::types::Color;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Circle { center: Vec2, radius: f32, color: Color },
    Line { from: Vec2, to: Vec2, width: f32, color: Color },
}

/// A [`Surface`] that records every call instead of rasterizing.
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    ready: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(4096),
            ready: true,
        }
    }

    /// A list that reports itself unusable, like a canvas without a context.
    pub fn unavailable() -> Self {
        Self {
            commands: Vec::new(),
            ready: false,
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of `Clear` commands, i.e. frames drawn.
    pub fn frame_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DrawList {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::api::types::Rgb;

    #[test]
    fn records_in_order() {
        let mut list = DrawList::new();
        let c = Rgb::CYAN.with_alpha(1.0);
        list.clear(10.0, 10.0);
        list.fill_circle(Vec2::ONE, 2.0, c);
        list.stroke_line(Vec2::ZERO, Vec2::ONE, 1.0, c);
        assert_eq!(list.len(), 3);
        assert_eq!(list.frame_count(), 1);
        assert_eq!(list.circles().count(), 1);
        assert_eq!(list.lines().count(), 1);
        assert_eq!(list.commands()[0], DrawCommand::Clear { width: 10.0, height: 10.0 });
    }

    #[test]
    fn shared_list_records_through_rc() {
        let shared = Rc::new(RefCell::new(DrawList::new()));
        let mut handle = shared.clone();
        handle.clear(1.0, 1.0);
        assert_eq!(shared.borrow().frame_count(), 1);
    }

    #[test]
    fn unavailable_list_is_not_ready() {
        let shared = Rc::new(RefCell::new(DrawList::unavailable()));
        assert!(!shared.is_ready());
        shared.borrow_mut().set_ready(true);
        assert!(shared.is_ready());
    }
}
