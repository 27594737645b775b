use gloo::render::{request_animation_frame, AnimationFrame};
use neural_field::{FrameCallback, FrameScheduler};

/// Schedules frames with `requestAnimationFrame`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    /// Dropping the handle cancels the frame.
    type Handle = AnimationFrame;

    fn request_frame(&mut self, callback: FrameCallback) -> AnimationFrame {
        request_animation_frame(move |_timestamp| callback())
    }

    fn cancel_frame(&mut self, handle: AnimationFrame) {
        drop(handle);
    }
}
