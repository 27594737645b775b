use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::api::config::FieldConfig;
use crate::api::types::{FrameStats, MotionPreference};
use crate::core::field::ParticleField;
use crate::core::pointer::PointerState;
use crate::renderer::traits::Surface;
use crate::runtime::scheduler::FrameScheduler;
use crate::systems::render::draw_frame;

/// Seed used when the config does not carry one.
pub const DEFAULT_SEED: u64 = 42;

/// A running (or stoppable) particle background.
///
/// All mutable state lives behind this handle: particles, pointer, pending
/// frame. The host calls `start`/`stop`/`resize`/`on_pointer_*` from its own
/// lifecycle events; frames are driven by the injected [`FrameScheduler`].
/// Dropping the handle stops the animation.
pub struct FieldAnimation<S, F>
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    state: Rc<RefCell<AnimationState<S, F>>>,
}

struct AnimationState<S, F: FrameScheduler> {
    config: FieldConfig,
    field: ParticleField,
    pointer: PointerState,
    surface: S,
    scheduler: F,
    motion: MotionPreference,
    /// Latest requested size not yet applied to the field.
    pending_size: Option<(f32, f32)>,
    pending_frame: Option<F::Handle>,
    running: bool,
    /// Bumped on every stop, so callbacks from an earlier run do nothing.
    generation: u64,
    frames_rendered: u64,
    last_stats: Option<FrameStats>,
}

impl<S, F> FieldAnimation<S, F>
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    pub fn new(config: FieldConfig, surface: S, scheduler: F, motion: MotionPreference) -> Self {
        let config = config.sanitized();
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let state = AnimationState {
            field: ParticleField::new(seed),
            config,
            pointer: PointerState::Absent,
            surface,
            scheduler,
            motion,
            pending_size: None,
            pending_frame: None,
            running: false,
            generation: 0,
            frames_rendered: 0,
            last_stats: None,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Draw the first frame now. With full motion, keep animating every frame
    /// until [`stop`](Self::stop); with reduced motion, that frame is the only one.
    pub fn start(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.running {
                return;
            }
            state.running = true;
            state.render();
            if state.motion == MotionPreference::Reduced {
                log::debug!("reduced motion: drew a single static frame");
                return;
            }
        }
        schedule_next(&self.state);
    }

    /// Cancel the pending frame. A frame callback already dispatched by the
    /// host finds the animation stopped and returns without drawing.
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        if !state.running {
            return;
        }
        state.running = false;
        state.generation += 1;
        if let Some(handle) = state.pending_frame.take() {
            state.scheduler.cancel_frame(handle);
        }
        log::debug!("animation stopped after {} frames", state.frames_rendered);
    }

    /// Record a new logical surface size. The particle set is rebuilt from
    /// scratch. While animating, only the latest size before the next frame
    /// is applied, so a burst of resize events regenerates once.
    pub fn resize(&self, width: f32, height: f32) {
        let mut state = self.state.borrow_mut();
        state.pending_size = Some((width, height));
        let idle = state.pending_frame.is_none();
        if state.running && idle {
            // Resizing a canvas wipes it; nothing else will repaint.
            state.render();
        }
    }

    pub fn on_pointer_move(&self, x: f32, y: f32) {
        self.state.borrow_mut().pointer.move_to(x, y);
    }

    pub fn on_pointer_leave(&self) {
        self.state.borrow_mut().pointer.leave();
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    pub fn motion(&self) -> MotionPreference {
        self.state.borrow().motion
    }

    /// Frames actually drawn (skipped no-op frames are not counted).
    pub fn frames_rendered(&self) -> u64 {
        self.state.borrow().frames_rendered
    }

    pub fn last_stats(&self) -> Option<FrameStats> {
        self.state.borrow().last_stats
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().field.len()
    }

    /// Size of the current particle set (not counting a pending resize).
    pub fn size(&self) -> (f32, f32) {
        let state = self.state.borrow();
        (state.field.width(), state.field.height())
    }

    pub fn pointer(&self) -> PointerState {
        self.state.borrow().pointer
    }
}

impl<S, F> Drop for FieldAnimation<S, F>
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: Surface, F: FrameScheduler> AnimationState<S, F> {
    /// Apply any pending resize, then draw one frame.
    fn render(&mut self) {
        if let Some((width, height)) = self.pending_size.take() {
            self.field.regenerate(width, height, self.config.particle_count);
        }
        let stats = draw_frame(&mut self.field, &self.pointer, &self.config, &mut self.surface);
        if stats.is_some() {
            self.frames_rendered += 1;
            self.last_stats = stats;
        }
    }
}

fn schedule_next<S, F>(cell: &Rc<RefCell<AnimationState<S, F>>>)
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    let weak = Rc::downgrade(cell);
    let mut state = cell.borrow_mut();
    let generation = state.generation;
    let handle = state
        .scheduler
        .request_frame(Box::new(move || on_frame(&weak, generation)));
    state.pending_frame = Some(handle);
}

fn on_frame<S, F>(weak: &Weak<RefCell<AnimationState<S, F>>>, generation: u64)
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    let Some(cell) = weak.upgrade() else {
        return;
    };
    {
        let mut state = cell.borrow_mut();
        if !state.running || state.generation != generation {
            return;
        }
        // This frame has fired; its handle is spent.
        state.pending_frame = None;
        state.render();
    }
    schedule_next(&cell);
}
