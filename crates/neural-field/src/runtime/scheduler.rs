//! Per-frame callback scheduling.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A one-shot frame callback.
pub type FrameCallback = Box<dyn FnOnce() + 'static>;

/// Something that runs a callback roughly once per display refresh.
///
/// Implementations must never invoke the callback from inside
/// `request_frame`; frame N+1 is only requested while frame N is running.
pub trait FrameScheduler {
    /// Token returned for a scheduled frame, used to cancel it.
    type Handle;

    fn request_frame(&mut self, callback: FrameCallback) -> Self::Handle;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Identifies a frame queued on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

#[derive(Default)]
struct Queue {
    next_id: u64,
    pending: VecDeque<(FrameId, FrameCallback)>,
}

/// A queue-backed scheduler driven by hand.
///
/// Clones share the same queue, so a host (or test) can keep one clone and
/// pump frames synchronously with [`run_pending`](Self::run_pending).
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Run every frame queued right now. Frames requested by those callbacks
    /// wait for the next call. Returns how many callbacks ran.
    pub fn run_pending(&self) -> usize {
        let batch = std::mem::take(&mut self.queue.borrow_mut().pending);
        let count = batch.len();
        for (_, callback) in batch {
            callback();
        }
        count
    }

    /// Run up to `frames` rounds of [`run_pending`](Self::run_pending).
    /// Stops early once nothing is queued. Returns total callbacks run.
    pub fn run_frames(&self, frames: usize) -> usize {
        let mut total = 0;
        for _ in 0..frames {
            let ran = self.run_pending();
            if ran == 0 {
                break;
            }
            total += ran;
        }
        total
    }

    /// Detach the queued callbacks without running or cancelling them,
    /// as if the host had already dispatched them.
    pub fn take_pending(&self) -> Vec<FrameCallback> {
        let batch = std::mem::take(&mut self.queue.borrow_mut().pending);
        batch.into_iter().map(|(_, callback)| callback).collect()
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = FrameId;

    fn request_frame(&mut self, callback: FrameCallback) -> FrameId {
        let mut queue = self.queue.borrow_mut();
        let id = FrameId(queue.next_id);
        queue.next_id += 1;
        queue.pending.push_back((id, callback));
        id
    }

    fn cancel_frame(&mut self, handle: FrameId) {
        self.queue.borrow_mut().pending.retain(|(id, _)| *id != handle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn callbacks_wait_until_pumped() {
        let hits = Rc::new(Cell::new(0));
        let mut sched = ManualScheduler::new();
        let h = hits.clone();
        sched.request_frame(Box::new(move || h.set(h.get() + 1)));
        assert_eq!(hits.get(), 0);
        assert_eq!(sched.pending(), 1);
        assert_eq!(sched.run_pending(), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn cancel_removes_only_that_frame() {
        let hits = Rc::new(Cell::new(0));
        let mut sched = ManualScheduler::new();
        let (a, b) = (hits.clone(), hits.clone());
        let first = sched.request_frame(Box::new(move || a.set(a.get() + 1)));
        sched.request_frame(Box::new(move || b.set(b.get() + 10)));
        sched.cancel_frame(first);
        sched.run_pending();
        assert_eq!(hits.get(), 10);
    }

    #[test]
    fn frames_requested_during_a_frame_run_next_round() {
        let sched = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let (inner_sched, h) = (sched.clone(), hits.clone());
        let mut outer = sched.clone();
        outer.request_frame(Box::new(move || {
            h.set(h.get() + 1);
            let h2 = h.clone();
            let mut s = inner_sched;
            s.request_frame(Box::new(move || h2.set(h2.get() + 1)));
        }));
        assert_eq!(sched.run_pending(), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(sched.pending(), 1);
        assert_eq!(sched.run_frames(5), 1);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn take_pending_detaches() {
        let mut sched = ManualScheduler::new();
        sched.request_frame(Box::new(|| {}));
        let taken = sched.take_pending();
        assert_eq!(taken.len(), 1);
        assert_eq!(sched.pending(), 0);
    }
}
