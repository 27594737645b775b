use std::rc::Rc;

use gloo::events::EventListener;
use neural_field::{FieldAnimation, FieldConfig, MotionPreference};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::{fit_canvas, to_canvas_coords, CanvasSurface};
use crate::scheduler::RafScheduler;

type CanvasAnimation = FieldAnimation<CanvasSurface, RafScheduler>;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Wires a [`FieldAnimation`] to a canvas: context, sizing, DOM listeners and
/// the reduced-motion preference. Dropping the runner stops the animation and
/// removes every listener.
pub struct BackgroundRunner {
    animation: Rc<CanvasAnimation>,
    listeners: Vec<EventListener>,
}

impl BackgroundRunner {
    /// Start animating on `canvas`. Returns `None` (and draws nothing) when
    /// there is no window or no 2D context.
    pub fn mount(canvas: &HtmlCanvasElement, config: FieldConfig) -> Option<Self> {
        let Some(window) = web_sys::window() else {
            log::warn!("neural-field: no window, background disabled");
            return None;
        };
        let Some(surface) = CanvasSurface::acquire(canvas) else {
            log::warn!("neural-field: 2d context unavailable, background disabled");
            return None;
        };

        let motion = MotionPreference::from_reduced(prefers_reduced_motion(&window));
        let animation = Rc::new(FieldAnimation::new(config, surface, RafScheduler, motion));

        let size = fit_canvas(&window, canvas);
        animation.resize(size.width, size.height);

        let listeners = install_listeners(&window, canvas, &animation);
        animation.start();
        log::info!(
            "neural-field: mounted {}x{} @{}x, {:?} motion",
            size.width,
            size.height,
            size.scale(),
            motion
        );

        Some(Self {
            animation,
            listeners,
        })
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.animation.frames_rendered()
    }
}

impl Drop for BackgroundRunner {
    fn drop(&mut self) {
        self.animation.stop();
        // Listeners hold clones of the animation; removing them releases it.
        self.listeners.clear();
    }
}

fn install_listeners(
    window: &Window,
    canvas: &HtmlCanvasElement,
    animation: &Rc<CanvasAnimation>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(3);

    {
        let animation = Rc::clone(animation);
        let win = window.clone();
        let canvas = canvas.clone();
        listeners.push(EventListener::new(window, "resize", move |_event| {
            let size = fit_canvas(&win, &canvas);
            animation.resize(size.width, size.height);
        }));
    }

    {
        let animation = Rc::clone(animation);
        let target = canvas.clone();
        listeners.push(EventListener::new(canvas, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let p = to_canvas_coords(&target, event.client_x(), event.client_y());
            animation.on_pointer_move(p.x, p.y);
        }));
    }

    {
        let animation = Rc::clone(animation);
        listeners.push(EventListener::new(canvas, "mouseleave", move |_event| {
            animation.on_pointer_leave();
        }));
    }

    listeners
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Parse host-supplied JSON props. Missing or malformed input falls back to
/// defaults; the animation is decorative and must never fail to mount over it.
pub fn config_from_json(json: Option<&str>) -> FieldConfig {
    match json.map(str::trim).filter(|s| !s.is_empty()) {
        None => FieldConfig::default(),
        Some(json) => FieldConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("neural-field: bad config ({}), using defaults", e);
            FieldConfig::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neural_field::Rgb;

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(config_from_json(None), FieldConfig::default());
        assert_eq!(config_from_json(Some("  ")), FieldConfig::default());
    }

    #[test]
    fn props_are_parsed() {
        let json = r#"{ "particleCount": 40, "particleColor": "255, 255, 255" }"#;
        let c = config_from_json(Some(json));
        assert_eq!(c.particle_count, 40);
        assert_eq!(c.particle_color, Rgb::new(255, 255, 255));
    }

    #[test]
    fn malformed_config_falls_back() {
        assert_eq!(config_from_json(Some("{ not json")), FieldConfig::default());
    }
}
