pub mod canvas;
pub mod runner;
pub mod scheduler;

pub use canvas::CanvasSurface;
pub use runner::{config_from_json, BackgroundRunner};
pub use scheduler::RafScheduler;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// JS-facing handle for one animated canvas.
///
/// The page owns the handle; every mount is independent. Call `dispose()`
/// from the host component's unmount hook.
///
/// ```js
/// const bg = new NeuralBackground(canvas, JSON.stringify({ particleCount: 60 }));
/// // ...
/// bg.dispose();
/// ```
#[wasm_bindgen]
pub struct NeuralBackground {
    runner: Option<BackgroundRunner>,
}

#[wasm_bindgen]
impl NeuralBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> NeuralBackground {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let mut config = config_from_json(config_json.as_deref());
        if config.seed.is_none() {
            config.seed = Some(host_seed());
        }

        NeuralBackground {
            runner: BackgroundRunner::mount(&canvas, config),
        }
    }

    /// False when the canvas had no usable 2D context, or after `dispose()`.
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.runner.as_ref().is_some_and(|r| r.is_running())
    }

    #[wasm_bindgen(getter, js_name = framesRendered)]
    pub fn frames_rendered(&self) -> f64 {
        self.runner.as_ref().map_or(0.0, |r| r.frames_rendered() as f64)
    }

    /// Cancel the pending frame and remove all listeners. Safe to call twice.
    pub fn dispose(&mut self) {
        if self.runner.take().is_some() {
            log::info!("neural-field: disposed");
        }
    }
}

fn host_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64 | 1
}
