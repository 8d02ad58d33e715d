//! Opt-in tick metrics. Timing uses `Date.now()` on wasm (no
//! high-resolution clock in a plain worker) and `Instant` natively.

use wasm_bindgen::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct TickTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl TickTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            TickTimer {
                start_ms: js_sys::Date::now(),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            TickTimer {
                start: std::time::Instant::now(),
            }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Snapshot of the last `step()` / pair scan (zeros while perf is off)
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct TickStats {
    pub(super) step_ms: f64,
    pub(super) players_stepped: u32,
    pub(super) overlap_tests: u32,
    pub(super) frame: u64,
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }
    #[wasm_bindgen(getter)]
    pub fn players_stepped(&self) -> u32 {
        self.players_stepped
    }
    #[wasm_bindgen(getter)]
    pub fn overlap_tests(&self) -> u32 {
        self.overlap_tests
    }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
