//! Planar Engine - 2D force and collision core in WASM
//!
//! The host (JS game loop) owns the tick cadence, assets and rendering;
//! this crate owns the value math:
//! - core/     - Plain value types (Point)
//! - physics/  - Force model and axis-aligned hitboxes
//! - entity/   - Player entity and per-tick integration
//! - stage/    - Orchestration facade driven by the host loop

pub mod core;
pub mod physics;
pub mod entity;
pub mod stage;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Planar WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::point::Point;
pub use entity::player::{Player, SpriteHandle};
pub use physics::force::{CartesianForce, PolarForce};
pub use physics::hitbox::HitBox;
pub use stage::Stage;
