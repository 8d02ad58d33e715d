use wasm_bindgen::prelude::*;

use super::perf::TickStats;
use super::StageCore;

/// Host-facing stage handle
#[wasm_bindgen]
pub struct Stage {
    core: StageCore,
}

#[wasm_bindgen]
impl Stage {
    /// Create an empty stage
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: StageCore::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn player_count(&self) -> u32 {
        self.core.player_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> TickStats {
        self.core.get_perf_stats()
    }

    /// Spawn a player with a w×h hitbox centered on (x, y).
    /// Returns the player id; 0 means the hitbox was rejected.
    pub fn spawn_player(&mut self, x: f32, y: f32, w: f32, h: f32, sprite: u32) -> u32 {
        self.core.spawn_player(x, y, w, h, sprite)
    }

    /// Remove a player by id
    pub fn remove_player(&mut self, id: u32) -> bool {
        self.core.remove_player(id)
    }

    /// Replace a player's force (magnitude, angle in radians)
    pub fn set_player_force(&mut self, id: u32, magnitude: f32, angle: f32) -> bool {
        self.core.set_player_force(id, magnitude, angle)
    }

    /// Sum an extra force into a player's current one
    pub fn apply_player_force(&mut self, id: u32, magnitude: f32, angle: f32) -> bool {
        self.core.apply_player_force(id, magnitude, angle)
    }

    pub fn player_x(&self, id: u32) -> f32 {
        self.core.player_position(id).map_or(f32::NAN, |(x, _)| x)
    }

    pub fn player_y(&self, id: u32) -> f32 {
        self.core.player_position(id).map_or(f32::NAN, |(_, y)| y)
    }

    /// Advance every player one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Single-pair overlap query
    pub fn players_collide(&self, id_a: u32, id_b: u32) -> bool {
        self.core.players_collide(id_a, id_b)
    }

    /// Run the pairwise overlap scan; the id pairs land in the pair
    /// transfer buffer. Returns the pair count.
    pub fn collect_colliding_pairs(&mut self) -> usize {
        self.core.collect_colliding_pairs()
    }

    pub fn pair_buffer_ptr(&self) -> *const u32 {
        self.core.pair_buffer().as_ptr()
    }

    pub fn pair_buffer_len(&self) -> usize {
        self.core.pair_buffer().len()
    }

    /// Fill the pixel transfer buffer with a white block of the player's
    /// hitbox dimensions. Returns width, or 0 for a dead id.
    pub fn extract_hitbox_pixels(&mut self, id: u32) -> u32 {
        match self.core.extract_hitbox_pixels(id) {
            Some((w, _)) => w,
            None => 0,
        }
    }

    pub fn pixel_buffer_ptr(&self) -> *const u32 {
        self.core.pixel_buffer().as_ptr()
    }

    pub fn pixel_buffer_len(&self) -> usize {
        self.core.pixel_buffer().len()
    }

    /// Spawn every player in a JSON scene descriptor; returns the count
    pub fn load_scene(&mut self, json: String) -> Result<usize, JsValue> {
        self.core
            .load_scene_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Serialize the current players back into scene JSON
    pub fn scene_json(&self) -> String {
        self.core.scene_json()
    }

    /// Remove every player
    pub fn clear(&mut self) {
        self.core.clear();
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
