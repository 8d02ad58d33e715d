//! Stage - orchestration layer driven by the host game loop
//!
//! The host owns the tick cadence: it calls `step()` once per tick, then
//! asks for colliding pairs and reacts to them. This layer owns no
//! collision response and no rendering; it hands pixel and pair buffers to
//! the host over the WASM boundary the same way it hands out everything
//! else: reusable transfer buffers plus ptr/len accessors.

use crate::entity::player::{Player, SpriteHandle};
use crate::physics::force::PolarForce;
use crate::physics::hitbox::HitBox;

#[path = "perf/perf.rs"]
mod perf;
mod facade;
mod scene;

pub use facade::Stage;
pub use perf::TickStats;
pub use scene::SceneRoot;

use perf::TickTimer;

/// The stage: every active player, keyed by a stable non-zero id
pub struct StageCore {
    // Parallel arrays: ids[i] identifies players[i]
    ids: Vec<u32>,
    players: Vec<Player>,
    next_id: u32,

    // State
    frame: u64,

    // Transfer buffers (reused across calls, exposed to the host)
    pair_buffer: Vec<u32>,
    pixel_buffer: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: TickStats,
}

impl StageCore {
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            players: Vec::new(),
            next_id: 1,
            frame: 0,
            pair_buffer: Vec::new(),
            pixel_buffer: Vec::new(),
            perf_enabled: false,
            perf_stats: TickStats::default(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> TickStats {
        self.perf_stats.clone()
    }

    /// Spawn a player with a w×h hitbox centered on (x, y).
    /// Returns the player id, or 0 when w or h is not positive.
    pub fn spawn_player(&mut self, x: f32, y: f32, w: f32, h: f32, sprite: u32) -> u32 {
        let Some(bounds) = HitBox::new(-w * 0.5, -h * 0.5, w * 0.5, h * 0.5) else {
            return 0;
        };

        let id = self.next_id;
        self.next_id += 1;
        self.ids.push(id);
        self.players
            .push(Player::new(PolarForce::ZERO, bounds, SpriteHandle(sprite), x, y));
        id
    }

    /// Remove a player by id
    pub fn remove_player(&mut self, id: u32) -> bool {
        match self.index_of(id) {
            Some(i) => {
                self.ids.swap_remove(i);
                self.players.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn set_player_force(&mut self, id: u32, magnitude: f32, angle: f32) -> bool {
        match self.player_mut(id) {
            Some(p) => {
                p.set_force(PolarForce::new(magnitude, angle));
                true
            }
            None => false,
        }
    }

    /// Sum an extra force into the player's current one
    pub fn apply_player_force(&mut self, id: u32, magnitude: f32, angle: f32) -> bool {
        match self.player_mut(id) {
            Some(p) => {
                p.apply_force(PolarForce::new(magnitude, angle));
                true
            }
            None => false,
        }
    }

    pub fn player_position(&self, id: u32) -> Option<(f32, f32)> {
        self.player(id).map(|p| {
            let pos = p.position();
            (pos.x, pos.y)
        })
    }

    pub fn player_hitbox(&self, id: u32) -> Option<HitBox> {
        self.player(id).map(|p| p.hitbox())
    }

    /// Advance every player one tick
    pub fn step(&mut self) {
        let timer = self.perf_enabled.then(TickTimer::start);

        for p in self.players.iter_mut() {
            p.step();
        }
        self.frame += 1;

        if let Some(timer) = timer {
            self.perf_stats.step_ms = timer.elapsed_ms();
            self.perf_stats.players_stepped = self.players.len() as u32;
            self.perf_stats.frame = self.frame;
        }
    }

    /// Single-pair overlap query
    pub fn players_collide(&self, id_a: u32, id_b: u32) -> bool {
        match (self.player(id_a), self.player(id_b)) {
            (Some(a), Some(b)) => a.hitbox().overlaps(&b.hitbox()),
            _ => false,
        }
    }

    /// Pairwise scan of every active player; overlapping id pairs land in
    /// the pair transfer buffer as (a, b) with a spawned before b.
    /// Returns the number of pairs. O(n²) on purpose: no broad-phase here.
    pub fn collect_colliding_pairs(&mut self) -> usize {
        self.pair_buffer.clear();
        let mut checks = 0u32;

        for i in 0..self.players.len() {
            let box_i = self.players[i].hitbox();
            for j in (i + 1)..self.players.len() {
                checks += 1;
                if box_i.overlaps(&self.players[j].hitbox()) {
                    self.pair_buffer.push(self.ids[i]);
                    self.pair_buffer.push(self.ids[j]);
                }
            }
        }

        if self.perf_enabled {
            self.perf_stats.overlap_tests = checks;
        }
        self.pair_buffer.len() / 2
    }

    pub fn pair_buffer(&self) -> &[u32] {
        &self.pair_buffer
    }

    /// Fill the pixel transfer buffer with a white block of the player's
    /// hitbox dimensions. Returns (width, height), or None for a dead id.
    pub fn extract_hitbox_pixels(&mut self, id: u32) -> Option<(u32, u32)> {
        let bx = self.player_hitbox(id)?;
        Some(bx.fill_debug_pixels(&mut self.pixel_buffer))
    }

    pub fn pixel_buffer(&self) -> &[u32] {
        &self.pixel_buffer
    }

    /// Spawn every player in a JSON scene descriptor.
    /// Returns how many were spawned, or the first validation error.
    pub fn load_scene_json(&mut self, json: &str) -> Result<usize, String> {
        let scene = SceneRoot::from_json(json)?;
        scene.spawn_into(self)
    }

    /// Serialize the current players back into a scene descriptor
    pub fn scene_json(&self) -> String {
        SceneRoot::capture(self).to_json()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.players.clear();
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    fn player(&self, id: u32) -> Option<&Player> {
        self.index_of(id).map(|i| &self.players[i])
    }

    fn player_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.index_of(id).map(move |i| &mut self.players[i])
    }
}

impl Default for StageCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
