//! Scene descriptors - JSON in, players out
//!
//! The host hands the stage a scene as JSON (one entry per player) instead
//! of issuing a spawn call per entity. Angles are radians, positions are
//! hitbox centers.

use serde::{Deserialize, Serialize};

use super::StageCore;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneRoot {
    pub players: Vec<SceneEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneEntry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub sprite: u32,
    #[serde(default)]
    pub force: f32,
    #[serde(default)]
    pub angle: f32,
}

impl SceneRoot {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        // Serialization of these plain structs cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Spawn every entry into the stage; on a bad entry nothing before it
    /// is rolled back, the error just names the offender.
    pub(super) fn spawn_into(&self, core: &mut StageCore) -> Result<usize, String> {
        for (n, entry) in self.players.iter().enumerate() {
            let id = core.spawn_player(entry.x, entry.y, entry.width, entry.height, entry.sprite);
            if id == 0 {
                return Err(format!(
                    "scene player {} has a non-positive hitbox ({}x{})",
                    n, entry.width, entry.height
                ));
            }
            core.set_player_force(id, entry.force, entry.angle);
        }
        Ok(self.players.len())
    }

    /// Snapshot the stage's players as a scene
    pub(super) fn capture(core: &StageCore) -> Self {
        let players = core
            .players
            .iter()
            .map(|p| {
                let pos = p.position();
                let bx = p.hitbox();
                let force = p.force();
                SceneEntry {
                    x: pos.x,
                    y: pos.y,
                    width: bx.width(),
                    height: bx.height(),
                    sprite: p.sprite().0,
                    force: force.magnitude,
                    angle: force.angle,
                }
            })
            .collect();
        Self { players }
    }
}
