pub mod player;

pub use player::{Player, SpriteHandle};
