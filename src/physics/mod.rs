pub mod force;
pub mod hitbox;

pub use force::{sum_cartesian_forces, sum_polar_forces, CartesianForce, PolarForce};
pub use hitbox::HitBox;
