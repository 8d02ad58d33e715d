//! Player entity - a force, a hitbox shape and a position
//!
//! Position lives in one place: `pos`. The hitbox is stored in local space
//! relative to `pos` and the world-space box is derived on demand, so the
//! two can never drift apart.

use crate::core::point::Point;
use crate::physics::force::PolarForce;
use crate::physics::hitbox::HitBox;

/// Opaque handle to a sprite owned by the host render/asset system.
/// This core never loads or frees the texture behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteHandle(pub u32);

/// Entity driven by a single polar force, integrated once per tick
#[derive(Clone, Debug)]
pub struct Player {
    force: PolarForce,
    /// Hitbox in local space, relative to `pos`
    bounds: HitBox,
    sprite: SpriteHandle,
    pos: Point,
}

impl Player {
    /// `bounds` is interpreted relative to (x, y)
    pub fn new(force: PolarForce, bounds: HitBox, sprite: SpriteHandle, x: f32, y: f32) -> Self {
        Self {
            force,
            bounds,
            sprite,
            pos: Point::new(x, y),
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn force(&self) -> PolarForce {
        self.force
    }

    #[inline]
    pub fn sprite(&self) -> SpriteHandle {
        self.sprite
    }

    /// World-space hitbox, derived from the current position
    #[inline]
    pub fn hitbox(&self) -> HitBox {
        self.bounds.translated(self.pos.x, self.pos.y)
    }

    pub fn set_force(&mut self, force: PolarForce) {
        self.force = force;
    }

    /// Sum another force into the current one (polar summation)
    pub fn apply_force(&mut self, force: PolarForce) {
        self.force = self.force + force;
    }

    /// One tick of integration. Screen space is y-down, so a positive
    /// angle moves the player up: offset = (m·cos θ, -m·sin θ).
    pub fn step(&mut self) {
        let off_x = self.force.magnitude * self.force.angle.cos();
        let off_y = -(self.force.magnitude * self.force.angle.sin());
        self.pos.x += off_x;
        self.pos.y += off_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn unit_box() -> HitBox {
        HitBox::new(-1.0, -1.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn rightward_force_advances_one_unit_per_tick() {
        let mut p = Player::new(PolarForce::new(1.0, 0.0), unit_box(), SpriteHandle(7), 0.0, 0.0);
        p.step();

        assert!((p.position().x - 1.0).abs() < EPS);
        assert!(p.position().y.abs() < EPS);
    }

    #[test]
    fn hitbox_follows_the_position() {
        let mut p = Player::new(PolarForce::new(1.0, 0.0), unit_box(), SpriteHandle(0), 0.0, 0.0);
        let before = p.hitbox();
        p.step();
        let after = p.hitbox();

        assert!((after.min().x - (before.min().x + 1.0)).abs() < EPS);
        assert!((after.max().x - (before.max().x + 1.0)).abs() < EPS);
        assert!((after.min().y - before.min().y).abs() < EPS);
    }

    #[test]
    fn positive_angle_moves_up_in_screen_space() {
        let mut p = Player::new(
            PolarForce::new(2.0, FRAC_PI_2),
            unit_box(),
            SpriteHandle(0),
            5.0,
            5.0,
        );
        p.step();

        assert!((p.position().x - 5.0).abs() < EPS);
        assert!((p.position().y - 3.0).abs() < EPS);
    }

    #[test]
    fn applied_forces_accumulate() {
        let mut p = Player::new(PolarForce::new(1.0, 0.0), unit_box(), SpriteHandle(0), 0.0, 0.0);
        p.apply_force(PolarForce::new(1.0, 0.0));
        p.step();

        assert!((p.position().x - 2.0).abs() < EPS);
    }

    #[test]
    fn zero_force_is_a_standstill() {
        let mut p = Player::new(PolarForce::ZERO, unit_box(), SpriteHandle(0), 3.0, -2.0);
        p.step();
        assert_eq!(p.position(), Point::new(3.0, -2.0));
    }
}
