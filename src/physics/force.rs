//! Force model - one physical quantity, two representations
//!
//! `CartesianForce` carries orthogonal x/y components, `PolarForce` carries
//! magnitude + angle. Angles are radians everywhere. Conversions use
//! `atan2`, so every quadrant round-trips and the x = 0 column is not a
//! division by zero; `atan2(0, 0)` is 0, so the zero force converts to the
//! zero force.

use serde::{Deserialize, Serialize};

/// Force as orthogonal x/y components
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartesianForce {
    pub x: f32,
    pub y: f32,
}

impl CartesianForce {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Convert to magnitude + angle form
    #[inline]
    pub fn to_polar(&self) -> PolarForce {
        PolarForce {
            magnitude: self.magnitude(),
            angle: self.y.atan2(self.x),
        }
    }
}

impl std::ops::Add for CartesianForce {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Force as magnitude + angle (radians)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarForce {
    pub magnitude: f32,
    pub angle: f32,
}

impl PolarForce {
    pub const ZERO: Self = Self {
        magnitude: 0.0,
        angle: 0.0,
    };

    pub fn new(magnitude: f32, angle: f32) -> Self {
        Self { magnitude, angle }
    }

    /// Convert to x/y component form
    #[inline]
    pub fn to_cartesian(&self) -> CartesianForce {
        CartesianForce {
            x: self.magnitude * self.angle.cos(),
            y: self.magnitude * self.angle.sin(),
        }
    }
}

// Polar sums go through component form: convert, add componentwise,
// convert back.
impl std::ops::Add for PolarForce {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        (self.to_cartesian() + rhs.to_cartesian()).to_polar()
    }
}

/// Fold a slice of component forces into one, starting from zero.
/// Iteration order follows the slice.
pub fn sum_cartesian_forces(forces: &[CartesianForce]) -> CartesianForce {
    let mut total = CartesianForce::ZERO;
    for f in forces {
        total = total + *f;
    }
    total
}

/// Fold a slice of polar forces into one, starting from the zero force
pub fn sum_polar_forces(forces: &[PolarForce]) -> PolarForce {
    let mut total = PolarForce::ZERO;
    for f in forces {
        total = total + *f;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn polar_to_cartesian_quarter_turn() {
        let f = PolarForce::new(2.0, FRAC_PI_2);
        let c = f.to_cartesian();
        assert!(close(c.x, 0.0));
        assert!(close(c.y, 2.0));
    }

    #[test]
    fn round_trip_survives_every_quadrant() {
        for angle in [0.0, 1.0, FRAC_PI_2, 2.5, -2.5, -1.0, PI] {
            let f = PolarForce::new(3.0, angle);
            let back = f.to_cartesian().to_polar();
            assert!(close(back.magnitude, 3.0), "magnitude at angle {angle}");
            // PI maps to -PI under atan2; same direction.
            assert!(
                close(back.angle, angle) || close(back.angle, angle - 2.0 * PI),
                "angle at {angle} came back as {}",
                back.angle
            );
        }
    }

    #[test]
    fn zero_force_round_trips_without_nan() {
        let back = CartesianForce::ZERO.to_polar();
        assert_eq!(back.magnitude, 0.0);
        assert_eq!(back.angle, 0.0);
    }

    #[test]
    fn left_pointing_force_keeps_its_direction() {
        // The naive atan(y/x) form collapses x < 0 into the right half
        // plane; atan2 must not.
        let c = CartesianForce::new(-4.0, 0.0);
        let p = c.to_polar();
        assert!(close(p.magnitude, 4.0));
        assert!(close(p.angle.abs(), PI));
    }

    #[test]
    fn cartesian_sum_is_commutative() {
        let a = CartesianForce::new(1.5, -2.0);
        let b = CartesianForce::new(-0.5, 3.25);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn fold_order_does_not_change_cartesian_total() {
        let forces = [
            CartesianForce::new(1.0, 2.0),
            CartesianForce::new(-3.0, 0.5),
            CartesianForce::new(2.0, -1.5),
        ];
        let mut reversed = forces;
        reversed.reverse();

        let a = sum_cartesian_forces(&forces);
        let b = sum_cartesian_forces(&reversed);
        assert!(close(a.x, b.x));
        assert!(close(a.y, b.y));
    }

    #[test]
    fn empty_sums_are_the_zero_force() {
        assert_eq!(sum_cartesian_forces(&[]), CartesianForce::ZERO);
        assert_eq!(sum_polar_forces(&[]), PolarForce::ZERO);
    }

    #[test]
    fn polar_sum_of_opposite_forces_cancels() {
        let right = PolarForce::new(1.0, 0.0);
        let left = PolarForce::new(1.0, PI);
        let total = right + left;
        assert!(total.magnitude < EPS);
    }

    #[test]
    fn polar_fold_matches_cartesian_fold() {
        let polar = [
            PolarForce::new(2.0, 0.3),
            PolarForce::new(1.0, -1.2),
            PolarForce::new(0.5, 2.9),
        ];
        let cartesian: Vec<CartesianForce> = polar.iter().map(|f| f.to_cartesian()).collect();

        let via_polar = sum_polar_forces(&polar).to_cartesian();
        let via_cartesian = sum_cartesian_forces(&cartesian);
        assert!(close(via_polar.x, via_cartesian.x));
        assert!(close(via_polar.y, via_cartesian.y));
    }
}
