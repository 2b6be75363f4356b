//! Total vector arithmetic on top of `glam::Vec2`.
//!
//! glam already covers addition, subtraction, scaling, `dot`, `length`, `distance` and
//! `lerp`. The helpers here are the variants that must never produce NaN or infinity
//! for finite input.

use glam::Vec2;

pub trait Vec2Ext: Sized {
    /// Divide by a scalar. Dividing by zero returns `self` unchanged.
    fn div_or_self(self, scalar: f32) -> Self;

    /// Unit vector in the same direction; the zero vector stays zero.
    fn normalize_total(self) -> Self;

    /// Rotate counter-clockwise by `radians`.
    fn rotated(self, radians: f32) -> Self;

    /// Angle of the vector, `atan2(y, x)`.
    fn heading(self) -> f32;

    /// Angle of the direction from `self` to `other`, both taken as points.
    fn bearing_to(self, other: Self) -> f32;

    /// Component-wise comparison with a strict tolerance.
    fn near(self, other: Self, epsilon: f32) -> bool;

    fn is_zero(self) -> bool;

    /// Rescale to `max_length` only when longer than it.
    fn limit_length(self, max_length: f32) -> Self;

    /// Mirror across a surface with unit normal `normal`: `v - 2(v·n)n`.
    /// The result is meaningless when `normal` is not unit length.
    fn reflect_about(self, normal: Self) -> Self;
}

impl Vec2Ext for Vec2 {
    fn div_or_self(self, scalar: f32) -> Self {
        if scalar == 0.0 {
            return self;
        }
        self / scalar
    }

    fn normalize_total(self) -> Self {
        let len = self.length();
        if len == 0.0 { Vec2::ZERO } else { self / len }
    }

    fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    fn bearing_to(self, other: Self) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    fn near(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    fn limit_length(self, max_length: f32) -> Self {
        if self.length_squared() <= max_length * max_length {
            return self;
        }
        self.normalize_total() * max_length
    }

    fn reflect_about(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_div_by_zero_is_identity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(v.div_or_self(0.0), v);
        assert_eq!(v.div_or_self(2.0), Vec2::new(1.5, -2.0));
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        let n = Vec2::ZERO.normalize_total();
        assert_eq!(n, Vec2::ZERO);
        assert!(n.is_finite());
        assert_relative_eq!(Vec2::new(3.0, 4.0).normalize_total(), Vec2::new(0.6, 0.8));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = Vec2::X.rotated(FRAC_PI_2);
        assert_abs_diff_eq!(r, Vec2::Y, epsilon = 1e-6);
        let back = r.rotated(-FRAC_PI_2);
        assert_abs_diff_eq!(back, Vec2::X, epsilon = 1e-6);
    }

    #[test]
    fn test_heading_and_bearing() {
        assert_relative_eq!(Vec2::new(1.0, 1.0).heading(), FRAC_PI_4);
        assert_relative_eq!(Vec2::new(-1.0, 0.0).heading(), PI);
        let from = Vec2::new(2.0, 2.0);
        assert_relative_eq!(from.bearing_to(Vec2::new(2.0, 5.0)), FRAC_PI_2);
    }

    #[test]
    fn test_near_is_strict() {
        let a = Vec2::new(1.0, 1.0);
        assert!(a.near(Vec2::new(1.05, 0.95), 0.1));
        assert!(!a.near(Vec2::new(1.5, 1.0), 0.5));
    }

    #[test]
    fn test_is_zero() {
        assert!(Vec2::ZERO.is_zero());
        assert!(!Vec2::new(0.0, 1e-9).is_zero());
    }

    #[test]
    fn test_limit_length() {
        let short = Vec2::new(1.0, 0.0);
        assert_eq!(short.limit_length(2.0), short);
        let long = Vec2::new(0.0, 10.0);
        assert_relative_eq!(long.limit_length(2.0), Vec2::new(0.0, 2.0));
        assert_eq!(Vec2::ZERO.limit_length(0.0), Vec2::ZERO);
    }

    #[test]
    fn test_reflect_off_floor() {
        let v = Vec2::new(1.0, -1.0);
        assert_relative_eq!(v.reflect_about(Vec2::Y), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_lerp_unclamped() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        assert_relative_eq!(a.lerp(b, 0.25), Vec2::new(2.5, 0.0));
        assert_relative_eq!(a.lerp(b, 2.0), Vec2::new(20.0, 0.0));
    }
}
