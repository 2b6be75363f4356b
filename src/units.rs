//! Typed distances so screen-space pixels and simulation tiles cannot be mixed up.
//!
//! The conversion factor is carried by [`UnitScale`] and passed in explicitly.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Screen-space distance.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pixels(pub f32);

/// Simulation-space distance.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Tiles(pub f32);

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TilesPerSecond(pub f32);

macro_rules! scalar_ops {
    ($t:ident) => {
        impl Add for $t {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                $t(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                $t(self.0 - rhs.0)
            }
        }

        impl Mul<f32> for $t {
            type Output = $t;
            fn mul(self, factor: f32) -> $t {
                $t(self.0 * factor)
            }
        }

        impl Div<f32> for $t {
            type Output = $t;
            fn div(self, factor: f32) -> $t {
                $t(self.0 / factor)
            }
        }

        impl From<$t> for f32 {
            fn from(v: $t) -> f32 {
                v.0
            }
        }
    };
}

scalar_ops!(Pixels);
scalar_ops!(Tiles);
scalar_ops!(TilesPerSecond);

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}px", self.0)
    }
}

impl fmt::Display for Tiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}t", self.0)
    }
}

impl fmt::Display for TilesPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}t/s", self.0)
    }
}

/// Pixels-per-tile conversion factor.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitScale {
    pub pixels_per_tile: f32,
}

impl Default for UnitScale {
    fn default() -> Self {
        Self { pixels_per_tile: 32.0 }
    }
}

impl UnitScale {
    pub fn new(pixels_per_tile: f32) -> Self {
        Self { pixels_per_tile }
    }

    pub fn tiles_to_pixels(self, t: Tiles) -> Pixels {
        Pixels(t.0 * self.pixels_per_tile)
    }

    /// A zero scale maps everything to zero tiles.
    pub fn pixels_to_tiles(self, p: Pixels) -> Tiles {
        if self.pixels_per_tile == 0.0 {
            return Tiles(0.0);
        }
        Tiles(p.0 / self.pixels_per_tile)
    }

    /// Speed in pixels per second.
    pub fn speed_to_pixels(self, s: TilesPerSecond) -> f32 {
        s.0 * self.pixels_per_tile
    }

    pub fn position_to_pixels(self, tiles: Vec2) -> Vec2 {
        tiles * self.pixels_per_tile
    }

    pub fn position_to_tiles(self, pixels: Vec2) -> Vec2 {
        if self.pixels_per_tile == 0.0 {
            return Vec2::ZERO;
        }
        pixels / self.pixels_per_tile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_scale_round_trip() {
        let s = UnitScale::default();
        let px = s.tiles_to_pixels(Tiles(1.5));
        assert_eq!(px, Pixels(48.0));
        assert_eq!(s.pixels_to_tiles(px), Tiles(1.5));
        assert_relative_eq!(s.speed_to_pixels(TilesPerSecond(2.0)), 64.0);
    }

    #[test]
    fn test_custom_scale_positions() {
        let s = UnitScale::new(16.0);
        let p = s.position_to_pixels(Vec2::new(2.0, 3.0));
        assert_eq!(p, Vec2::new(32.0, 48.0));
        assert_eq!(s.position_to_tiles(p), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_zero_scale_is_total() {
        let s = UnitScale::new(0.0);
        assert_eq!(s.pixels_to_tiles(Pixels(10.0)), Tiles(0.0));
        assert_eq!(s.position_to_tiles(Vec2::new(4.0, 4.0)), Vec2::ZERO);
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        assert_eq!(Tiles(1.0) + Tiles(2.0), Tiles(3.0));
        assert_eq!(Pixels(10.0) - Pixels(4.0), Pixels(6.0));
        assert_eq!(Tiles(3.0) * 2.0, Tiles(6.0));
        assert_eq!(Pixels(9.0) / 3.0, Pixels(3.0));
        assert!(Tiles(1.0) < Tiles(1.5));
        assert!(TilesPerSecond(2.0) >= TilesPerSecond(2.0));
        assert_eq!(f32::from(Tiles(0.25)), 0.25);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pixels(12.0).to_string(), "12.0px");
        assert_eq!(Tiles(1.5).to_string(), "1.50t");
        assert_eq!(TilesPerSecond(2.0).to_string(), "2.00t/s");
    }
}
