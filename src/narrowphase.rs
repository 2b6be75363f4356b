use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::types::*;
use crate::vector::Vec2Ext;

/// Exact overlap and contact tests between circles, rectangles and points.
pub struct Narrowphase;

impl Narrowphase {
    /// Point of `rect` closest to `p` (per-axis clamp). Equals `p` when `p` is inside.
    pub fn closest_point_on_rect(p: Vec2, rect: &Rectangle) -> Vec2 {
        // Not f32::clamp: that panics on inverted rectangles, this settles on `min`.
        Vec2::new(p.x.min(rect.max.x).max(rect.min.x), p.y.min(rect.max.y).max(rect.min.y))
    }
}

impl NarrowphaseApi for Narrowphase {
    fn circle_circle(a: &Circle, b: &Circle) -> bool {
        a.center.distance(b.center) <= a.radius + b.radius
    }

    fn circle_rect(circle: &Circle, rect: &Rectangle) -> bool {
        let closest = Self::closest_point_on_rect(circle.center, rect);
        circle.center.distance(closest) <= circle.radius
    }

    fn rect_rect(a: &Rectangle, b: &Rectangle) -> bool {
        // Separating axis on x and y; touching edges count as overlap.
        !(a.max.x < b.min.x || a.min.x > b.max.x || a.max.y < b.min.y || a.min.y > b.max.y)
    }

    fn point_in_circle(p: Vec2, circle: &Circle) -> bool {
        circle.contains_point(p)
    }

    fn point_in_rect(p: Vec2, rect: &Rectangle) -> bool {
        rect.contains_point(p)
    }

    fn circle_circle_details(a: &Circle, b: &Circle) -> CollisionDetails {
        let delta = b.center - a.center;
        let dist = delta.length();
        let rsum = a.radius + b.radius;
        if dist > rsum {
            return CollisionDetails::SEPARATED;
        }
        if dist == 0.0 {
            // Coincident centers: direction is arbitrary but fixed.
            return CollisionDetails {
                colliding: true,
                penetration: rsum,
                normal: Vec2::X,
                contact_point: a.center,
            };
        }
        let normal = delta / dist;
        let penetration = rsum - dist;
        CollisionDetails {
            colliding: true,
            penetration,
            normal,
            contact_point: a.center + normal * (a.radius - penetration / 2.0),
        }
    }

    fn circle_rect_details(circle: &Circle, rect: &Rectangle) -> CollisionDetails {
        let c = circle.center;
        let closest = Self::closest_point_on_rect(c, rect);
        let offset = c - closest;
        let dist = offset.length();
        if dist > circle.radius {
            return CollisionDetails::SEPARATED;
        }

        if rect.contains_point(c) {
            // Center inside: the closest-point offset is zero, push out through the nearest edge.
            let to_left = c.x - rect.min.x;
            let to_right = rect.max.x - c.x;
            let to_bottom = c.y - rect.min.y;
            let to_top = rect.max.y - c.y;
            let min_dist = to_left.min(to_right).min(to_bottom.min(to_top));

            let (normal, contact_point) = if min_dist == to_left {
                (Vec2::NEG_X, Vec2::new(rect.min.x, c.y))
            } else if min_dist == to_right {
                (Vec2::X, Vec2::new(rect.max.x, c.y))
            } else if min_dist == to_bottom {
                (Vec2::NEG_Y, Vec2::new(c.x, rect.min.y))
            } else {
                (Vec2::Y, Vec2::new(c.x, rect.max.y))
            };
            return CollisionDetails {
                colliding: true,
                penetration: circle.radius + min_dist,
                normal,
                contact_point,
            };
        }

        if dist == 0.0 {
            // Either the offset is too small to square (rescale it, the direction survives)
            // or the rectangle is inverted and there is no direction at all.
            let scale = offset.abs().max_element();
            let normal = if scale > 0.0 { (offset / scale).normalize_total() } else { Vec2::Y };
            return CollisionDetails {
                colliding: true,
                penetration: circle.radius,
                normal,
                contact_point: closest,
            };
        }

        CollisionDetails {
            colliding: true,
            penetration: circle.radius - dist,
            normal: offset.normalize_total(),
            contact_point: closest,
        }
    }
}
