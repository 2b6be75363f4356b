use glam::Vec2;

use crate::types::*;

/// Public API contract for the per-tick spatial index.
///
/// Every operation is total: unknown ids and empty or inverted query areas degrade to
/// no-ops and empty results.
pub trait SpatialIndexApi {
    /// Construct an empty index over a `world_width` x `world_height` world.
    fn new(world_width: f32, world_height: f32, cell_size: f32) -> Self
    where
        Self: Sized;

    // --- Maintenance -------------------------------------------------------

    /// Index `id` at `position`, replacing any previous entry for it.
    fn insert(&mut self, id: EntityId, position: Vec2, radius: f32);

    /// Drop `id` from the index. Unknown ids are ignored.
    fn remove(&mut self, id: EntityId);

    /// Push a new position/radius for `id`, inserting it if unknown.
    fn update(&mut self, id: EntityId, position: Vec2, radius: f32);

    /// Remove every entry, keeping allocated bucket capacity.
    fn clear(&mut self);

    // --- Queries -----------------------------------------------------------

    /// Entries whose position lies inside the inclusive rectangle. Radius is ignored.
    fn query_range(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<SpatialEntry>;

    /// Entries whose body circle touches the query circle `(center, radius)`.
    fn query_radius(&self, center: Vec2, radius: f32) -> Vec<SpatialEntry>;

    /// Closest entry (by position) among `query_radius(center, max_radius)`.
    fn query_nearest(&self, center: Vec2, max_radius: f32) -> Option<SpatialEntry>;

    // --- Accessors ---------------------------------------------------------

    fn entity_count(&self) -> usize;
    fn cell_count(&self) -> usize;
    /// Number of non-empty cells (O(cells)).
    fn active_cell_count(&self) -> usize;
    fn cell_size(&self) -> f32;
    fn world_dimensions(&self) -> (f32, f32);
    fn grid_dimensions(&self) -> (usize, usize);
}

/// Stateless shape-pair predicates.
pub trait NarrowphaseApi {
    // Boolean overlaps ------------------------------------------------------

    fn circle_circle(a: &Circle, b: &Circle) -> bool;
    fn circle_rect(circle: &Circle, rect: &Rectangle) -> bool;
    fn rect_rect(a: &Rectangle, b: &Rectangle) -> bool;
    fn point_in_circle(p: Vec2, circle: &Circle) -> bool;
    fn point_in_rect(p: Vec2, rect: &Rectangle) -> bool;

    // Contacts --------------------------------------------------------------

    /// Normal points from `a` towards `b`.
    fn circle_circle_details(a: &Circle, b: &Circle) -> CollisionDetails;

    /// Normal points from the rectangle out towards the circle.
    fn circle_rect_details(circle: &Circle, rect: &Rectangle) -> CollisionDetails;
}
