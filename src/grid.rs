use glam::Vec2;

use std::collections::HashMap;

use crate::api::SpatialIndexApi;
use crate::config::{ConfigError, GridConfig};
use crate::types::*;

/// Positions at or past the far world edge are pulled this far inward before bucketing.
pub const EDGE_OFFSET: f32 = 0.1;

/// Smallest cell size accepted; anything below (or non-finite) is clamped to it.
pub const MIN_CELL_SIZE: f32 = 1e-5;

/// Most buckets a grid will allocate. Requests past it get coarser cells instead.
pub const MAX_CELLS: usize = 1 << 20;

const DEFAULT_BUCKET_CAPACITY: usize = 8;

/// Cells needed along one axis; NaN and non-positive extents still get one.
fn axis_cells(extent: f32, cell_size: f32) -> f64 {
    f64::from((extent / cell_size).ceil().max(1.0))
}

/// Buckets a `world_width` x `world_height` grid of `cell_size` cells would need.
pub(crate) fn cells_needed(world_width: f32, world_height: f32, cell_size: f32) -> f64 {
    axis_cells(world_width, cell_size) * axis_cells(world_height, cell_size)
}

/// Uniform grid over a fixed `world_width` x `world_height` rectangle.
///
/// Every entry lives in exactly one bucket, picked by its (edge-clamped) position, and is
/// mirrored in an id index so updates and removals never scan the whole grid.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    world_width: f32,
    world_height: f32,
    grid_width: usize,
    grid_height: usize,

    // Row-major buckets: index = cy * grid_width + cx
    cells: Vec<Vec<SpatialEntry>>,
    entities: HashMap<EntityId, SpatialEntry>,

    // Largest radius indexed since the last clear; widens radius-query candidate boxes.
    // Never shrinks on remove/update, only `clear` resets it.
    max_radius: f32,
}

impl SpatialIndexApi for SpatialGrid {
    fn new(world_width: f32, world_height: f32, cell_size: f32) -> Self {
        Self::with_capacity(world_width, world_height, cell_size, DEFAULT_BUCKET_CAPACITY)
    }

    fn insert(&mut self, id: EntityId, position: Vec2, radius: f32) {
        self.remove(id);
        let entry = SpatialEntry { id, position, radius };
        let idx = self.cell_index(position);
        self.cells[idx].push(entry);
        self.entities.insert(id, entry);
        self.max_radius = self.max_radius.max(radius);
    }

    fn remove(&mut self, id: EntityId) {
        let Some(entry) = self.entities.remove(&id) else {
            log::trace!("remove: unknown id {id}");
            return;
        };
        let idx = self.cell_index(entry.position);
        let bucket = &mut self.cells[idx];
        if let Some(slot) = bucket.iter().position(|e| e.id == id) {
            bucket.swap_remove(slot);
        }
    }

    fn update(&mut self, id: EntityId, position: Vec2, radius: f32) {
        let Some(old) = self.entities.get(&id).copied() else {
            self.insert(id, position, radius);
            return;
        };
        let old_idx = self.cell_index(old.position);
        let new_idx = self.cell_index(position);
        let entry = SpatialEntry { id, position, radius };

        if old_idx == new_idx {
            self.entities.insert(id, entry);
            self.max_radius = self.max_radius.max(radius);
            if let Some(e) = self.cells[old_idx].iter_mut().find(|e| e.id == id) {
                *e = entry;
            }
        } else {
            log::trace!("update: id {id} moves from cell {old_idx} to {new_idx}");
            self.remove(id);
            self.insert(id, position, radius);
        }
    }

    fn clear(&mut self) {
        for bucket in &mut self.cells {
            bucket.clear();
        }
        self.entities.clear();
        self.max_radius = 0.0;
        log::debug!("spatial grid cleared ({} cells)", self.cells.len());
    }

    fn query_range(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<SpatialEntry> {
        let mut out = Vec::new();
        let (cx0, cy0) = self.cell_coords(Vec2::new(min_x, min_y));
        let (cx1, cy1) = self.cell_coords(Vec2::new(max_x, max_y));
        for cy in cy0..=cy1 {
            for cx in cx0..=cx1 {
                let bucket = &self.cells[cy * self.grid_width + cx];
                out.extend(bucket.iter().filter(|e| {
                    let p = e.position;
                    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
                }));
            }
        }
        out
    }

    /// Candidate cells span `center ± (radius + largest indexed radius)`, so a single big
    /// body keeps every later query scanning wide until the next [`clear`](Self::clear).
    fn query_radius(&self, center: Vec2, radius: f32) -> Vec<SpatialEntry> {
        // Negative or NaN: an empty query area, like an inverted range.
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }
        // Bodies centered outside `center ± radius` can still reach the query circle.
        let half = radius + self.max_radius;
        let mut candidates =
            self.query_range(center.x - half, center.y - half, center.x + half, center.y + half);
        candidates.retain(|e| {
            let reach = radius + e.radius;
            center.distance_squared(e.position) <= reach * reach
        });
        candidates
    }

    fn query_nearest(&self, center: Vec2, max_radius: f32) -> Option<SpatialEntry> {
        let mut best: Option<(f32, SpatialEntry)> = None;
        for e in self.query_radius(center, max_radius) {
            let d2 = center.distance_squared(e.position);
            match best {
                Some((bd2, _)) if d2 >= bd2 => {}
                _ => best = Some((d2, e)),
            }
        }
        best.map(|(_, e)| e)
    }

    fn entity_count(&self) -> usize {
        self.entities.len()
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn active_cell_count(&self) -> usize {
        self.cells.iter().filter(|b| !b.is_empty()).count()
    }

    fn cell_size(&self) -> f32 {
        self.cell_size
    }

    fn world_dimensions(&self) -> (f32, f32) {
        (self.world_width, self.world_height)
    }

    fn grid_dimensions(&self) -> (usize, usize) {
        (self.grid_width, self.grid_height)
    }
}

impl SpatialGrid {
    /// Build from validated configuration.
    pub fn with_config(cfg: &GridConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::with_capacity(cfg.world_width, cfg.world_height, cfg.cell_size, cfg.bucket_capacity))
    }

    /// Like [`SpatialIndexApi::new`], preallocating `bucket_capacity` entries per cell.
    pub fn with_capacity(world_width: f32, world_height: f32, cell_size: f32, bucket_capacity: usize) -> Self {
        let mut cs = if cell_size.is_finite() && cell_size >= MIN_CELL_SIZE {
            cell_size
        } else {
            log::warn!("cell size {cell_size} is unusable, clamping to {MIN_CELL_SIZE}");
            MIN_CELL_SIZE
        };
        // Terminates: once `cs` overflows to infinity every axis needs one cell.
        let requested = cs;
        while cells_needed(world_width, world_height, cs) > MAX_CELLS as f64 {
            cs *= 2.0;
        }
        if cs != requested {
            log::warn!("cell size {requested} needs more than {MAX_CELLS} cells, coarsening to {cs}");
        }
        // Both axes are at least 1 and their product is at most MAX_CELLS.
        let grid_width = axis_cells(world_width, cs) as usize;
        let grid_height = axis_cells(world_height, cs) as usize;
        let cells = (0..grid_width * grid_height).map(|_| Vec::with_capacity(bucket_capacity)).collect();
        log::debug!(
            "spatial grid {world_width}x{world_height}, cell {cs} -> {grid_width}x{grid_height} cells"
        );
        Self {
            cell_size: cs,
            world_width,
            world_height,
            grid_width,
            grid_height,
            cells,
            entities: HashMap::new(),
            max_radius: 0.0,
        }
    }

    /// Cached entry for `id`, as of the last insert/update.
    pub fn get(&self, id: EntityId) -> Option<&SpatialEntry> {
        self.entities.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Cell coordinates owning `p`. Always in bounds: positions are clamped into
    /// `[0, world - EDGE_OFFSET]` first, then the cell index is clamped to the grid.
    pub fn cell_coords(&self, p: Vec2) -> (usize, usize) {
        // min-then-max rather than clamp(): NaN resolves to the far edge and worlds thinner
        // than EDGE_OFFSET resolve to 0, neither panics.
        let x = p.x.min(self.world_width - EDGE_OFFSET).max(0.0);
        let y = p.y.min(self.world_height - EDGE_OFFSET).max(0.0);
        let cx = ((x / self.cell_size) as usize).min(self.grid_width - 1);
        let cy = ((y / self.cell_size) as usize).min(self.grid_height - 1);
        (cx, cy)
    }

    fn cell_index(&self, p: Vec2) -> usize {
        let (cx, cy) = self.cell_coords(p);
        cy * self.grid_width + cx
    }

    /// Entries stored in the cell at `(cx, cy)`; empty for out-of-range coordinates.
    pub fn cell_entries(&self, cx: usize, cy: usize) -> &[SpatialEntry] {
        if cx >= self.grid_width || cy >= self.grid_height {
            return &[];
        }
        &self.cells[cy * self.grid_width + cx]
    }

    /// Return occupancy stats for the current contents.
    pub fn debug_stats(&self) -> GridStats {
        let mut stats = GridStats { entities: self.entities.len(), cells: self.cells.len(), ..Default::default() };
        for bucket in &self.cells {
            if !bucket.is_empty() {
                stats.active_cells += 1;
            }
            stats.max_bucket_len = stats.max_bucket_len.max(bucket.len());
        }
        stats
    }
}
