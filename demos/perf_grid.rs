use savanna_grid::*;
use std::time::Instant;

fn lcg(seed: &mut u32) -> u32 {
    *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
    *seed
}

fn rand01(seed: &mut u32) -> f32 {
    lcg(seed) as f32 / u32::MAX as f32
}

fn main() {
    env_logger::init();

    let cfg = GridConfig { world_width: 200.0, world_height: 200.0, cell_size: 5.0, bucket_capacity: 8 };
    let mut grid = match SpatialGrid::with_config(&cfg) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("bad grid config: {e}");
            return;
        }
    };

    let n = 20_000u64; // mobile bodies
    let ticks = 60;
    let mut seed = 1u32;
    let mut bodies: Vec<(Vec2, Vec2, f32)> = (0..n)
        .map(|_| {
            let p = Vec2::new(rand01(&mut seed) * 200.0, rand01(&mut seed) * 200.0);
            let v = Vec2::new(rand01(&mut seed) * 2.0 - 1.0, rand01(&mut seed) * 2.0 - 1.0);
            (p, v, 0.3 + rand01(&mut seed) * 0.4)
        })
        .collect();
    for (id, (p, _, r)) in bodies.iter().enumerate() {
        grid.insert(id as u64, *p, *r);
    }

    let mut update_ms = 0.0f64;
    let mut query_ms = 0.0f64;
    let mut neighbours = 0usize;
    for _ in 0..ticks {
        let t0 = Instant::now();
        for (id, (p, v, r)) in bodies.iter_mut().enumerate() {
            *p += *v * 0.5;
            grid.update(id as u64, *p, *r);
        }
        update_ms += t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        for (p, _, _) in bodies.iter().step_by(10) {
            neighbours += grid.query_radius(*p, 4.0).len();
        }
        query_ms += t1.elapsed().as_secs_f64() * 1000.0;
    }

    let stats = grid.debug_stats();
    println!(
        "N={} ticks={} cell_size={} update={:.3}ms/tick query={:.3}ms/tick neighbours={} active_cells={}/{} max_bucket={}",
        n,
        ticks,
        grid.cell_size(),
        update_ms / ticks as f64,
        query_ms / ticks as f64,
        neighbours,
        stats.active_cells,
        stats.cells,
        stats.max_bucket_len
    );
}
