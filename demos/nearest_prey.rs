use savanna_grid::*;

const WOLF: EntityId = 1;

fn main() {
    env_logger::init();

    let units = UnitScale::default();
    let mut grid = SpatialGrid::new(50.0, 50.0, 4.0);

    grid.insert(WOLF, Vec2::new(10.0, 10.0), 0.6);
    grid.insert(10, Vec2::new(13.0, 11.0), 0.3);
    grid.insert(11, Vec2::new(30.0, 30.0), 0.3);
    grid.insert(12, Vec2::new(9.0, 14.5), 0.3);

    let wolf = match grid.get(WOLF) {
        Some(e) => *e,
        None => return,
    };
    let vision = 6.0;
    let prey = grid
        .query_radius(wolf.position, vision)
        .into_iter()
        .filter(|e| e.id != WOLF)
        .min_by(|a, b| {
            wolf.position.distance_squared(a.position).total_cmp(&wolf.position.distance_squared(b.position))
        });

    let Some(prey) = prey else {
        println!("No prey in sight");
        return;
    };
    let dist = Tiles(wolf.position.distance(prey.position));
    println!(
        "Wolf sees rabbit id={} at {} ({}) heading={:.2}rad",
        prey.id,
        dist,
        units.tiles_to_pixels(dist),
        wolf.position.bearing_to(prey.position)
    );

    let reach = Circle::new(wolf.position, 1.2);
    let body = Circle::new(prey.position, prey.radius);
    let contact = Narrowphase::circle_circle_details(&reach, &body);
    if contact.colliding {
        println!("In attack range, penetration={:.2}", contact.penetration);
    } else {
        println!("Out of attack range, closing in");
    }
}
