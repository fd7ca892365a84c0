//! Prints a territory's traced outlines and label anchors as text.
//!
//! Usage:
//! ```text
//! cargo run --example outline                       # farthest-interior anchors
//! cargo run --example outline -- hull               # bounding-box midpoints
//! RUST_LOG=territory_geometry=debug cargo run --example outline
//! ```

use territory_geometry::{AnchorStrategy, Cell, EnclosedHoleBuilder, Territory, TerritoryGeometry};

fn main() {
    // Default: WARN for everything, INFO for the library.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("territory_geometry=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let strategy = match std::env::args().nth(1).as_deref() {
        Some("hull") => AnchorStrategy::HullCentroid,
        Some("first") => AnchorStrategy::FirstCellCenter,
        _ => AnchorStrategy::FarthestInterior,
    };

    let territory = sample_territory();
    print_grid(&territory);

    let service = TerritoryGeometry::default().with_hole_builder(EnclosedHoleBuilder);
    let shape = service.compute_territory(&territory, 64.0, strategy);

    println!("{} ({strategy:?}): {} region(s)", shape.name, shape.regions.len());
    for region in &shape.regions {
        let g = &region.geometry;
        println!(
            "  {}: {} cells, {} outline vertices, {} hole(s), area {:.0}, anchor ({:.1}, {:.1})",
            region.label,
            g.cell_count,
            g.polygon.len(),
            g.holes.len(),
            g.polygon.area(),
            g.anchor.x,
            g.anchor.z,
        );
        for v in g.polygon.vertices() {
            println!("    ({:>6.1}, {:>6.1})", v.x, v.z);
        }
    }
}

/// A ring-shaped main holding with a detached outpost.
fn sample_territory() -> Territory {
    let mut cells = Vec::new();
    for x in 0..7 {
        for z in 0..6 {
            let in_hole = (2..=3).contains(&x) && (2..=3).contains(&z);
            let notch = x >= 5 && z <= 1;
            if !in_hole && !notch {
                cells.push(Cell::new(x, z));
            }
        }
    }
    cells.extend([Cell::new(10, 1), Cell::new(11, 1), Cell::new(10, 2)]);
    Territory::new("Ashford", cells)
}

fn print_grid(territory: &Territory) {
    let Some(first) = territory.cells.first() else {
        return;
    };
    let (mut min, mut max) = (*first, *first);
    for c in &territory.cells {
        min = Cell::new(min.x.min(c.x), min.z.min(c.z));
        max = Cell::new(max.x.max(c.x), max.z.max(c.z));
    }
    for z in min.z..=max.z {
        let row: String = (min.x..=max.x)
            .map(|x| if territory.cells.contains(&Cell::new(x, z)) { '#' } else { '.' })
            .collect();
        println!("{row}");
    }
    println!();
}
