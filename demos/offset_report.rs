//! Offset and boolean report: prints offsets of a few sample shapes and the
//! results of the four boolean operators on two overlapping squares.
//!
//! Usage:
//! ```text
//! cargo run --example offset_report
//! RUST_LOG=planar_regions=debug cargo run --example offset_report
//! ```

use planar_regions::{
    difference, exclusive_or, intersection, offset_path, offset_region, region_area, union,
    OffsetParams, Point2, Region, RegionError, Resolution, EPSILON,
};

fn square(x0: f64, y0: f64, size: f64) -> Vec<Point2> {
    vec![
        Point2::new(x0, y0),
        Point2::new(x0 + size, y0),
        Point2::new(x0 + size, y0 + size),
        Point2::new(x0, y0 + size),
    ]
}

fn print_path(label: &str, path: &[Point2]) {
    println!("{label}: {} points", path.len());
    for p in path {
        println!("    ({:.4}, {:.4})", p.x, p.y);
    }
}

fn print_region(label: &str, region: &Region) {
    println!(
        "{label}: {} components, {} vertices, area {:.4}",
        region.len(),
        region.vertex_count(),
        region_area(region, EPSILON)
    );
}

fn main() -> Result<(), RegionError> {
    // Default: WARN for everything, INFO for this crate.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar_regions=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planar_regions=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let base = square(0.0, 0.0, 10.0);

    // Case 1: sharp, rounded and chamfered outsets of a square
    print_path("delta 2", &offset_path(&base, &OffsetParams::delta(2.0))?);
    let rounded = OffsetParams::radius(2.0).with_resolution(Resolution {
        fn_segments: 16,
        ..Resolution::default()
    });
    print_path("r 2", &offset_path(&base, &rounded)?);
    print_path(
        "delta 2 chamfered",
        &offset_path(&base, &OffsetParams::delta(2.0).with_chamfer(true))?,
    );

    // Case 2: open L-shaped path
    let l_shape = vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
    ];
    print_path(
        "open L, delta 1",
        &offset_path(&l_shape, &OffsetParams::delta(1.0).with_closed(false))?,
    );

    // Case 3: region with a hole, grown and shrunk
    let annulus = Region::new(vec![square(0.0, 0.0, 20.0), square(5.0, 5.0, 10.0)]);
    print_region("annulus", &annulus);
    print_region("annulus r +1", &offset_region(&annulus, &OffsetParams::radius(1.0))?);
    print_region("annulus delta -2", &offset_region(&annulus, &OffsetParams::delta(-2.0))?);

    // Case 4: booleans of two overlapping squares
    let operands = [
        Region::from(square(0.0, 0.0, 10.0)),
        Region::from(square(5.0, 5.0, 10.0)),
    ];
    print_region("union", &union(&operands, EPSILON)?);
    print_region("difference", &difference(&operands, EPSILON)?);
    print_region("intersection", &intersection(&operands, EPSILON)?);
    print_region("exclusive_or", &exclusive_or(&operands, EPSILON)?);

    Ok(())
}
