//! Prints a few Minkowski sums.
//!
//! Usage:
//! ```text
//! cargo run --example minkowski
//! RUST_LOG=minkowski2d=trace cargo run --example minkowski   # every split and step
//! ```

use minkowski2d::operations::{NonConvexMinkowskiSum, SumParams, TieBreak};
use minkowski2d::visualize::TracingSink;
use minkowski2d::{minkowski_difference_convex, minkowski_sum_convex, Polygon, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for minkowski2d.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("minkowski2d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let triangle = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)])?;
    let corner = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])?;
    print_ring("convex triangle + triangle", &minkowski_sum_convex(&triangle, &corner)?);
    print_ring(
        "convex difference",
        &minkowski_difference_convex(&corner, &triangle)?,
    );

    let l_shape = Polygon::from_coords(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ])?;
    let square = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])?;
    let sum = NonConvexMinkowskiSum::new(l_shape.clone(), square.clone())
        .execute_with_sink(&mut TracingSink)?;
    print_ring("L-shape + square", &sum);

    let params = SumParams {
        tie_break: TieBreak::Rotate {
            step_degrees: 0.5,
            max_attempts: 8,
        },
        ..SumParams::default()
    };
    let rotated = NonConvexMinkowskiSum::new(l_shape, square)
        .with_params(params)
        .execute()?;
    print_ring("L-shape + square (rotate on tie)", &rotated);

    Ok(())
}

fn print_ring(title: &str, polygon: &Polygon) {
    println!("{title}: area {:.4}", polygon.area());
    for (i, v) in polygon.vertices().iter().enumerate() {
        println!("  [{i}] ({:.4}, {:.4})", v.x, v.y);
    }
}
