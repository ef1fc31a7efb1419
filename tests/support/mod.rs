//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use glazed::{BoundingBox, float_types::Real};
use nalgebra::Point3;

/// The `(±1, ±1, ±1)` box centred on the origin.
pub fn unit_box() -> BoundingBox {
    BoundingBox::from_min_max(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0))
}

/// Points on a regular `n × n` grid in the XY plane at height `z`, spanning
/// `[-1, 1]` on both axes.
pub fn grid_at(z: Real, n: usize) -> Vec<Point3<Real>> {
    let step = 2.0 / (n - 1) as Real;
    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            out.push(Point3::new(-1.0 + i as Real * step, -1.0 + j as Real * step, z));
        }
    }
    out
}

/// Points mirrored about the z = 0 plane: for each height in `heights`, one
/// point above and one below.
pub fn mirrored_column(heights: &[Real]) -> Vec<Point3<Real>> {
    heights
        .iter()
        .flat_map(|&h| [Point3::new(0.25, -0.5, h), Point3::new(0.25, -0.5, -h)])
        .collect()
}
