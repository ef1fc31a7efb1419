//! Geometry errors

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};
use std::fmt::Display;

/// All the possible geometry issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (InvalidGeometry) A bounding box corner is NaN/infinite, or the cut
    /// normal taken from the box has (near) zero length
    InvalidGeometry {
        /// Corner the cut axis starts from
        reference: Point3<Real>,
        /// Edge vector that was rejected as a cut normal
        axis: Vector3<Real>,
    },
    /// (IndexOutOfRange) A face refers to a vertex that does not exist
    IndexOutOfRange { index: usize, vertex_count: usize },
    /// (DegenerateFace) A face has fewer than three corners
    DegenerateFace { face: usize, corners: usize },
    /// (SelectionMismatch) A selection was built for a different vertex count
    SelectionMismatch { expected: usize, found: usize },
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::InvalidGeometry { reference, axis } => write!(
                f,
                "(InvalidGeometry) Cut axis ({}, {}, {}) from corner {} is degenerate",
                axis.x, axis.y, axis.z, reference
            ),
            GeometryError::IndexOutOfRange { index, vertex_count } => write!(
                f,
                "(IndexOutOfRange) Vertex index {index} is out of range (vertices.len = {vertex_count})"
            ),
            GeometryError::DegenerateFace { face, corners } => write!(
                f,
                "(DegenerateFace) Face {face} has {corners} corners, at least 3 are required"
            ),
            GeometryError::SelectionMismatch { expected, found } => write!(
                f,
                "(SelectionMismatch) Selection covers {found} vertices but the mesh has {expected}"
            ),
        }
    }
}
