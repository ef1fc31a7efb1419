//! Primitive solids as indexed `Mesh`es

use crate::float_types::{Real, TAU};
use crate::mesh::{Face, Mesh, vertex::Vertex};
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;
use std::sync::OnceLock;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Axis-aligned box from the origin to `(width, length, height)`.
    ///
    /// ## **Vertex Indexing Strategy**
    /// ```text
    ///     7-------6
    ///    /|      /|
    ///   4-------5 |
    ///   | 3-----|-2
    ///   |/      |/
    ///   0-------1
    /// ```
    /// Vertex order matches [`BoundingBox`](crate::bounding_box::BoundingBox)
    /// corner order, so a cuboid's own bounding box has the same corners.
    ///
    /// Vertex normals point diagonally outward from the box centre.
    pub fn cuboid(width: Real, length: Real, height: Real, metadata: Option<S>) -> Mesh<S> {
        let corners = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(width, 0.0, 0.0),
            Point3::new(width, length, 0.0),
            Point3::new(0.0, length, 0.0),
            Point3::new(0.0, 0.0, height),
            Point3::new(width, 0.0, height),
            Point3::new(width, length, height),
            Point3::new(0.0, length, height),
        ];
        let centre = Point3::new(width, length, height) * 0.5;
        let vertices = corners
            .iter()
            .map(|&p| {
                let out = p - centre;
                let len = out.norm();
                let normal = if len > Real::EPSILON { out / len } else { Vector3::zeros() };
                Vertex::new(p, normal)
            })
            .collect();

        // CCW seen from outside
        let faces = vec![
            Face::new(vec![0, 3, 2, 1]), // bottom
            Face::new(vec![4, 5, 6, 7]), // top
            Face::new(vec![0, 1, 5, 4]), // front
            Face::new(vec![3, 7, 6, 2]), // back
            Face::new(vec![0, 4, 7, 3]), // left
            Face::new(vec![1, 2, 6, 5]), // right
        ];

        Mesh {
            vertices,
            faces,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Torus centered at the origin lying in the *XY* plane, *Z* up.
    ///
    /// * `major_r` – distance from center to tube center (R)
    /// * `minor_r` – tube radius (r)
    /// * `segments_major` – number of rings around the donut (at least 3)
    /// * `segments_minor` – vertices per ring (at least 3)
    ///
    /// Ring `i` sits at angle `θ = τ·i / segments_major` around *Z*; vertex
    /// `j` of a ring at angle `φ = τ·j / segments_minor` around the tube,
    /// starting on the outer equator and rising towards +Z. Vertex index is
    /// `i * segments_minor + j`. Faces are quads.
    pub fn torus(
        major_r: Real,
        minor_r: Real,
        segments_major: usize,
        segments_minor: usize,
        metadata: Option<S>,
    ) -> Mesh<S> {
        let segments_major = segments_major.max(3);
        let segments_minor = segments_minor.max(3);

        let mut vertices = Vec::with_capacity(segments_major * segments_minor);
        for i in 0..segments_major {
            let theta = TAU * i as Real / segments_major as Real;
            let (sin_t, cos_t) = theta.sin_cos();
            for j in 0..segments_minor {
                let phi = TAU * j as Real / segments_minor as Real;
                let (sin_p, cos_p) = phi.sin_cos();
                let ring = major_r + minor_r * cos_p;
                vertices.push(Vertex::new(
                    Point3::new(ring * cos_t, ring * sin_t, minor_r * sin_p),
                    Vector3::new(cos_p * cos_t, cos_p * sin_t, sin_p),
                ));
            }
        }

        let index = |i: usize, j: usize| (i % segments_major) * segments_minor + (j % segments_minor);
        let mut faces = Vec::with_capacity(segments_major * segments_minor);
        for i in 0..segments_major {
            for j in 0..segments_minor {
                faces.push(Face::new(vec![
                    index(i, j),
                    index(i + 1, j),
                    index(i + 1, j + 1),
                    index(i, j + 1),
                ]));
            }
        }

        Mesh {
            vertices,
            faces,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }
}
