//! Half-space vertex selection against a bounding-box plane.
//!
//! The cutting plane passes through the mean of a mesh's 8 bounding-box
//! corners and faces along one of the box edges leaving corner 0. A vertex is
//! **selected** when its signed distance to that plane reaches the keep band
//! (`d >= 0.01` by default). Deleting the bottom half is then "select, invert,
//! delete": the vertices removed are the ones with `d < 0.01`.
//!
//! ```
//! use glazed::bounding_box::BoundingBox;
//! use glazed::selector::HalfSpaceSelector;
//! use nalgebra::Point3;
//!
//! let bb = BoundingBox::from_min_max(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
//! let points = [Point3::new(0.0, 0.0, 0.5), Point3::new(0.0, 0.0, -0.5)];
//! let split = HalfSpaceSelector::default().partition(&bb, &points).unwrap();
//! assert_eq!(split.kept, vec![0]);
//! assert_eq!(split.discarded, vec![1]);
//! ```

use crate::bounding_box::{BoundingBox, CutAxis};
use crate::errors::GeometryError;
use crate::float_types::{KEEP_BAND, Real};
use crate::mesh::Mesh;
use crate::plane::Plane;
use crate::selection::Selection;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of splitting vertex indices by a half-space cut.
///
/// `kept` and `discarded` partition `0..vertex_count`, both ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HalfSpacePartition {
    pub kept: Vec<usize>,
    pub discarded: Vec<usize>,
}

impl HalfSpacePartition {
    pub fn vertex_count(&self) -> usize {
        self.kept.len() + self.discarded.len()
    }
}

/// Classifies vertices by which side of a bounding-box plane they lie on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HalfSpaceSelector {
    /// Box edge used as the plane normal
    pub axis: CutAxis,
    /// Minimum signed distance for a vertex to be selected
    pub keep_band: Real,
}

impl Default for HalfSpaceSelector {
    fn default() -> Self {
        Self {
            axis: CutAxis::Z,
            keep_band: KEEP_BAND,
        }
    }
}

impl HalfSpaceSelector {
    pub const fn new(axis: CutAxis, keep_band: Real) -> Self {
        Self { axis, keep_band }
    }

    /// Plane through the mean of the box corners, facing along `self.axis`.
    pub fn cutting_plane(&self, bb: &BoundingBox) -> Result<Plane, GeometryError> {
        let normal = bb.unit_axis(self.axis)?;
        Plane::from_point_normal(bb.center(), normal)
    }

    /// Mark every point whose signed distance reaches the keep band.
    ///
    /// An empty point set yields an empty selection without looking at the
    /// bounding box.
    pub fn classify(
        &self,
        bb: &BoundingBox,
        positions: &[Point3<Real>],
    ) -> Result<Selection, GeometryError> {
        if positions.is_empty() {
            debug!("half-space classify: no vertices, nothing to select");
            return Ok(Selection::none(0));
        }

        let plane = self.cutting_plane(bb)?;
        let flags = self.mark(&plane, positions);
        let selection = Selection::from_flags(flags);

        debug!(
            axis = ?self.axis,
            keep_band = self.keep_band,
            selected = selection.selected_count(),
            total = selection.len(),
            "half-space classify"
        );
        Ok(selection)
    }

    #[cfg(not(feature = "parallel"))]
    fn mark(&self, plane: &Plane, positions: &[Point3<Real>]) -> Vec<bool> {
        positions
            .iter()
            .map(|p| plane.signed_distance(p) >= self.keep_band)
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn mark(&self, plane: &Plane, positions: &[Point3<Real>]) -> Vec<bool> {
        positions
            .par_iter()
            .map(|p| plane.signed_distance(p) >= self.keep_band)
            .collect()
    }

    /// Split point indices into the kept (selected) and discarded sides.
    pub fn partition(
        &self,
        bb: &BoundingBox,
        positions: &[Point3<Real>],
    ) -> Result<HalfSpacePartition, GeometryError> {
        let selection = self.classify(bb, positions)?;
        Ok(HalfSpacePartition {
            kept: selection.selected().collect(),
            discarded: selection.unselected().collect(),
        })
    }

    /// [`classify`](Self::classify) the vertices of `mesh` against its own
    /// bounding box.
    pub fn classify_mesh<S: Clone + Send + Sync + Debug>(
        &self,
        mesh: &Mesh<S>,
    ) -> Result<Selection, GeometryError> {
        self.classify(&mesh.bounding_box(), &mesh.positions())
    }

    /// [`partition`](Self::partition) the vertices of `mesh` against its own
    /// bounding box.
    pub fn partition_mesh<S: Clone + Send + Sync + Debug>(
        &self,
        mesh: &Mesh<S>,
    ) -> Result<HalfSpacePartition, GeometryError> {
        self.partition(&mesh.bounding_box(), &mesh.positions())
    }

    /// Selection that a delete step should remove: the inverse of
    /// [`classify`](Self::classify).
    pub fn discard_selection(
        &self,
        bb: &BoundingBox,
        positions: &[Point3<Real>],
    ) -> Result<Selection, GeometryError> {
        let mut selection = self.classify(bb, positions)?;
        selection.invert();
        Ok(selection)
    }
}
