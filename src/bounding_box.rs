//! Eight-corner bounding boxes in an object's local space.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// One of the three box edges leaving corner 0.
///
/// The cut normal of a half-space selection is always one of these edges, so a
/// cut follows the object's local axes rather than the world's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutAxis {
    /// `corner[1] - corner[0]`
    X,
    /// `corner[3] - corner[0]`
    Y,
    /// `corner[4] - corner[0]`
    #[default]
    Z,
}

impl CutAxis {
    /// Index of the corner that, minus corner 0, gives this axis.
    pub const fn corner(self) -> usize {
        match self {
            CutAxis::X => 1,
            CutAxis::Y => 3,
            CutAxis::Z => 4,
        }
    }
}

impl std::str::FromStr for CutAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(CutAxis::X),
            "y" => Ok(CutAxis::Y),
            "z" => Ok(CutAxis::Z),
            other => Err(format!("unknown cut axis '{other}', expected x, y or z")),
        }
    }
}

/// A box described by its 8 corner points.
///
/// Boxes computed from points use this corner layout:
/// ```text
///     7-------6
///    /|      /|
///   4-------5 |
///   | 3-----|-2
///   |/      |/
///   0-------1
/// ```
/// - 0: (min x, min y, min z)
/// - 1: +X, 3: +Y, 4: +Z from corner 0
///
/// Boxes handed over from elsewhere via [`BoundingBox::from_corners`] keep the
/// caller's ordering; only corner 0 and the edge corners 1, 3 and 4 matter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub corners: [Point3<Real>; 8],
}

impl BoundingBox {
    /// Wrap 8 corners as given.
    pub const fn from_corners(corners: [Point3<Real>; 8]) -> Self {
        Self { corners }
    }

    /// Build the box from its extreme corners.
    pub fn from_min_max(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self {
            corners: [
                Point3::new(mins.x, mins.y, mins.z),
                Point3::new(maxs.x, mins.y, mins.z),
                Point3::new(maxs.x, maxs.y, mins.z),
                Point3::new(mins.x, maxs.y, mins.z),
                Point3::new(mins.x, mins.y, maxs.z),
                Point3::new(maxs.x, mins.y, maxs.z),
                Point3::new(maxs.x, maxs.y, maxs.z),
                Point3::new(mins.x, maxs.y, maxs.z),
            ],
        }
    }

    /// Smallest axis-aligned box enclosing `points`.
    ///
    /// With no points the box collapses to the origin.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
        let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
        let mut any = false;
        for p in points {
            any = true;
            mins.x = mins.x.min(p.x);
            mins.y = mins.y.min(p.y);
            mins.z = mins.z.min(p.z);
            maxs.x = maxs.x.max(p.x);
            maxs.y = maxs.y.max(p.y);
            maxs.z = maxs.z.max(p.z);
        }
        if !any {
            return Self::from_min_max(Point3::origin(), Point3::origin());
        }
        Self::from_min_max(mins, maxs)
    }

    /// Arithmetic mean of all 8 corners.
    pub fn center(&self) -> Point3<Real> {
        let sum = self
            .corners
            .iter()
            .fold(Vector3::zeros(), |acc, c| acc + c.coords);
        Point3::from(sum / 8.0)
    }

    /// Edge vector from corner 0 along `axis`.
    pub fn axis(&self, axis: CutAxis) -> Vector3<Real> {
        self.corners[axis.corner()] - self.corners[0]
    }

    /// All three edge vectors from corner 0, ordered (z, y, x) by corner
    /// index (4, 3, 1).
    pub fn axes(&self) -> [Vector3<Real>; 3] {
        [
            self.axis(CutAxis::Z),
            self.axis(CutAxis::Y),
            self.axis(CutAxis::X),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.corners
            .iter()
            .all(|c| c.coords.iter().all(|v| v.is_finite()))
    }

    /// Unit edge vector along `axis`, rejecting non-finite boxes and edges
    /// shorter than the crate tolerance.
    pub fn unit_axis(&self, axis: CutAxis) -> Result<Vector3<Real>, GeometryError> {
        let edge = self.axis(axis);
        let len = edge.norm();
        if !self.is_finite() || !len.is_finite() || len <= tolerance() {
            return Err(GeometryError::InvalidGeometry {
                reference: self.corners[0],
                axis: edge,
            });
        }
        Ok(edge / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn corner_layout_matches_axes() {
        let bb = BoundingBox::from_min_max(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(bb.axis(CutAxis::X), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(bb.axis(CutAxis::Y), Vector3::new(0.0, 4.0, 0.0));
        assert_eq!(bb.axis(CutAxis::Z), Vector3::new(0.0, 0.0, 6.0));
        assert_eq!(bb.corners[6], Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn center_is_mean_of_corners() {
        let bb = BoundingBox::from_min_max(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0));
        assert_relative_eq!(bb.center(), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn empty_points_collapse_to_origin() {
        let bb = BoundingBox::from_points(std::iter::empty());
        assert!(bb.corners.iter().all(|c| *c == Point3::origin()));
    }

    #[test]
    fn flat_box_rejects_its_flat_axis_only() {
        let bb = BoundingBox::from_min_max(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 0.0));
        assert!(bb.unit_axis(CutAxis::X).is_ok());
        assert!(matches!(
            bb.unit_axis(CutAxis::Z),
            Err(GeometryError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn non_finite_corner_is_invalid() {
        let mut bb = BoundingBox::from_min_max(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        bb.corners[6].x = Real::NAN;
        assert!(bb.unit_axis(CutAxis::Z).is_err());
    }

    #[test]
    fn axis_parses_case_insensitively() {
        assert_eq!("Z".parse::<CutAxis>(), Ok(CutAxis::Z));
        assert_eq!("y".parse::<CutAxis>(), Ok(CutAxis::Y));
        assert!("w".parse::<CutAxis>().is_err());
    }
}
