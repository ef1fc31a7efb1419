//! Oriented planes and signed point-to-plane distance.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};

/// A plane in Hessian normal form: every point `p` on it satisfies
/// `normal · p = w`, with `normal` of unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3<Real>,
    w: Real,
}

impl Plane {
    /// Plane through `point` facing along `normal`.
    ///
    /// `normal` need not be unit length but must not be (near) zero or
    /// non-finite.
    pub fn from_point_normal(
        point: Point3<Real>,
        normal: Vector3<Real>,
    ) -> Result<Self, GeometryError> {
        let len = normal.norm();
        if !len.is_finite() || len <= tolerance() || !point.coords.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::InvalidGeometry {
                reference: point,
                axis: normal,
            });
        }
        let normal = normal / len;
        Ok(Plane {
            normal,
            w: normal.dot(&point.coords),
        })
    }

    #[inline]
    pub fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Signed distance from `point`, positive on the side the normal faces.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_uses_unit_normal() {
        let plane = Plane::from_point_normal(Point3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 5.0))
            .expect("valid plane");
        assert_relative_eq!(plane.signed_distance(&Point3::new(3.0, -2.0, 4.0)), 3.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, 0.0)), -1.0);
    }

    #[test]
    fn zero_normal_is_rejected() {
        let err = Plane::from_point_normal(Point3::origin(), Vector3::zeros()).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry { .. }));
    }
}
