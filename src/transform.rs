//! Placement transform applied to imported coordinates

use nalgebra::{Matrix3, Point3, Vector3};

/// Translation plus 3×3 linear map (rotation and/or scaling) applied to
/// every coordinate of one import call.
///
/// The default is the identity placement: zero translation, identity map.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshTransform {
    /// Displacement added after the linear map.
    pub translation: Vector3<f64>,
    /// Rotation/scaling applied to the source coordinate.
    pub linear: Matrix3<f64>,
}

impl MeshTransform {
    pub fn new(translation: Vector3<f64>, linear: Matrix3<f64>) -> Self {
        Self {
            translation,
            linear,
        }
    }

    /// Pure translation with an unscaled linear part.
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self {
            translation,
            linear: Matrix3::identity(),
        }
    }

    /// Compute `linear · point + translation`.
    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.linear * point.coords + self.translation)
    }
}

impl Default for MeshTransform {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            linear: Matrix3::identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_leaves_point_unchanged() {
        let t = MeshTransform::default();
        let p = Point3::new(1.5, -2.0, 3.25);

        assert_eq!(t.apply(&p), p);
    }

    #[test]
    fn translation_offsets_point() {
        let t = MeshTransform::from_translation(Vector3::new(10.0, 0.0, -1.0));
        let p = Point3::new(1.0, 2.0, 3.0);

        let moved = t.apply(&p);
        assert_relative_eq!(moved.x, 11.0);
        assert_relative_eq!(moved.y, 2.0);
        assert_relative_eq!(moved.z, 2.0);
    }

    #[test]
    fn linear_map_applies_before_translation() {
        // Uniform scaling by 2, then shift x by 1
        let t = MeshTransform::new(
            Vector3::new(1.0, 0.0, 0.0),
            Matrix3::identity() * 2.0,
        );
        let p = Point3::new(1.0, 1.0, 1.0);

        let moved = t.apply(&p);
        assert_relative_eq!(moved.x, 3.0);
        assert_relative_eq!(moved.y, 2.0);
        assert_relative_eq!(moved.z, 2.0);
    }
}
