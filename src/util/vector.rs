//! Double-precision vector helpers layered on top of [`glam::DVec3`].
//!
//! glam already covers the arithmetic (add, sub, scale, dot, cross, length).
//! What lives here is the geometry shared by the mesh builder and the X3D
//! writer: guarded normalization, Rodrigues rotation, the rotation that
//! takes the +Y axis onto a bond, and a stable perpendicular.

use std::f64::consts::PI;

use glam::DVec3;

/// Cross-product length below which a direction is treated as collinear
/// with the +Y reference axis.
pub const PARALLEL_EPSILON: f64 = 1e-4;

/// Normalize `v`, returning `fallback` when `v` has zero or non-finite
/// length.
#[must_use]
pub fn normalize_or(v: DVec3, fallback: DVec3) -> DVec3 {
    v.try_normalize().unwrap_or(fallback)
}

/// Rotate `v` about the unit `axis` by `angle` radians (Rodrigues):
///
/// `v' = v·cosθ + (k×v)·sinθ + k·(k·v)·(1−cosθ)`
#[must_use]
pub fn rotate_about_axis(v: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    v * cos + axis.cross(v) * sin + axis * axis.dot(v) * (1.0 - cos)
}

/// Unit vector perpendicular to `unit`.
///
/// Crosses with +Z unless `unit` is mostly along Z, in which case +X is
/// used, so the cross product never degenerates. Returns +X for a zero
/// input.
#[must_use]
pub fn perpendicular(unit: DVec3) -> DVec3 {
    let reference = if unit.z.abs() < 0.9 { DVec3::Z } else { DVec3::X };
    normalize_or(reference.cross(unit), DVec3::X)
}

/// A rotation expressed as a unit axis and an angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    /// Unit rotation axis.
    pub axis: DVec3,
    /// Rotation angle in radians.
    pub angle: f64,
}

impl AxisAngle {
    /// No rotation, expressed about +Y.
    pub const IDENTITY: Self = Self {
        axis: DVec3::Y,
        angle: 0.0,
    };

    /// Rotation that maps the +Y axis onto `direction`.
    ///
    /// Collinear directions skip the cross-product normalization: parallel
    /// yields [`Self::IDENTITY`], antiparallel a half turn about +X. A zero
    /// or non-finite `direction` also yields the identity.
    #[must_use]
    pub fn align_y_to(direction: DVec3) -> Self {
        let length = direction.length();
        if !length.is_finite() || length <= f64::EPSILON {
            return Self::IDENTITY;
        }

        let cross = DVec3::Y.cross(direction);
        let cross_len = cross.length();
        let cos = (DVec3::Y.dot(direction) / length).clamp(-1.0, 1.0);

        if cross_len > PARALLEL_EPSILON {
            Self {
                axis: cross / cross_len,
                angle: cos.acos(),
            }
        } else if cos < 0.0 {
            Self {
                axis: DVec3::X,
                angle: PI,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Apply the rotation to `v`.
    #[must_use]
    pub fn rotate(&self, v: DVec3) -> DVec3 {
        rotate_about_axis(v, self.axis, self.angle)
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!(a.abs_diff_eq(b, 1e-9), "{a:?} != {b:?}");
    }

    #[test]
    fn rodrigues_quarter_turn_about_z() {
        let r = rotate_about_axis(DVec3::X, DVec3::Z, FRAC_PI_2);
        assert_close(r, DVec3::Y);
    }

    #[test]
    fn rodrigues_preserves_length_and_axis_component() {
        let axis = DVec3::new(1.0, 2.0, -0.5).normalize();
        let v = DVec3::new(0.3, -1.7, 2.2);
        let r = rotate_about_axis(v, axis, 1.234);
        assert!((r.length() - v.length()).abs() < 1e-12);
        assert!((r.dot(axis) - v.dot(axis)).abs() < 1e-12);
    }

    #[test]
    fn align_maps_y_onto_direction() {
        for dir in [
            DVec3::new(1.2, 0.0, 0.0),
            DVec3::new(0.3, -0.8, 1.9),
            DVec3::new(-2.0, 0.5, 0.1),
            DVec3::new(0.0, 0.0, -1.0),
        ] {
            let rot = AxisAngle::align_y_to(dir);
            assert_close(rot.rotate(DVec3::Y), dir.normalize());
        }
    }

    #[test]
    fn align_parallel_is_identity() {
        let rot = AxisAngle::align_y_to(DVec3::new(0.0, 3.0, 0.0));
        assert_eq!(rot, AxisAngle::IDENTITY);
    }

    #[test]
    fn align_antiparallel_is_half_turn_about_x() {
        let rot = AxisAngle::align_y_to(DVec3::new(0.0, -2.0, 0.0));
        assert_eq!(rot.axis, DVec3::X);
        assert_eq!(rot.angle, PI);
        assert_close(rot.rotate(DVec3::Y), DVec3::NEG_Y);
    }

    #[test]
    fn align_nearly_parallel_stays_finite() {
        let rot = AxisAngle::align_y_to(DVec3::new(1e-7, 1.0, -1e-7));
        assert!(rot.axis.is_finite());
        assert!(rot.angle.is_finite());
    }

    #[test]
    fn align_zero_length_is_identity() {
        assert_eq!(AxisAngle::align_y_to(DVec3::ZERO), AxisAngle::IDENTITY);
        assert_eq!(
            AxisAngle::align_y_to(DVec3::splat(f64::NAN)),
            AxisAngle::IDENTITY
        );
    }

    #[test]
    fn perpendicular_is_orthogonal_unit() {
        for dir in [
            DVec3::X,
            DVec3::Y,
            DVec3::Z,
            DVec3::NEG_Z,
            DVec3::new(0.1, 0.2, 0.97).normalize(),
            DVec3::new(-0.6, 0.8, 0.0),
        ] {
            let p = perpendicular(dir);
            assert!(p.dot(dir).abs() < 1e-12, "{dir:?} -> {p:?}");
            assert!((p.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn perpendicular_of_zero_falls_back() {
        assert_eq!(perpendicular(DVec3::ZERO), DVec3::X);
    }

    #[test]
    fn normalize_or_guards_zero() {
        assert_eq!(normalize_or(DVec3::ZERO, DVec3::Y), DVec3::Y);
        assert_close(
            normalize_or(DVec3::new(0.0, 0.0, 4.0), DVec3::Y),
            DVec3::Z,
        );
    }
}
