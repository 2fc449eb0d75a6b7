//! Sphere and cylinder generators that append into a [`Mesh`].

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use super::Mesh;
use crate::util::vector::AxisAngle;

/// Default latitude band count for atom spheres.
pub const SPHERE_LAT_BANDS: u32 = 8;

/// Default longitude band count for atom spheres.
pub const SPHERE_LONG_BANDS: u32 = 8;

/// Default radial segment count for bond cylinders.
pub const CYLINDER_SEGMENTS: u32 = 6;

/// Vertices emitted by a sphere with the given band counts.
#[must_use]
pub const fn sphere_vertex_count(lat_bands: u32, long_bands: u32) -> usize {
    (lat_bands as usize + 1) * (long_bands as usize + 1)
}

/// Triangles emitted by a sphere with the given band counts.
#[must_use]
pub const fn sphere_face_count(lat_bands: u32, long_bands: u32) -> usize {
    2 * lat_bands as usize * long_bands as usize
}

/// Vertices emitted by a cylinder: a top/bottom pair per ring position,
/// with the seam position duplicated.
#[must_use]
pub const fn cylinder_vertex_count(segments: u32) -> usize {
    2 * (segments as usize + 1)
}

/// Triangles emitted by a cylinder's side wall (no caps).
#[must_use]
pub const fn cylinder_face_count(segments: u32) -> usize {
    2 * segments as usize
}

impl Mesh {
    /// Append a UV sphere.
    ///
    /// Emits `(lat_bands + 1) * (long_bands + 1)` vertices (the seam column
    /// is duplicated) and two triangles per band cell. Normals are the unit
    /// directions from `center`. Band counts are clamped to at least 1
    /// latitude and 3 longitude bands.
    pub fn push_sphere(
        &mut self,
        center: DVec3,
        radius: f64,
        lat_bands: u32,
        long_bands: u32,
    ) {
        let lat_bands = lat_bands.max(1);
        let long_bands = long_bands.max(3);
        let start = self.next_index();

        for lat in 0..=lat_bands {
            let theta = f64::from(lat) * PI / f64::from(lat_bands);
            let (sin_theta, cos_theta) = theta.sin_cos();

            for lon in 0..=long_bands {
                let phi = f64::from(lon) * TAU / f64::from(long_bands);
                let (sin_phi, cos_phi) = phi.sin_cos();

                let unit = DVec3::new(
                    cos_phi * sin_theta,
                    cos_theta,
                    sin_phi * sin_theta,
                );
                self.push_vertex(center + unit * radius, unit);
            }
        }

        let row = long_bands as usize + 1;
        for lat in 0..lat_bands as usize {
            for lon in 0..long_bands as usize {
                let first = start + lat * row + lon;
                let second = first + row;
                self.faces.push([first, second, first + 1]);
                self.faces.push([second, second + 1, first + 1]);
            }
        }
    }

    /// Append an uncapped cylinder from `start` to `end`.
    ///
    /// The ring is built around +Y at ±height/2, rotated onto the segment
    /// direction and translated to its midpoint. Emits
    /// `2 * (segments + 1)` vertices as interleaved top/bottom pairs and two
    /// triangles per radial cell. Normals point radially outward. A
    /// zero-length segment collapses to a flat ring at `start`. `segments`
    /// is clamped to at least 3.
    pub fn push_cylinder(
        &mut self,
        start: DVec3,
        end: DVec3,
        radius: f64,
        segments: u32,
    ) {
        let segments = segments.max(3);
        let axis = end - start;
        let half_height = axis.length() * 0.5;
        let rotation = AxisAngle::align_y_to(axis);
        let midpoint = (start + end) * 0.5;
        let base = self.next_index();

        for i in 0..=segments {
            let theta = f64::from(i) * TAU / f64::from(segments);
            let (sin, cos) = theta.sin_cos();
            let radial = DVec3::new(cos, 0.0, sin);

            let top = DVec3::new(radius * cos, half_height, radius * sin);
            let bottom = DVec3::new(radius * cos, -half_height, radius * sin);
            let normal = rotation.rotate(radial);

            self.push_vertex(midpoint + rotation.rotate(top), normal);
            self.push_vertex(midpoint + rotation.rotate(bottom), normal);
        }

        for i in 0..segments as usize {
            let top1 = base + i * 2;
            let bot1 = top1 + 1;
            let top2 = top1 + 2;
            let bot2 = top1 + 3;
            self.faces.push([top1, bot1, top2]);
            self.faces.push([bot1, bot2, top2]);
        }
    }
}
