//! Winding normalization and output-space conversion.

use glam::{DVec3, Vec3};

/// Maps a source-space position into the renderer's coordinate space.
///
/// A cyclic axis permutation only. Not strictly correct: a full
/// right-handed-to-left-handed conversion would also negate one axis, but
/// that would undo the winding fixed by [`wind_clockwise`]. The permutation
/// and the winding rule are coupled and must only ever change together.
pub fn to_output_space(v: Vec3) -> Vec3 {
    Vec3::new(v.y, v.z, v.x)
}

/// Whether the triangle's natural winding is clockwise relative to the
/// supplied polygon normal.
///
/// The polygon normal is the unweighted sum of the corner normals, used
/// purely as a sign oracle. Degenerate triangles and normals near-orthogonal
/// to the face give an undefined answer.
pub fn is_clockwise(corners: &[Vec3; 3], polygon_normal: DVec3) -> bool {
    // Compute a normal from two edges of the triangle; its dot product with
    // the supplied normal reveals the winding.
    let [v0, v1, v2] = corners.map(|v| v.as_dvec3());
    let face_normal = (v1 - v0).cross(v2 - v0);
    polygon_normal.dot(face_normal) < 0.0
}

/// Reorders a triangle's corners to wind clockwise relative to the supplied
/// polygon normal.
pub fn wind_clockwise(corners: [Vec3; 3], polygon_normal: DVec3) -> [Vec3; 3] {
    if is_clockwise(&corners, polygon_normal) {
        corners
    } else {
        let [v0, v1, v2] = corners;
        [v2, v1, v0]
    }
}
