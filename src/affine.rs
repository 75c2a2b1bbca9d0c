//! Affine transforms between voxel space and world space.
//!
//! The NRRD convention is that each `space directions` vector is the
//! world-space displacement produced by one unit step along the
//! corresponding voxel axis, so the voxel→world map is
//! `world = Σ voxel[i] * direction[i] + origin`. The direction vectors are
//! the columns of the linear block of the homogeneous transform.

use crate::error::{NrrdError, Result};
use nalgebra::{Matrix4, Point3};

/// A 4x4 homogeneous transform over f64.
pub type Affine4 = Matrix4<f64>;

/// Build the voxel→world homogeneous transform from the header's space
/// directions and origin. Only the first three direction vectors are used.
pub fn voxel_to_world(directions: &[[f64; 3]], origin: [f64; 3]) -> Affine4 {
    let d = directions;
    Affine4::new(
        d[0][0], d[1][0], d[2][0], origin[0],
        d[0][1], d[1][1], d[2][1], origin[1],
        d[0][2], d[1][2], d[2][2], origin[2],
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Map a world coordinate back to a continuous voxel position by inverting
/// the given voxel→world transform.
pub fn world_to_voxel(voxel_to_world: &Affine4, world: [f64; 3]) -> Result<[f64; 3]> {
    let world_to_voxel = voxel_to_world
        .try_inverse()
        .ok_or(NrrdError::DegenerateGeometry)?;
    let voxel = world_to_voxel.transform_point(&Point3::new(world[0], world[1], world[2]));
    Ok([voxel.x, voxel.y, voxel.z])
}
