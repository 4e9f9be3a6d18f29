//! The unit voxel record

use serde::Serialize;
use voxforge_core::Color;

/// One colored unit cube at an integer grid coordinate.
///
/// Identity is the coordinate triple; the color is only ever changed
/// through `VoxelModel::recolor_voxel`, never by re-adding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Voxel {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub color: Color,
}

impl Voxel {
    pub const fn new(x: i32, y: i32, z: i32, color: Color) -> Self {
        Self { x, y, z, color }
    }

    /// The coordinate triple that identifies this voxel
    pub const fn position(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }
}
