//! VoxForge Model - Voxel accumulation and rasterization primitives
//!
//! This crate provides the single output type of the generation engine:
//! - `Voxel` - One colored unit cube at an integer grid coordinate
//! - `VoxelModel` - Insertion-ordered, deduplicated voxel collection
//! - `Axis` - Cylinder orientation selector
//!
//! Generators populate one `VoxelModel` synchronously and hand it to the
//! caller; consumers treat it as read-only.

mod model;
mod voxel;

pub use model::{Axis, VoxelModel};
pub use voxel::Voxel;
