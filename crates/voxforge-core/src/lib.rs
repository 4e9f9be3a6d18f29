//! VoxForge Core - Foundational types for the VoxForge engine
//!
//! This crate provides the types shared by all other VoxForge crates:
//! - `Color` - Hex-string voxel colors
//! - Error types and Result alias

mod color;
mod error;

pub use color::Color;
pub use error::{Result, VoxforgeError};
