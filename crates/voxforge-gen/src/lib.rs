//! VoxForge Gen - Procedural voxel object generation
//!
//! The top half of the engine: everything between a seed and a finished
//! voxel model.
//! - `Category` - The four object families (robot, spaceship, animal, monster)
//! - `Palette` - Five-slot color sets, drawn per category
//! - `components` - Mid-level builders (limbs, heads, weapons, wings...)
//! - `decoration` - Recolor-only emblems, symbols and hull passes
//! - `generators` - The category grammars and the `generate` entry point
//! - `GeneratedObject` - The output record handed to collaborators
//!
//! Reproducibility contract: `generate(category, seed)` yields the same
//! voxel coordinate/color set for the same inputs, every time, on every
//! platform. Draw order inside the grammars is therefore load-bearing.

mod category;
mod object;
mod palette;

pub mod components;
pub mod decoration;
pub mod generators;

pub use category::Category;
pub use generators::generate;
pub use object::GeneratedObject;
pub use palette::Palette;
pub use voxforge_rng::Seed;
