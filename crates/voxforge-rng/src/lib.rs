//! VoxForge RNG - Deterministic seeded random stream
//!
//! Everything the generators draw goes through one `SeededRng` instance:
//! - `SeededRng` - Mulberry32 stream with integer/choice/chance helpers
//! - `Seed` - numeric or textual seed, hashed to a `u32`
//!
//! The stream is an owned object passed `&mut` into every generator and
//! component call. There is no global state, so independent generations
//! can run on separate streams concurrently.

mod seed;
mod stream;

pub use seed::Seed;
pub use stream::SeededRng;
