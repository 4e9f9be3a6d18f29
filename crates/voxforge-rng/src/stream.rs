//! Mulberry32 seeded stream — no external crate needed

/// A deterministic pseudo-random stream (Mulberry32).
///
/// Given the same seed and the same ordered sequence of draw calls, the
/// sequence of outputs is identical across processes and platforms. The
/// generators rely on this: call order is part of the seed-to-shape
/// contract, so draws must never be reordered casually.
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a stream from a numeric seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Returns a float in [0, 1)
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Returns an integer in `[min, max]` inclusive.
    ///
    /// `range(n, n)` always returns `n`.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "range: min {} > max {}", min, max);
        (self.next() * f64::from(max - min + 1)).floor() as i32 + min
    }

    /// Returns a reference to a uniformly chosen item.
    ///
    /// `items` must be non-empty. A single-element slice always yields
    /// that element.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next() * items.len() as f64) as usize]
    }

    /// Returns `true` with the given probability.
    ///
    /// `chance(0.0)` is always false and `chance(1.0)` is always true;
    /// these are exact boundary guarantees, not probabilistic ones,
    /// because `next()` never reaches 1.0.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next() < probability
    }

    /// Returns a reference to an item chosen by relative weight.
    ///
    /// `entries` must be non-empty and weights non-negative.
    pub fn weighted<'a, T>(&mut self, entries: &'a [(T, f32)]) -> &'a T {
        let total: f32 = entries.iter().map(|(_, w)| w).sum();
        let mut roll = (self.next() as f32) * total;
        for (item, weight) in entries {
            if roll < *weight {
                return item;
            }
            roll -= weight;
        }
        // Rounding can push the roll past the last weight boundary.
        &entries[entries.len() - 1].0
    }
}
