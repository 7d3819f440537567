//! Seeded pseudo-random source for puzzle generation

/// 32-bit linear congruential generator
///
/// Uses the Numerical Recipes constants: `state = state * 1664525 +
/// 1013904223 (mod 2^32)`. The constants and the modulo range draw in
/// [`Lcg::next_range`] are a compatibility contract: changing either
/// changes which puzzles a shared seed produces. Seed compatibility with
/// the original web implementation is not preserved; within this crate a
/// seed reproduces the same puzzles across versions and platforms.
///
/// Not used for anything security-sensitive, only for reproducible
/// puzzle construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator from an integer seed
    #[inline]
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform draw over the inclusive range `[lo, hi]`
    ///
    /// # Panics
    /// Panics in debug mode if `lo > hi`.
    pub fn next_range(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi, "next_range requires lo <= hi");
        lo + self.next_u32() % (hi - lo + 1)
    }
}
