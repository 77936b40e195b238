//! Test RNG — deterministic `RandomSource` implementations for tests.

use dicebox_core::rng::RandomSource;

/// A no-op source that always returns `min`. Suitable for tests that do
/// not depend on specific die values.
#[derive(Debug)]
pub struct MockRng;

impl RandomSource for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// A source that returns values from a predetermined sequence. Panics if
/// the sequence is exhausted. Used in tests that need specific, repeatable
/// die values.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
