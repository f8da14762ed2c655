//! Test harness utilities: deterministic RNG and float assertions

use hepkit_core::{math::float_eq, Measurement};

/// Deterministic xorshift generator so scenario tests are reproducible
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / 16_777_216.0
    }

    pub fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Assert all three fields agree within `epsilon`
pub fn assert_measurement_close(actual: Measurement, expected: Measurement, epsilon: f64) {
    assert!(
        float_eq(actual.central(), expected.central(), epsilon)
            && float_eq(actual.abs_upper_error(), expected.abs_upper_error(), epsilon)
            && float_eq(actual.abs_lower_error(), expected.abs_lower_error(), epsilon),
        "expected {expected}, got {actual}"
    );
}
