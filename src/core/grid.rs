use core::fmt;

use crate::core::exp2i::exp2i;

/// Evenly spaced, non-positive sample points `x_k = -k * 2^step_log2`
/// for `k` in `0..=steps`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SampleGrid {
    steps: u32,
    step_log2: i32,
}

impl SampleGrid {
    /// `step_log2` outside `-1022..=1023` is clamped (see [`exp2i`]).
    pub const fn new(steps: u32, step_log2: i32) -> Self {
        Self { steps, step_log2 }
    }

    /// Index of the last sample (inclusive).
    #[inline]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    #[inline]
    pub const fn step_log2(&self) -> i32 {
        self.step_log2
    }

    /// Spacing between samples; exact since it is a power of two.
    #[inline]
    pub fn step(&self) -> f64 {
        exp2i(self.step_log2)
    }

    /// Number of samples, both endpoints included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.steps as usize + 1
    }

    // Never empty: k = 0 is always present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Sample input for index `k`. The negation happens on the integer so
    /// that `k = 0` yields `+0.0`.
    #[inline]
    pub fn x(&self, k: u32) -> f64 {
        (-(k as i64)) as f64 * self.step()
    }

    /// `(lowest x, highest x)`, i.e. `(-steps * step, 0.0)`.
    pub fn interval(&self) -> (f64, f64) {
        (self.x(self.steps), 0.0)
    }

    /// `(k, x_k)` in ascending `k` order.
    pub fn samples(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (0..=self.steps).map(move |k| (k, self.x(k)))
    }
}

impl fmt::Display for SampleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.interval();
        write!(
            f,
            "SampleGrid(k=0..={}, step=2^{}, x in [{}, {}])",
            self.steps, self.step_log2, a, b
        )
    }
}
