//! Reference Random Stream
//!
//! Draws integers and normals exactly the way the reference application's
//! legacy generator does, so a seeded sample matches it value for value.
//!
//! - Integers: masked rejection on 32-bit words (one word per attempt)
//! - Doubles: 53 bits built from two 32-bit words
//! - Normals: Marsaglia polar method, second variate cached for the next call
//!
//! `log`/`sqrt` go through `libm` so the stream is identical on every platform.

use rand::RngCore;
use rand_mt::Mt;

/// Seeded draw stream over any 32-bit word source
pub struct ReferenceStream<R> {
    rng: R,
    cached_normal: Option<f64>,
}

impl ReferenceStream<Mt> {
    /// MT19937 seeded with `init_genrand(seed)`
    pub fn seeded(seed: u32) -> Self {
        Self::new(Mt::new(seed))
    }
}

impl<R: RngCore> ReferenceStream<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            cached_normal: None,
        }
    }

    /// Uniform double in [0, 1) with 53 bits of precision
    pub fn next_double(&mut self) -> f64 {
        let a = (self.rng.next_u32() >> 5) as f64;
        let b = (self.rng.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) / 9_007_199_254_740_992.0
    }

    /// Uniform integer in `[low, high]` (both inclusive)
    pub fn bounded(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high);
        let range = high - low;
        if range == 0 {
            return low;
        }

        let mask = u32::MAX >> range.leading_zeros();
        loop {
            let value = self.rng.next_u32() & mask;
            if value <= range {
                return low + value;
            }
        }
    }

    /// Standard normal variate
    pub fn standard_normal(&mut self) -> f64 {
        if let Some(cached) = self.cached_normal.take() {
            return cached;
        }

        let (x1, x2, r2) = loop {
            let x1 = 2.0 * self.next_double() - 1.0;
            let x2 = 2.0 * self.next_double() - 1.0;
            let r2 = x1 * x1 + x2 * x2;
            if r2 < 1.0 && r2 != 0.0 {
                break (x1, x2, r2);
            }
        };

        let f = libm::sqrt(-2.0 * libm::log(r2) / r2);
        self.cached_normal = Some(f * x1);
        f * x2
    }

    /// Normal variate with the given mean and standard deviation
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }
}
