//! Sampling context: the explicitly constructed generation state.
//!
//! `SampleContext` replaces what an ad-hoc script would keep as module-level
//! globals: the random generator, the fake-data provider and the reference
//! date. Constructing it with a seed makes a whole generation run
//! reproducible; constructing it without one draws entropy from the OS.

use crate::provider;
use chrono::{Duration, NaiveDate, Utc};
use massa_core::{Draw, FakeKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, LogNormal, Normal};

/// Derive a per-dataset seed from a base seed and a stable dataset index,
/// so datasets generated in one run stay statistically independent while
/// remaining individually reproducible.
pub fn sub_seed(base: u64, index: u64) -> u64 {
    base.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
}

/// Generation context threaded through every sampler and derivation call.
pub struct SampleContext {
    rng: StdRng,
    today: NaiveDate,
    carry: f64,
}

impl SampleContext {
    /// Create a context. `Some(seed)` gives deterministic output; `None`
    /// seeds from OS entropy (the default generation behavior).
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            today: Utc::now().date_naive(),
            carry: 0.0,
        }
    }

    /// Override the reference date. Date samplers draw relative to `today`,
    /// so tests pin it to make date columns reproducible across days.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Direct access to the underlying RNG, for samplers that feed it to
    /// external distributions or the fake-data provider.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Draw for SampleContext {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..=max)
    }

    fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let dist = Normal::new(mean, std_dev).expect("valid normal parameters");
        dist.sample(&mut self.rng)
    }

    fn log_normal(&mut self, location: f64, scale: f64) -> f64 {
        let dist = LogNormal::new(location, scale).expect("valid log-normal parameters");
        dist.sample(&mut self.rng)
    }

    fn beta(&mut self, alpha: f64, beta: f64) -> f64 {
        let dist = Beta::new(alpha, beta).expect("valid beta parameters");
        dist.sample(&mut self.rng)
    }

    fn date_within_days(&mut self, back: u32) -> NaiveDate {
        let offset = self.rng.gen_range(0..=i64::from(back));
        self.today - Duration::days(offset)
    }

    fn today(&self) -> NaiveDate {
        self.today
    }

    fn carry(&self) -> f64 {
        self.carry
    }

    fn set_carry(&mut self, value: f64) {
        self.carry = value;
    }

    fn fake(&mut self, kind: &FakeKind) -> String {
        provider::fake_value(&mut self.rng, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_context_is_deterministic() {
        let mut a = SampleContext::new(Some(42));
        let mut b = SampleContext::new(Some(42));

        for _ in 0..20 {
            assert_eq!(a.int_range(0, 1000), b.int_range(0, 1000));
        }
    }

    #[test]
    fn test_log_normal_strictly_positive() {
        let mut ctx = SampleContext::new(Some(7));
        for _ in 0..1000 {
            assert!(ctx.log_normal(8.0, 1.5) > 0.0);
        }
    }

    #[test]
    fn test_beta_bounded() {
        let mut ctx = SampleContext::new(Some(7));
        for _ in 0..1000 {
            let v = ctx.beta(2.0, 20.0);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_date_within_days_range() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut ctx = SampleContext::new(Some(1)).with_today(today);

        for _ in 0..200 {
            let d = ctx.date_within_days(30);
            assert!(d <= today);
            assert!(d >= today - Duration::days(30));
        }
    }

    #[test]
    fn test_carry_roundtrip() {
        let mut ctx = SampleContext::new(Some(1));
        assert_eq!(ctx.carry(), 0.0);
        ctx.set_carry(100_000.0);
        assert_eq!(ctx.carry(), 100_000.0);
    }

    #[test]
    fn test_sub_seed_spreads_indexes() {
        assert_ne!(sub_seed(42, 0), sub_seed(42, 1));
        assert_ne!(sub_seed(42, 1), sub_seed(42, 2));
        assert_eq!(sub_seed(42, 3), sub_seed(42, 3));
    }
}
