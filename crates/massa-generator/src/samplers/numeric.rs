//! Numeric samplers over the three parametric families plus uniform draws.

use crate::context::SampleContext;
use massa_core::{num::round_to, Draw, Value};

/// Log-normal draw rounded to `decimals` places. Strictly positive, used
/// for monetary amounts and other right-skewed quantities.
pub fn log_normal(ctx: &mut SampleContext, location: f64, scale: f64, decimals: u32) -> Value {
    Value::Float(round_to(ctx.log_normal(location, scale), decimals))
}

/// Normal draw rounded to `decimals` places. Occasional negative values
/// are tolerated for physical quantities; no clamping here.
pub fn normal(ctx: &mut SampleContext, mean: f64, std_dev: f64, decimals: u32) -> Value {
    Value::Float(round_to(ctx.normal(mean, std_dev), decimals))
}

/// Uniform float draw rounded to `decimals` places.
pub fn uniform(ctx: &mut SampleContext, min: f64, max: f64, decimals: u32) -> Value {
    Value::Float(round_to(ctx.uniform(min, max), decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SampleContext {
        SampleContext::new(Some(42))
    }

    #[test]
    fn test_log_normal_positive_and_rounded() {
        let mut ctx = ctx();
        for _ in 0..1000 {
            let v = log_normal(&mut ctx, 8.0, 1.5, 2).as_f64().unwrap();
            assert!(v > 0.0);
            assert_eq!(v, round_to(v, 2));
        }
    }

    #[test]
    fn test_normal_mean_roughly_centered() {
        let mut ctx = ctx();
        let n = 10_000;
        let sum: f64 = (0..n)
            .map(|_| normal(&mut ctx, 150.0, 80.0, 2).as_f64().unwrap())
            .sum();
        let mean = sum / n as f64;
        assert!((mean - 150.0).abs() < 5.0, "sample mean {mean}");
    }

    #[test]
    fn test_uniform_in_range() {
        let mut ctx = ctx();
        for _ in 0..1000 {
            let v = uniform(&mut ctx, 1.0, 6.0, 4).as_f64().unwrap();
            assert!((1.0..=6.0).contains(&v));
        }
    }
}
