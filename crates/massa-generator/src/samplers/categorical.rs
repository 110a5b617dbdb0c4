//! Categorical samplers: weighted, uniform and multi-pick.

use crate::context::SampleContext;
use massa_core::{Draw, Value};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;

/// Weighted categorical draw. Over many calls the empirical frequency of
/// each value converges to its weight.
pub fn weighted(ctx: &mut SampleContext, values: &[String], weights: &[f64]) -> Value {
    // Parallel lengths and weight values were checked by DatasetSpec::validate.
    let dist = WeightedIndex::new(weights).expect("weights validated");
    let idx = dist.sample(ctx.rng());
    Value::Text(values[idx].clone())
}

/// Uniform categorical draw.
pub fn choice(ctx: &mut SampleContext, values: &[String]) -> Value {
    let value = values
        .choose(ctx.rng())
        .expect("value pool validated as non-empty");
    Value::Text(value.clone())
}

/// Pick `min..=max` distinct values from the pool and join them with `", "`.
pub fn sample_join(ctx: &mut SampleContext, pool: &[String], min: usize, max: usize) -> Value {
    let count = ctx.int_range(min as i64, max as i64) as usize;
    let picks: Vec<&str> = pool
        .choose_multiple(ctx.rng(), count)
        .map(|s| s.as_str())
        .collect();
    Value::Text(picks.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn ctx() -> SampleContext {
        SampleContext::new(Some(42))
    }

    #[test]
    fn test_weighted_frequencies_converge() {
        let mut ctx = ctx();
        let values: Vec<String> = ["Concluído", "Pendente", "Cancelado", "Devolvido"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let weights = [0.75, 0.15, 0.08, 0.02];

        let n = 100_000;
        let mut counts: HashMap<String, u64> = HashMap::new();
        for _ in 0..n {
            let v = weighted(&mut ctx, &values, &weights);
            *counts.entry(v.as_str().unwrap().to_string()).or_default() += 1;
        }

        for (value, weight) in values.iter().zip(weights.iter()) {
            let observed = *counts.get(value).unwrap_or(&0) as f64 / n as f64;
            assert!(
                (observed - weight).abs() < 0.02,
                "{value}: observed {observed}, expected {weight}"
            );
        }
    }

    #[test]
    fn test_choice_only_returns_pool_values() {
        let mut ctx = ctx();
        let values: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();

        for _ in 0..100 {
            let v = choice(&mut ctx, &values);
            assert!(values.contains(&v.as_str().unwrap().to_string()));
        }
    }

    #[test]
    fn test_sample_join_distinct_picks() {
        let mut ctx = ctx();
        let pool: Vec<String> = ["Vale Alimentação", "Plano de Saúde", "Vale Transporte", "Seguro de Vida"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        for _ in 0..100 {
            let v = sample_join(&mut ctx, &pool, 1, 4);
            let parts: Vec<&str> = v.as_str().unwrap().split(", ").collect();
            assert!((1..=4).contains(&parts.len()));

            let mut dedup = parts.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), parts.len(), "picks must be distinct");
        }
    }
}
