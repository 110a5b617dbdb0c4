//! Individual samplers for the declarative `Sampler` configurations.
//!
//! Each module covers one family; `sample` dispatches on the configuration
//! from the field table.

pub mod categorical;
pub mod ident;
pub mod numeric;

use crate::context::SampleContext;
use massa_core::{Draw, Sampler, Value};

/// Produce one value for the given sampler configuration.
///
/// `index` is the 0-based row index, used by sequential identifiers.
pub fn sample(sampler: &Sampler, ctx: &mut SampleContext, index: u64) -> Value {
    match sampler {
        Sampler::Weighted { values, weights } => categorical::weighted(ctx, values, weights),

        Sampler::Choice { values } => categorical::choice(ctx, values),

        Sampler::SampleJoin { pool, min, max } => categorical::sample_join(ctx, pool, *min, *max),

        Sampler::LogNormal {
            location,
            scale,
            decimals,
        } => numeric::log_normal(ctx, *location, *scale, *decimals),

        Sampler::Normal {
            mean,
            std_dev,
            decimals,
        } => numeric::normal(ctx, *mean, *std_dev, *decimals),

        Sampler::Beta { alpha, beta } => Value::Float(ctx.beta(*alpha, *beta)),

        Sampler::Uniform { min, max, decimals } => numeric::uniform(ctx, *min, *max, *decimals),

        Sampler::IntRange { min, max } => Value::Int(ctx.int_range(*min, *max)),

        Sampler::DateWithinDays { back } => Value::Date(ctx.date_within_days(*back)),

        Sampler::SeqId { prefix, width } => ident::seq_id(prefix, *width, index),

        Sampler::RandId {
            prefix,
            min,
            max,
            width,
        } => ident::rand_id(ctx, prefix, *min, *max, *width),

        Sampler::Fake(kind) => Value::Text(ctx.fake(kind)),
    }
}
