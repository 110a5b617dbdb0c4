//! Identifier samplers: sequential and random zero-padded ids.

use crate::context::SampleContext;
use massa_core::{Draw, Value};

/// Prefix + zero-padded 1-based row index, e.g. `PED000001` for index 0.
/// Uniqueness within a run follows from the index; nothing is enforced
/// across runs.
pub fn seq_id(prefix: &str, width: usize, index: u64) -> Value {
    Value::Text(format!("{prefix}{:0width$}", index + 1))
}

/// Prefix + zero-padded random integer in `[min, max]`.
pub fn rand_id(ctx: &mut SampleContext, prefix: &str, min: i64, max: i64, width: usize) -> Value {
    let n = ctx.int_range(min, max);
    Value::Text(format!("{prefix}{n:0width$}"))
}
