//! Dataset specifications: declarative field tables plus one-shot validation.
//!
//! A [`DatasetSpec`] lists every column of one output dataset in its exact
//! serialization order. Each [`FieldSpec`] is either `Sampled` (a stateless
//! draw described by a [`Sampler`] configuration) or `Derived` (a plain
//! function computed from cells generated earlier in the same row).
//!
//! Specs are validated once, before any row is generated. After a successful
//! [`DatasetSpec::validate`] the engine may rely on the checked invariants
//! (parallel weight lengths, well-formed distribution parameters, unique
//! column names); violating them is a programming error in a field table,
//! not a runtime condition.

use crate::row::Row;
use crate::value::Value;
use chrono::NaiveDate;

/// Error type for dataset specification validation.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// Dataset has no columns
    #[error("dataset '{dataset}' has no columns")]
    NoColumns { dataset: String },

    /// Two columns share a name
    #[error("dataset '{dataset}' declares column '{column}' more than once")]
    DuplicateColumn { dataset: String, column: String },

    /// Weighted sampler with mismatched parallel arrays
    #[error(
        "column '{dataset}.{column}' has {values} values but {weights} weights"
    )]
    WeightMismatch {
        dataset: String,
        column: String,
        values: usize,
        weights: usize,
    },

    /// Weights do not sum to ~1.0
    #[error("column '{dataset}.{column}' weights sum to {sum}, expected 1.0")]
    WeightSum {
        dataset: String,
        column: String,
        sum: f64,
    },

    /// Categorical sampler with an empty value pool
    #[error("column '{dataset}.{column}' has an empty value pool")]
    EmptyPool { dataset: String, column: String },

    /// Malformed sampler parameter (non-finite, non-positive, inverted range…)
    #[error("column '{dataset}.{column}': {reason}")]
    InvalidParameter {
        dataset: String,
        column: String,
        reason: String,
    },
}

/// Fields supplied by the locale-aware fake-data provider.
///
/// The provider is a black box: values are realistic-looking Brazilian
/// Portuguese strings, with no checksum guarantees for document numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeKind {
    /// Full personal name
    FullName,
    /// Company name
    Company,
    /// City name
    City,
    /// Two-letter federative unit code (UF)
    StateAbbr,
    /// E-mail address
    Email,
    /// Cell phone number, `(##) 9####-####`
    Phone,
    /// CPF-shaped document number, `###.###.###-##`
    Cpf,
    /// CNPJ-shaped document number, `##.###.###/####-##`
    Cnpj,
    /// Postal code, `#####-###`
    Cep,
    /// Street address with building number
    StreetAddress,
    /// Job title
    JobTitle,
    /// Single lowercase word
    Word,
    /// Short phrase of roughly `words` words, no trailing period
    Phrase { words: usize },
    /// Full sentence with trailing period
    Sentence,
}

/// Declarative sampler configuration for one column.
#[derive(Debug, Clone)]
pub enum Sampler {
    /// Weighted categorical draw: parallel values/weights, weights sum to ~1
    Weighted {
        values: Vec<String>,
        weights: Vec<f64>,
    },

    /// Uniform categorical draw
    Choice { values: Vec<String> },

    /// Log-normal draw (location/scale of the underlying normal), rounded.
    /// Strictly positive; used for monetary and other right-skewed amounts.
    LogNormal {
        location: f64,
        scale: f64,
        decimals: u32,
    },

    /// Normal draw, rounded. May produce negative values; physical
    /// quantities are intentionally left unclamped.
    Normal {
        mean: f64,
        std_dev: f64,
        decimals: u32,
    },

    /// Beta draw in [0, 1]
    Beta { alpha: f64, beta: f64 },

    /// Uniform float draw, rounded
    Uniform { min: f64, max: f64, decimals: u32 },

    /// Uniform integer draw, inclusive on both ends
    IntRange { min: i64, max: i64 },

    /// Uniform date in `[today - back, today]`
    DateWithinDays { back: u32 },

    /// Prefix + zero-padded 1-based row index, e.g. `PED000001`
    SeqId { prefix: &'static str, width: usize },

    /// Prefix + zero-padded random integer in `[min, max]`
    RandId {
        prefix: &'static str,
        min: i64,
        max: i64,
        width: usize,
    },

    /// `min..=max` distinct picks from the pool, joined by `", "`
    SampleJoin {
        pool: Vec<String>,
        min: usize,
        max: usize,
    },

    /// Delegate to the fake-data provider
    Fake(FakeKind),
}

impl Sampler {
    /// Weighted categorical sampler from parallel slices.
    pub fn weighted(values: &[&str], weights: &[f64]) -> Self {
        Self::Weighted {
            values: values.iter().map(|s| s.to_string()).collect(),
            weights: weights.to_vec(),
        }
    }

    /// Uniform categorical sampler.
    pub fn choice(values: &[&str]) -> Self {
        Self::Choice {
            values: values.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Distinct multi-pick sampler joined with `", "`.
    pub fn sample_join(pool: &[&str], min: usize, max: usize) -> Self {
        Self::SampleJoin {
            pool: pool.iter().map(|s| s.to_string()).collect(),
            min,
            max,
        }
    }
}

/// Derivation function: computes a cell from previously generated cells.
///
/// The `Draw` context provides the random primitives and the running
/// accumulator, so derivations stay deterministic under a fixed seed.
pub type DeriveFn = fn(&Row, &mut dyn Draw) -> Value;

/// How a column's value is produced.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Stateless draw from a sampler configuration
    Sampled(Sampler),
    /// Function of earlier cells in the same row
    Derived(DeriveFn),
}

/// Specification of a single column.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Column name, exactly as written to the CSV header
    pub name: &'static str,

    /// How the value is produced
    pub kind: FieldKind,

    /// Probability that the cell is `Null` instead of a generated value.
    /// Checked against a fresh uniform draw per row; 0.0 means required.
    pub absent_probability: f64,

    /// Evaluation stage. Fields are generated by ascending
    /// `(stage, declaration order)` but always serialized in declaration
    /// order, so a derived column may precede its inputs in the file.
    pub stage: u8,
}

impl FieldSpec {
    /// A sampled column (stage 0).
    pub fn sampled(name: &'static str, sampler: Sampler) -> Self {
        Self {
            name,
            kind: FieldKind::Sampled(sampler),
            absent_probability: 0.0,
            stage: 0,
        }
    }

    /// A derived column (stage 1 unless overridden).
    pub fn derived(name: &'static str, derive: DeriveFn) -> Self {
        Self {
            name,
            kind: FieldKind::Derived(derive),
            absent_probability: 0.0,
            stage: 1,
        }
    }

    /// Make the column optional with the given absence probability.
    pub fn absent(mut self, probability: f64) -> Self {
        self.absent_probability = probability;
        self
    }

    /// Override the evaluation stage.
    pub fn stage(mut self, stage: u8) -> Self {
        self.stage = stage;
        self
    }
}

/// Full specification of one output dataset.
#[derive(Debug, Clone)]
pub struct DatasetSpec {
    /// Short domain name (CLI-facing), e.g. `ecommerce`
    pub name: &'static str,

    /// Output file name, e.g. `vendas_ecommerce.csv`
    pub file_name: &'static str,

    /// Seed for the running accumulator, for datasets that thread a
    /// balance across rows (cashflow only)
    pub opening_balance: Option<f64>,

    /// Columns in serialization order
    pub fields: Vec<FieldSpec>,
}

impl DatasetSpec {
    /// Create a dataset spec with no running accumulator.
    pub fn new(name: &'static str, file_name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            file_name,
            opening_balance: None,
            fields,
        }
    }

    /// Set the opening balance for the running accumulator.
    pub fn with_opening_balance(mut self, balance: f64) -> Self {
        self.opening_balance = Some(balance);
        self
    }

    /// Column names in serialization order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Validate the field table. Run once before generation; the engine
    /// relies on the invariants checked here.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.fields.is_empty() {
            return Err(SpecError::NoColumns {
                dataset: self.name.to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name) {
                return Err(SpecError::DuplicateColumn {
                    dataset: self.name.to_string(),
                    column: field.name.to_string(),
                });
            }
            self.validate_field(field)?;
        }

        if let Some(balance) = self.opening_balance {
            if !balance.is_finite() {
                return Err(SpecError::InvalidParameter {
                    dataset: self.name.to_string(),
                    column: "<opening_balance>".to_string(),
                    reason: format!("opening balance {balance} is not finite"),
                });
            }
        }

        Ok(())
    }

    fn validate_field(&self, field: &FieldSpec) -> Result<(), SpecError> {
        let invalid = |reason: String| SpecError::InvalidParameter {
            dataset: self.name.to_string(),
            column: field.name.to_string(),
            reason,
        };

        if !(0.0..=1.0).contains(&field.absent_probability) {
            return Err(invalid(format!(
                "absence probability {} outside [0, 1]",
                field.absent_probability
            )));
        }

        let sampler = match &field.kind {
            FieldKind::Sampled(sampler) => sampler,
            FieldKind::Derived(_) => return Ok(()),
        };

        match sampler {
            Sampler::Weighted { values, weights } => {
                if values.is_empty() {
                    return Err(SpecError::EmptyPool {
                        dataset: self.name.to_string(),
                        column: field.name.to_string(),
                    });
                }
                if values.len() != weights.len() {
                    return Err(SpecError::WeightMismatch {
                        dataset: self.name.to_string(),
                        column: field.name.to_string(),
                        values: values.len(),
                        weights: weights.len(),
                    });
                }
                if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(invalid("negative or non-finite weight".to_string()));
                }
                let sum: f64 = weights.iter().sum();
                if (sum - 1.0).abs() > 1e-6 {
                    return Err(SpecError::WeightSum {
                        dataset: self.name.to_string(),
                        column: field.name.to_string(),
                        sum,
                    });
                }
            }
            Sampler::Choice { values } => {
                if values.is_empty() {
                    return Err(SpecError::EmptyPool {
                        dataset: self.name.to_string(),
                        column: field.name.to_string(),
                    });
                }
            }
            Sampler::LogNormal {
                location, scale, ..
            } => {
                if !location.is_finite() || !scale.is_finite() || *scale <= 0.0 {
                    return Err(invalid(format!(
                        "log-normal parameters ({location}, {scale}) invalid"
                    )));
                }
            }
            Sampler::Normal { mean, std_dev, .. } => {
                if !mean.is_finite() || !std_dev.is_finite() || *std_dev <= 0.0 {
                    return Err(invalid(format!(
                        "normal parameters ({mean}, {std_dev}) invalid"
                    )));
                }
            }
            Sampler::Beta { alpha, beta } => {
                if !alpha.is_finite() || !beta.is_finite() || *alpha <= 0.0 || *beta <= 0.0 {
                    return Err(invalid(format!(
                        "beta parameters ({alpha}, {beta}) invalid"
                    )));
                }
            }
            Sampler::Uniform { min, max, .. } => {
                if !min.is_finite() || !max.is_finite() || min > max {
                    return Err(invalid(format!("uniform range [{min}, {max}] invalid")));
                }
            }
            Sampler::IntRange { min, max } => {
                if min > max {
                    return Err(invalid(format!("integer range [{min}, {max}] inverted")));
                }
            }
            Sampler::RandId { min, max, .. } => {
                if min > max {
                    return Err(invalid(format!("id range [{min}, {max}] inverted")));
                }
            }
            Sampler::SampleJoin { pool, min, max } => {
                if pool.is_empty() {
                    return Err(SpecError::EmptyPool {
                        dataset: self.name.to_string(),
                        column: field.name.to_string(),
                    });
                }
                if min > max || *max > pool.len() {
                    return Err(invalid(format!(
                        "sample range [{min}, {max}] invalid for pool of {}",
                        pool.len()
                    )));
                }
            }
            Sampler::DateWithinDays { .. } | Sampler::SeqId { .. } | Sampler::Fake(_) => {}
        }

        Ok(())
    }
}

/// Random/context primitives available to derivation functions.
///
/// Implemented by the engine's sampling context. Keeping the trait here lets
/// the field tables stay free of any RNG or provider dependency.
pub trait Draw {
    /// True with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform float in `[min, max]`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;

    /// Uniform integer in `[min, max]`, inclusive.
    fn int_range(&mut self, min: i64, max: i64) -> i64;

    /// Normal draw.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Log-normal draw (location/scale of the underlying normal).
    fn log_normal(&mut self, location: f64, scale: f64) -> f64;

    /// Beta draw in [0, 1].
    fn beta(&mut self, alpha: f64, beta: f64) -> f64;

    /// Uniform date in `[today - back, today]`.
    fn date_within_days(&mut self, back: u32) -> NaiveDate;

    /// Generation-time reference date.
    fn today(&self) -> NaiveDate;

    /// Running accumulator carried across rows.
    fn carry(&self) -> f64;

    /// Update the running accumulator for the next row.
    fn set_carry(&mut self, value: f64);

    /// Value from the fake-data provider.
    fn fake(&mut self, kind: &FakeKind) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_spec(fields: Vec<FieldSpec>) -> DatasetSpec {
        DatasetSpec::new("teste", "teste.csv", fields)
    }

    #[test]
    fn test_validate_accepts_wellformed_spec() {
        let spec = minimal_spec(vec![
            FieldSpec::sampled("Id", Sampler::SeqId { prefix: "T", width: 6 }),
            FieldSpec::sampled(
                "Status",
                Sampler::weighted(&["Ativo", "Inativo"], &[0.7, 0.3]),
            ),
            FieldSpec::sampled(
                "Valor",
                Sampler::LogNormal {
                    location: 8.0,
                    scale: 1.5,
                    decimals: 2,
                },
            ),
        ]);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_weight_length_mismatch() {
        let spec = minimal_spec(vec![FieldSpec::sampled(
            "Status",
            Sampler::weighted(&["A", "B", "C"], &[0.5, 0.5]),
        )]);
        assert!(matches!(
            spec.validate(),
            Err(SpecError::WeightMismatch { values: 3, weights: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_weight_sum_off_one() {
        let spec = minimal_spec(vec![FieldSpec::sampled(
            "Status",
            Sampler::weighted(&["A", "B"], &[0.5, 0.4]),
        )]);
        assert!(matches!(spec.validate(), Err(SpecError::WeightSum { .. })));
    }

    #[test]
    fn test_validate_rejects_duplicate_column() {
        let spec = minimal_spec(vec![
            FieldSpec::sampled("Nome", Sampler::Fake(FakeKind::FullName)),
            FieldSpec::sampled("Nome", Sampler::Fake(FakeKind::FullName)),
        ]);
        assert!(matches!(
            spec.validate(),
            Err(SpecError::DuplicateColumn { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_distribution_parameters() {
        let spec = minimal_spec(vec![FieldSpec::sampled(
            "Peso",
            Sampler::Normal {
                mean: 5.0,
                std_dev: -1.0,
                decimals: 2,
            },
        )]);
        assert!(matches!(
            spec.validate(),
            Err(SpecError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_absence_probability() {
        let spec = minimal_spec(vec![FieldSpec::sampled(
            "Obs",
            Sampler::Fake(FakeKind::Sentence),
        )
        .absent(1.5)]);
        assert!(matches!(
            spec.validate(),
            Err(SpecError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_column_names_in_declaration_order() {
        let spec = minimal_spec(vec![
            FieldSpec::sampled("B", Sampler::IntRange { min: 0, max: 1 }),
            FieldSpec::sampled("A", Sampler::IntRange { min: 0, max: 1 }),
        ]);
        assert_eq!(spec.column_names(), vec!["B", "A"]);
    }
}
