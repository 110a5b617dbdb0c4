//! Core types for the massa-dados dataset generator.
//!
//! This crate defines the declarative side of the system: the scalar
//! [`Value`] model, the ordered [`Row`] representation, and the
//! [`DatasetSpec`] field tables that describe how each dataset column is
//! produced. It deliberately contains no random number generation; the
//! engine crate implements the [`Draw`] seam defined here.

pub mod num;
pub mod row;
pub mod spec;
pub mod value;

pub use num::{ratio_pct, round_to};
pub use row::Row;
pub use spec::{
    DatasetSpec, Draw, FakeKind, FieldKind, FieldSpec, Sampler, SpecError,
};
pub use value::Value;
