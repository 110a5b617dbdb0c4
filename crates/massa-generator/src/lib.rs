//! Row-generation engine for the massa-dados dataset generator.
//!
//! This crate turns a validated `DatasetSpec` into rows, deterministically
//! under a fixed seed.
//!
//! # Architecture
//!
//! ```text
//! DatasetSpec (field table)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │   RowGenerator   │
//! │                  │
//! │  - SampleContext │  seeded StdRng + today + pt-BR provider + carry
//! │  - eval order    │  (stage, declaration); output stays in column order
//! │  - row index     │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Row { (column, Value), … }
//! ```
//!
//! # Example
//!
//! ```
//! use massa_core::{DatasetSpec, FieldSpec, Sampler};
//! use massa_generator::RowGenerator;
//!
//! let spec = DatasetSpec::new(
//!     "exemplo",
//!     "exemplo.csv",
//!     vec![
//!         FieldSpec::sampled("Id", Sampler::SeqId { prefix: "EX", width: 6 }),
//!         FieldSpec::sampled(
//!             "Status",
//!             Sampler::weighted(&["Ativo", "Inativo"], &[0.8, 0.2]),
//!         ),
//!     ],
//! );
//!
//! let mut generator = RowGenerator::new(spec, Some(42)).unwrap();
//! let row = generator.next_row();
//! assert_eq!(row.get_str("Id"), Some("EX000001"));
//! ```

pub mod context;
pub mod engine;
pub mod provider;
pub mod samplers;

pub use context::{sub_seed, SampleContext};
pub use engine::{RowGenerator, RowIterator};
