//! massa-dados: synthetic Brazilian business dataset generator.
//!
//! Ten business domains (e-commerce sales, accounting, HR, logistics,
//! marketing, production, inventory, customers, suppliers, cashflow), each
//! described by a declarative field table and generated by the shared
//! engine in `massa-generator`, then written as CSV by `massa-csv`.

pub mod domains;
pub mod run;

pub use run::{run, RunOptions};
