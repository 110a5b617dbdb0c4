//! The ten business-domain dataset specifications.
//!
//! Column names, order, output file names, categorical pools, weights and
//! distribution parameters are an external contract and are reproduced
//! exactly; consumers join on these headers.

pub mod cashflow;
pub mod controllership;
pub mod customers;
pub mod ecommerce;
pub mod hr;
pub mod inventory;
pub mod logistics;
pub mod marketing;
pub mod production;
pub mod suppliers;

use massa_core::DatasetSpec;

/// All domain specs in the canonical generation order.
///
/// The position of a spec in this list is its stable index for per-domain
/// seed derivation, so subsetting with `--domains` does not change the
/// data a domain produces under a given base seed.
pub fn all() -> Vec<DatasetSpec> {
    vec![
        ecommerce::spec(),
        controllership::spec(),
        hr::spec(),
        logistics::spec(),
        marketing::spec(),
        production::spec(),
        inventory::spec(),
        customers::spec(),
        suppliers::spec(),
        cashflow::spec(),
    ]
}
