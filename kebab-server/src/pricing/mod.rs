//! Pricing / nutrition aggregation
//!
//! Pure functions from a resolved composition to totals. Money is summed
//! with `rust_decimal` and converted back to `f64` for the wire.

pub mod aggregator;

pub use aggregator::{
    aggregate, breakdown_lines, popular_combos, price_composition, round_to, to_decimal, to_f64,
};
