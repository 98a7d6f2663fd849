#![no_std]

// Shared library for two-party escrowed swap contracts
// Contains the swap types, fee arithmetic and token custody helpers

pub mod types;
pub mod fee;
pub mod custody;

// Re-export commonly used types for easier imports
pub use types::*;
pub use fee::{split as split_leg, validate_fee_percent, LegSplit, PERCENT_DENOMINATOR};
pub use custody::{collect, ensure_pullable, pay_out};
