//! # ACT-01: Scalar Utilities
//!
//! Stateless helpers over optional scalars and small aggregates. They mirror
//! the fixture module the type-guard patcher is exercised against.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure functions, no I/O
//!   - `add_maybe`: Optional-operand addition
//!   - `concatenate_strings`: Concatenation with a defaulted first operand
//!   - `convert_float_sequence_to_numbers`: Lossless `f32` to `f64` widening
//!   - `NamedValue`: Single-field value object
//!
//! ## Usage Example
//!
//! ```
//! use act_01_scalar_utils::{add_maybe, concatenate_strings, NamedValue};
//!
//! assert_eq!(add_maybe(Some(2.0), Some(3.5)), 5.5);
//! assert_eq!(concatenate_strings(None, "b"), "db");
//!
//! let value = NamedValue::new("Alice");
//! assert_eq!(value.to_lower("BOB"), "bob");
//! ```

pub mod domain;

pub use domain::{
    add_maybe, concatenate_strings, concatenate_strings_with_default,
    convert_float_sequence_to_numbers, NamedValue, DEFAULT_FIRST_OPERAND,
};
