//! Domain Layer - Pure functions over scalars and sequences
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Inputs are never mutated

pub mod arithmetic;
pub mod named_value;
pub mod sequences;
pub mod strings;

pub use arithmetic::add_maybe;
pub use named_value::NamedValue;
pub use sequences::convert_float_sequence_to_numbers;
pub use strings::{concatenate_strings, concatenate_strings_with_default, DEFAULT_FIRST_OPERAND};
