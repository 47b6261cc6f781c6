//! # Integration Tests
//!
//! - `fixture_module`: the scalar utilities against the fixture's contract
//! - `guard_pipeline`: guarding the full fixture source end to end

pub mod fixture_module;
