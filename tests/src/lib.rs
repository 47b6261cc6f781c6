//! # ACT Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Fixture module source and its declarations
//! └── integration/      # Cross-crate flows
//!     ├── fixture_module.rs
//!     └── guard_pipeline.rs
//! tests/benches/
//! └── guard_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p act-tests
//!
//! # Benchmarks
//! cargo bench -p act-tests
//! ```

pub mod fixtures;
pub mod integration;
