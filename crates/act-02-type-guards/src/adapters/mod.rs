//! Adapters Layer - External front ends
//!
//! - `swc_front`: reads declarations out of TypeScript source with swc

pub mod swc_front;

pub use swc_front::{extract_declarations, SourceDeclarations};
