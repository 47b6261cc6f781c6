//! Ports module for Type Guards
//!
//! Defines the inbound (API) port trait.

pub mod inbound;

pub use inbound::TypeGuardApi;
