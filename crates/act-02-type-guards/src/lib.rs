//! # ACT-02: Type Guards
//!
//! Inserts runtime `typeof` checks at the top of annotated TypeScript
//! functions so that the declared parameter types are enforced when the
//! compiled JavaScript runs.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `FunctionDecl` / `ClassDecl`: Declarations read by the front end
//!   - `guard_snippet`: Guard text for one parameter
//!   - `PatchIndex`: Offset drift tracking across insertions
//!   - `apply_patches`: In-memory insertion into a source buffer
//!   - `is_guard_candidate` / `output_path_for`: Source selection helpers
//!
//! - **Ports Layer** (`ports/`): `TypeGuardApi` driving port
//!
//! - **Application Layer** (`application/`): `TypeGuardService`
//!
//! - **Adapters Layer** (`adapters/`): swc-backed TypeScript front end
//!   - `extract_declarations`: `FunctionDecl` / `ClassDecl` from source text
//!
//! ## Invariants
//!
//! - Parameters typed `unknown` never receive a guard
//! - Guards for one function appear in parameter declaration order
//! - Bytes of the original source are preserved, in order, in the output
//!
//! ## Usage Example
//!
//! ```
//! use act_02_type_guards::{
//!     FunctionDecl, GuardConfig, ParamDecl, ParamType, TypeGuardApi, TypeGuardService,
//! };
//!
//! let source = "function id(a: number) {\n  return a;\n}\n";
//! let body_start = source.find('{').unwrap() + 1;
//! let decl = FunctionDecl::new(
//!     "id",
//!     vec![ParamDecl::new("a", ParamType::Number)],
//!     body_start,
//! );
//!
//! let service = TypeGuardService::with_config(GuardConfig::default());
//! let guarded = service.guard_source(source.as_bytes(), &[decl], &[]).unwrap();
//! assert_eq!(guarded.guards_inserted, 1);
//!
//! // Or let the swc front end find the declarations
//! let parsed = service.guard_typescript(source).unwrap();
//! assert_eq!(parsed, guarded);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{extract_declarations, SourceDeclarations};
pub use application::service::{GuardedSource, TypeGuardService};
pub use config::{GuardConfig, GuardConfigBuilder, PatchMode};
pub use domain::declarations::{ClassDecl, FunctionDecl, ParamDecl, ParamType};
pub use domain::errors::GuardError;
pub use domain::patch::{apply_patches, Patch, PatchIndex};
pub use domain::paths::{is_guard_candidate, output_path_for};
pub use domain::snippet::{class_patches, function_patches, guard_snippet};
pub use ports::inbound::TypeGuardApi;
