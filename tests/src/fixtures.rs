//! Shared TypeScript fixture and the declarations the swc front end reports for it.

use act_02_type_guards::{ClassDecl, FunctionDecl, ParamDecl, ParamType};

/// The fixture module the scalar utilities mirror.
pub const FIXTURE_TS: &str = r#"export function addMaybe(a: number | undefined, b?: number): number {
  if (a === undefined) {
    return 0;
  }
  if (b === undefined) {
    return a;
  }
  return a + b;
}

export function concatenateStrings(a: string, b: string): string {
  return a + b;
}

export function convertFloatArray(a: Float32Array): number[] {
  return Array.from(a);
}

export class NamedValue {
  name: string;
  constructor(name: string) {
    this.name = name;
  }
  toLower(name: string): string {
    return name.toLowerCase();
  }
}
"#;

/// Offset just past the `{` that ends `header`.
///
/// Panics if `header` is not in the fixture.
pub fn body_start(source: &str, header: &str) -> usize {
    let at = source
        .find(header)
        .unwrap_or_else(|| panic!("header {header:?} not in fixture"));
    at + header.len()
}

pub fn fixture_functions() -> Vec<FunctionDecl> {
    vec![
        FunctionDecl::new(
            "addMaybe",
            vec![
                ParamDecl::new("a", ParamType::Unknown),
                ParamDecl::new("b", ParamType::Number),
            ],
            body_start(FIXTURE_TS, "b?: number): number {"),
        ),
        FunctionDecl::new(
            "concatenateStrings",
            vec![
                ParamDecl::new("a", ParamType::String),
                ParamDecl::new("b", ParamType::String),
            ],
            body_start(FIXTURE_TS, "b: string): string {"),
        ),
        FunctionDecl::new(
            "convertFloatArray",
            vec![ParamDecl::new("a", ParamType::from_ts_keyword("Float32Array"))],
            body_start(FIXTURE_TS, "Float32Array): number[] {"),
        ),
    ]
}

pub fn fixture_classes() -> Vec<ClassDecl> {
    vec![ClassDecl::new(
        "NamedValue",
        vec![
            FunctionDecl::new(
                "constructor",
                vec![ParamDecl::new("name", ParamType::String)],
                body_start(FIXTURE_TS, "constructor(name: string) {"),
            ),
            FunctionDecl::new(
                "toLower",
                vec![ParamDecl::new("name", ParamType::String)],
                body_start(FIXTURE_TS, "toLower(name: string): string {"),
            ),
        ],
    )]
}
