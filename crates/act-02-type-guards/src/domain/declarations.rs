//! Declaration descriptors
//!
//! These are produced by the swc front end (`adapters::swc_front`) or built
//! by hand by callers that already know their declarations.
//! Offsets are byte offsets into the original, unpatched buffer.

use serde::{Deserialize, Serialize};

/// Declared type of a parameter, as far as guards are concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    Number,
    String,
    /// Anything without a primitive keyword annotation. Never guarded.
    Unknown,
}

impl ParamType {
    /// Classify a TypeScript type keyword.
    pub fn from_ts_keyword(keyword: &str) -> Self {
        match keyword {
            "number" => ParamType::Number,
            "string" => ParamType::String,
            _ => ParamType::Unknown,
        }
    }

    /// Name reported by `typeof` for values of this type.
    pub fn ts_name(&self) -> &'static str {
        match self {
            ParamType::Number => "number",
            ParamType::String => "string",
            ParamType::Unknown => "unknown",
        }
    }

    /// Global constructor that coerces a value to this type.
    pub fn js_constructor(&self) -> Option<&'static str> {
        match self {
            ParamType::Number => Some("Number"),
            ParamType::String => Some("String"),
            ParamType::Unknown => None,
        }
    }

    pub fn is_guardable(&self) -> bool {
        !matches!(self, ParamType::Unknown)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    pub param_type: ParamType,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
        }
    }
}

/// A function (or method) with a body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<ParamDecl>,
    /// Offset just past the opening `{` of the body
    pub body_start: usize,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, params: Vec<ParamDecl>, body_start: usize) -> Self {
        Self {
            name: name.into(),
            params,
            body_start,
        }
    }

    /// Parameters that will receive a guard, in declaration order.
    pub fn guarded_params(&self) -> impl Iterator<Item = &ParamDecl> {
        self.params.iter().filter(|p| p.param_type.is_guardable())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub methods: Vec<FunctionDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, methods: Vec<FunctionDecl>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }
}
