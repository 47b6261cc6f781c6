//! TypeScript front end backed by `swc_ecma_parser`
//!
//! Parses an in-memory module and reports every top-level function and
//! class (exported or not) together with the keyword types of their
//! parameters and the offset just past each body's opening brace.
//!
//! Only `number` and `string` keyword annotations are guardable. Unions,
//! type references, destructured and rest parameters all map to
//! `ParamType::Unknown`.

use swc_common::{BytePos, Spanned};
use swc_ecma_ast as ast;
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax};
use tracing::{debug, warn};

use crate::domain::declarations::{ClassDecl, FunctionDecl, ParamDecl, ParamType};
use crate::domain::errors::GuardError;

/// Position of byte 0. swc reserves `BytePos(0)` for dummy spans.
const START: BytePos = BytePos(1);

const CONSTRUCTOR: &str = "constructor";
const DEFAULT_EXPORT: &str = "default";
const UNNAMED_PARAM: &str = "<pattern>";
const COMPUTED_KEY: &str = "<computed>";

/// Declarations found in one source buffer, in source order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceDeclarations {
    pub functions: Vec<FunctionDecl>,
    pub classes: Vec<ClassDecl>,
}

/// Parse `source` as a TypeScript module and collect its declarations.
pub fn extract_declarations(source: &str) -> Result<SourceDeclarations, GuardError> {
    let len = u32::try_from(source.len())
        .ok()
        .filter(|len| len.checked_add(START.0).is_some())
        .ok_or(GuardError::SourceTooLarge { len: source.len() })?;

    let input = StringInput::new(source, START, BytePos(START.0 + len));
    let lexer = Lexer::new(
        Syntax::Typescript(Default::default()),
        Default::default(),
        input,
        None,
    );
    let mut parser = Parser::new_from(lexer);

    let module = parser
        .parse_typescript_module()
        .map_err(|err| GuardError::Parse {
            offset: offset_of(err.span().lo),
            message: err.kind().msg().into_owned(),
        })?;

    for err in parser.take_errors() {
        warn!(
            offset = offset_of(err.span().lo),
            message = %err.kind().msg(),
            "Recovered from TypeScript syntax error"
        );
    }

    let mut found = SourceDeclarations::default();
    for item in &module.body {
        match item {
            ast::ModuleItem::Stmt(ast::Stmt::Decl(decl)) => collect_decl(decl, &mut found),
            ast::ModuleItem::ModuleDecl(ast::ModuleDecl::ExportDecl(export)) => {
                collect_decl(&export.decl, &mut found)
            }
            ast::ModuleItem::ModuleDecl(ast::ModuleDecl::ExportDefaultDecl(export)) => {
                collect_default_decl(&export.decl, &mut found)
            }
            _ => {}
        }
    }

    debug!(
        functions = found.functions.len(),
        classes = found.classes.len(),
        "Extracted declarations"
    );
    Ok(found)
}

fn offset_of(pos: BytePos) -> usize {
    pos.0.saturating_sub(START.0) as usize
}

fn collect_decl(decl: &ast::Decl, found: &mut SourceDeclarations) {
    match decl {
        ast::Decl::Fn(f) => {
            if let Some(function) = function_decl(f.ident.sym.to_string(), &f.function) {
                found.functions.push(function);
            }
        }
        ast::Decl::Class(c) => found
            .classes
            .push(class_decl(c.ident.sym.to_string(), &c.class)),
        _ => {}
    }
}

fn collect_default_decl(decl: &ast::DefaultDecl, found: &mut SourceDeclarations) {
    match decl {
        ast::DefaultDecl::Fn(f) => {
            let name = f
                .ident
                .as_ref()
                .map_or_else(|| DEFAULT_EXPORT.to_string(), |id| id.sym.to_string());
            if let Some(function) = function_decl(name, &f.function) {
                found.functions.push(function);
            }
        }
        ast::DefaultDecl::Class(c) => {
            let name = c
                .ident
                .as_ref()
                .map_or_else(|| DEFAULT_EXPORT.to_string(), |id| id.sym.to_string());
            found.classes.push(class_decl(name, &c.class));
        }
        _ => {}
    }
}

/// `None` for overloads and ambient declarations, which have no body.
fn function_decl(name: String, function: &ast::Function) -> Option<FunctionDecl> {
    let body = function.body.as_ref()?;
    let params = function.params.iter().map(|p| param_decl(&p.pat)).collect();
    Some(FunctionDecl::new(name, params, body_start(body)))
}

fn class_decl(name: String, class: &ast::Class) -> ClassDecl {
    let methods = class
        .body
        .iter()
        .filter_map(|member| match member {
            ast::ClassMember::Constructor(ctor) => {
                let body = ctor.body.as_ref()?;
                let params = ctor
                    .params
                    .iter()
                    .map(|param| match param {
                        ast::ParamOrTsParamProp::Param(p) => param_decl(&p.pat),
                        ast::ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                            ast::TsParamPropParam::Ident(binding) => binding_decl(binding),
                            ast::TsParamPropParam::Assign(assign) => param_decl(&assign.left),
                        },
                    })
                    .collect();
                Some(FunctionDecl::new(CONSTRUCTOR, params, body_start(body)))
            }
            ast::ClassMember::Method(method) => {
                function_decl(prop_name(&method.key), &method.function)
            }
            _ => None,
        })
        .collect();
    ClassDecl::new(name, methods)
}

fn body_start(body: &ast::BlockStmt) -> usize {
    offset_of(body.span.lo) + 1
}

fn param_decl(pat: &ast::Pat) -> ParamDecl {
    match pat {
        ast::Pat::Ident(binding) => binding_decl(binding),
        // `a: string = "d"` keeps its annotation on the left side
        ast::Pat::Assign(assign) => param_decl(&assign.left),
        _ => ParamDecl::new(UNNAMED_PARAM, ParamType::Unknown),
    }
}

fn binding_decl(binding: &ast::BindingIdent) -> ParamDecl {
    let param_type = match binding.type_ann.as_deref().map(|ann| &*ann.type_ann) {
        Some(ast::TsType::TsKeywordType(keyword)) => param_type_from_keyword(keyword.kind),
        _ => ParamType::Unknown,
    };
    ParamDecl::new(binding.id.sym.to_string(), param_type)
}

fn param_type_from_keyword(kind: ast::TsKeywordTypeKind) -> ParamType {
    match kind {
        ast::TsKeywordTypeKind::TsNumberKeyword => ParamType::Number,
        ast::TsKeywordTypeKind::TsStringKeyword => ParamType::String,
        _ => ParamType::Unknown,
    }
}

fn prop_name(key: &ast::PropName) -> String {
    match key {
        ast::PropName::Ident(ident) => ident.sym.to_string(),
        ast::PropName::Str(s) => s.value.to_string(),
        _ => COMPUTED_KEY.to_string(),
    }
}
