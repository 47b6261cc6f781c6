//! Guard snippet generation
//!
//! A guard for parameter `a: number` in warning mode reads:
//!
//! ```text
//! if(typeof a !== 'number'){
//! console.warn(`a isn't of type number but of type ${typeof a}`);
//! }
//! ```
//!
//! wrapped in the newline and indentation padding emitted by [`guard_snippet`].

use super::declarations::{ClassDecl, FunctionDecl, ParamDecl};
use super::patch::Patch;
use crate::config::PatchMode;

/// Template literal describing a type mismatch for `param`.
fn mismatch_message(param: &ParamDecl) -> String {
    format!(
        "`{name} isn't of type {ts} but of type ${{typeof {name}}}`",
        name = param.name,
        ts = param.param_type.ts_name(),
    )
}

/// Guard text for one parameter, or `None` when its type is not guardable.
pub fn guard_snippet(param: &ParamDecl, mode: PatchMode) -> Option<String> {
    let constructor = param.param_type.js_constructor()?;
    let message = mismatch_message(param);

    let body = match mode {
        PatchMode::Warning => format!("console.warn({message});"),
        PatchMode::Error => format!("throw {message};"),
        // Assigned back so later statements see the coerced value
        PatchMode::Fix => format!(
            r#"console.warn({message}," and was casted"); {name} = {constructor}({name});"#,
            name = param.name,
        ),
    };

    Some(format!(
        "\n    if(typeof {name} !== '{ts}'){{\n    {body}\n    }}\n    ",
        name = param.name,
        ts = param.param_type.ts_name(),
    ))
}

/// One patch per guardable parameter, all anchored at the body start.
pub fn function_patches(decl: &FunctionDecl, mode: PatchMode) -> Vec<Patch> {
    decl.guarded_params()
        .filter_map(|param| guard_snippet(param, mode))
        .map(|snippet| Patch::new(decl.body_start, snippet.into_bytes()))
        .collect()
}

pub fn class_patches(decl: &ClassDecl, mode: PatchMode) -> Vec<Patch> {
    decl.methods
        .iter()
        .flat_map(|method| function_patches(method, mode))
        .collect()
}
