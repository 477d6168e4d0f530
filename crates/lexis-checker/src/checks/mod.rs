//! Structural and semantic checks over the comment-free token stream.
//!
//! Each check is an independent function of the tokens (and the symbol
//! table where needed). Checks do not see each other's findings, so two
//! checks may legitimately report on the same token.

mod control;
mod delimiters;
mod termination;
mod types;
mod usage;

use lexis_syntax::diagnostic::Diagnostic;
use lexis_syntax::token::Token;
use log::debug;

use crate::limits::Limits;
use crate::stream::code_tokens;
use crate::symbols::SymbolTable;

/// Runs every check and returns their findings, check by check.
pub fn validate(tokens: &[Token], table: &SymbolTable, limits: &Limits) -> Vec<Diagnostic> {
    let toks = code_tokens(tokens);
    let mut diags = Vec::new();

    let passes: [(&str, Vec<Diagnostic>); 6] = [
        ("delimiters", delimiters::check(&toks)),
        ("control shape", control::check_shape(&toks)),
        ("conditions", control::check_conditions(&toks)),
        ("termination", termination::check(&toks, limits)),
        ("declaration before use", usage::check(&toks, table)),
        ("types", types::check(&toks, table, limits)),
    ];
    for (name, found) in passes {
        debug!("{} check: {} diagnostics", name, found.len());
        diags.extend(found);
    }
    diags
}
