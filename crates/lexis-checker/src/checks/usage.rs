use lexis_syntax::diagnostic::Diagnostic;
use lexis_syntax::token::Token;
use log::trace;

use crate::stream::is_declared_name;
use crate::symbols::SymbolTable;

/// Every identifier outside a declaration site must name a declared
/// function, or a variable declared earlier in the text.
pub(crate) fn check(toks: &[&Token], table: &SymbolTable) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    for (i, tok) in toks.iter().enumerate() {
        if !tok.is_identifier() || is_declared_name(toks, i) {
            continue;
        }
        if table.function(&tok.text).is_some() {
            continue;
        }
        match table.variable(&tok.text) {
            Some(record) if tok.position() < (record.line, record.col) => {
                trace!("'{}' used at {}:{} before line {}", tok.text, tok.line, tok.col, record.line);
                diags.push(
                    Diagnostic::semantic(
                        format!("'{}' used before its declaration at line {}", tok.text, record.line),
                        tok.line,
                        tok.col,
                    )
                    .with_suggestion(format!("move the declaration of '{}' above this line", tok.text)),
                );
            }
            Some(_) => {}
            None => diags.push(
                Diagnostic::semantic(format!("undeclared identifier '{}'", tok.text), tok.line, tok.col)
                    .with_suggestion(format!("declare it first, for example: entero {} = 0;", tok.text)),
            ),
        }
    }
    diags
}
