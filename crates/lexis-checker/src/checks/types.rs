//! Type inference over initializer and assignment expressions.
//!
//! An expression's operands are literals, boolean keywords (integers) and
//! declared variables. Call results and undeclared names are unknown and
//! take no part in the inference. Integer and float operands together
//! promote to float without a finding.

use lexis_syntax::diagnostic::Diagnostic;
use lexis_syntax::token::{Token, TokenKind};
use lexis_syntax::vocab::{DeclaredType, Keyword};
use log::trace;

use crate::limits::Limits;
use crate::stream::{is_boundary, is_declared_name, is_malformed_pair, matching_close};
use crate::symbols::SymbolTable;

/// Which operand types an expression contains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Operands {
    string: bool,
    integer: bool,
    float: bool,
}

impl Operands {
    fn add(&mut self, ty: DeclaredType) {
        match ty {
            DeclaredType::String => self.string = true,
            DeclaredType::Integer => self.integer = true,
            DeclaredType::Float => self.float = true,
        }
    }

    fn numeric(&self) -> bool {
        self.integer || self.float
    }
}

/// An assignment target together with the start of its expression.
struct Target<'t> {
    name: &'t Token,
    declared: Option<DeclaredType>,
    expr_start: usize,
}

fn target_at<'t>(toks: &[&'t Token], i: usize, table: &SymbolTable) -> Option<Target<'t>> {
    let tok = toks[i];
    if let Some(declared) = tok.keyword().and_then(Keyword::declared_type) {
        let name = toks.get(i + 1).copied().filter(|t| t.is_identifier())?;
        toks.get(i + 2).filter(|t| t.is_operator("="))?;
        return Some(Target { name, declared: Some(declared), expr_start: i + 3 });
    }
    if tok.is_identifier() && !is_declared_name(toks, i) && toks.get(i + 1).is_some_and(|t| t.is_operator("=")) {
        let declared = table.variable(&tok.text).map(|v| v.declared_type);
        return Some(Target { name: tok, declared, expr_start: i + 2 });
    }
    None
}

/// End (exclusive) of the expression starting at `start`.
fn expression_end(toks: &[&Token], start: usize, limit: usize) -> usize {
    let mut depth = 0i32;
    let end = limit.min(toks.len());
    for (j, tok) in toks.iter().enumerate().take(end).skip(start) {
        if tok.is_delimiter('(') {
            depth += 1;
        } else if tok.is_delimiter(')') {
            depth -= 1;
            if depth < 0 {
                return j;
            }
        } else if depth == 0 && (tok.is_delimiter(';') || tok.is_delimiter(',')) {
            return j;
        } else if is_boundary(tok) {
            return j;
        }
    }
    end.max(start)
}

fn operand_type(tok: &Token, table: &SymbolTable) -> Option<DeclaredType> {
    match tok.kind {
        TokenKind::StringLiteral => Some(DeclaredType::String),
        TokenKind::IntegerLiteral => Some(DeclaredType::Integer),
        TokenKind::FloatLiteral => Some(DeclaredType::Float),
        TokenKind::Identifier => table.variable(&tok.text).map(|v| v.declared_type),
        TokenKind::ReservedWord if tok.keyword().is_some_and(Keyword::is_boolean) => Some(DeclaredType::Integer),
        _ => None,
    }
}

fn is_callee(tok: &Token) -> bool {
    tok.is_identifier() || tok.is_keyword(Keyword::Leer)
}

fn infer(toks: &[&Token], start: usize, end: usize, table: &SymbolTable) -> Operands {
    let mut found = Operands::default();
    let mut j = start;
    while j < end {
        let tok = toks[j];
        if is_callee(tok) && toks.get(j + 1).is_some_and(|t| t.is_delimiter('(')) {
            // call results are unknown, and so is everything in the argument list
            j = matching_close(toks, j + 1).map_or(end, |close| close + 1);
            continue;
        }
        if let Some(ty) = operand_type(tok, table) {
            found.add(ty);
        }
        j += 1;
    }
    found
}

fn mismatch(target: &Target<'_>, found: Operands) -> Option<String> {
    let name = &target.name.text;
    if found.string && found.numeric() {
        return Some(format!(
            "type mismatch: cannot mix string and numeric operands in expression assigned to '{}'",
            name
        ));
    }
    match target.declared? {
        DeclaredType::Integer if found.float => {
            Some(format!("type mismatch: integer variable '{}' receiving float value", name))
        }
        DeclaredType::String if found.numeric() => {
            Some(format!("type mismatch: string variable '{}' receiving numeric value", name))
        }
        ty @ (DeclaredType::Integer | DeclaredType::Float) if found.string => {
            Some(format!("type mismatch: {} variable '{}' receiving string value", ty, name))
        }
        _ => None,
    }
}

fn suggestion_for(declared: Option<DeclaredType>, found: Operands) -> String {
    match declared {
        _ if found.string && found.numeric() => "keep string and numeric values in separate expressions".to_string(),
        Some(DeclaredType::Integer) if found.float => "declare the variable as 'flotante'".to_string(),
        Some(DeclaredType::String) => "assign a string value, for example \"texto\"".to_string(),
        _ => "assign a numeric value".to_string(),
    }
}

fn consecutive_operators(toks: &[&Token], start: usize, end: usize, diags: &mut Vec<Diagnostic>) {
    for j in start..end.saturating_sub(1) {
        let (first, second) = (toks[j], toks[j + 1]);
        if !is_malformed_pair(first, second) {
            continue;
        }
        diags.push(
            Diagnostic::syntactic(
                format!("two consecutive operators '{} {}'", first.text, second.text),
                first.line,
                first.col,
            )
            .with_suggestion("put an operand between the operators"),
        );
    }
}

pub(crate) fn check(toks: &[&Token], table: &SymbolTable, limits: &Limits) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    for i in 0..toks.len() {
        let Some(target) = target_at(toks, i, table) else { continue };
        let end = expression_end(toks, target.expr_start, i + limits.terminator_window);

        consecutive_operators(toks, target.expr_start, end, &mut diags);

        let found = infer(toks, target.expr_start, end, table);
        trace!("expression assigned to '{}' has operands {:?}", target.name.text, found);
        if let Some(message) = mismatch(&target, found) {
            diags.push(
                Diagnostic::semantic(message, target.name.line, target.name.col)
                    .with_suggestion(suggestion_for(target.declared, found)),
            );
        }
    }
    diags
}
