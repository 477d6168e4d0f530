//! Token-stream helpers shared by the symbol collector and the checks.
//!
//! Every helper works on the comment-free stream and keeps its lookahead
//! bounded by an explicit window.

use lexis_syntax::token::{Token, TokenKind};
use lexis_syntax::vocab::Keyword;

pub(crate) fn code_tokens(tokens: &[Token]) -> Vec<&Token> {
    tokens.iter().filter(|t| !t.is_comment()).collect()
}

/// Index of the `)` matching the `(` at `open`.
pub(crate) fn matching_close(toks: &[&Token], open: usize) -> Option<usize> {
    if !toks.get(open).is_some_and(|t| t.is_delimiter('(')) {
        return None;
    }
    let mut depth = 0usize;
    for (j, tok) in toks.iter().enumerate().skip(open) {
        if tok.is_delimiter('(') {
            depth += 1;
        } else if tok.is_delimiter(')') {
            depth -= 1;
            if depth == 0 {
                return Some(j);
            }
        }
    }
    None
}

/// Tokens a terminator search never looks past.
pub(crate) fn is_boundary(tok: &Token) -> bool {
    tok.is_delimiter('{') || tok.is_delimiter('}') || tok.keyword().is_some_and(Keyword::starts_statement)
}

/// Looks for a `;` in `from..start + window`, giving up at a boundary.
pub(crate) fn find_terminator(toks: &[&Token], start: usize, from: usize, window: usize) -> Option<usize> {
    let end = (start + window).min(toks.len());
    for (j, tok) in toks.iter().enumerate().take(end).skip(from) {
        if tok.is_delimiter(';') {
            return Some(j);
        }
        if is_boundary(tok) {
            return None;
        }
    }
    None
}

/// `(open, close)` parenthesis pairs of every `keyword ( ... )` header.
pub(crate) fn header_spans(toks: &[&Token], keyword: Keyword) -> Vec<(usize, usize)> {
    toks.iter()
        .enumerate()
        .filter(|(_, t)| t.is_keyword(keyword))
        .filter_map(|(i, _)| matching_close(toks, i + 1).map(|close| (i + 1, close)))
        .collect()
}

/// `(open, close)` parenthesis pairs of every `funcion name ( ... )` header.
pub(crate) fn parameter_spans(toks: &[&Token]) -> Vec<(usize, usize)> {
    toks.iter()
        .enumerate()
        .filter(|(i, t)| t.is_keyword(Keyword::Funcion) && toks.get(i + 1).is_some_and(|n| n.is_identifier()))
        .filter_map(|(i, _)| matching_close(toks, i + 2).map(|close| (i + 2, close)))
        .collect()
}

pub(crate) fn inside(spans: &[(usize, usize)], idx: usize) -> bool {
    spans.iter().any(|&(open, close)| open < idx && idx < close)
}

/// Whether two adjacent operators are malformed. Only a unary `!`, `-` or
/// `+` may directly follow another operator.
pub(crate) fn is_malformed_pair(first: &Token, second: &Token) -> bool {
    first.kind == TokenKind::Operator
        && second.kind == TokenKind::Operator
        && !matches!(second.text.as_str(), "!" | "-" | "+")
}

/// Whether the token at `idx` begins a statement.
pub(crate) fn starts_statement(toks: &[&Token], idx: usize) -> bool {
    idx == 0
        || toks
            .get(idx - 1)
            .is_some_and(|p| p.is_delimiter(';') || p.is_delimiter('{') || p.is_delimiter('}'))
}

/// Whether the token at `idx` is the name in a `<type> name` declaration.
pub(crate) fn is_declared_name(toks: &[&Token], idx: usize) -> bool {
    idx > 0
        && toks[idx - 1]
            .keyword()
            .is_some_and(|kw| kw.declared_type().is_some() || kw == Keyword::Funcion)
}
