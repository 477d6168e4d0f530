//! Shape and condition rules for `si`, `sino`, `mientras` and `para`.

use lexis_syntax::diagnostic::Diagnostic;
use lexis_syntax::token::{Token, TokenKind};
use lexis_syntax::vocab::{is_logical, is_relational, Keyword};
use log::trace;

use crate::stream::{is_malformed_pair, matching_close};

fn template(kw: Keyword) -> &'static str {
    match kw {
        Keyword::Para => "write: para (inicio; condicion; paso) { ... }",
        Keyword::Mientras => "write: mientras (condicion) { ... }",
        _ => "write: si (condicion) { ... }",
    }
}

fn is_condition_operator(tok: &Token) -> bool {
    tok.kind == TokenKind::Operator && (is_relational(&tok.text) || is_logical(&tok.text))
}

/// `(open, close)` of the header right after the control keyword at `idx`.
fn header(toks: &[&Token], idx: usize) -> Option<(usize, usize)> {
    matching_close(toks, idx + 1).map(|close| (idx + 1, close))
}

pub(crate) fn check_shape(toks: &[&Token]) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    let mut seen_si = false;

    for (i, tok) in toks.iter().enumerate() {
        let Some(kw) = tok.keyword() else { continue };

        if kw.is_control() {
            if kw == Keyword::Si {
                seen_si = true;
            }
            if !toks.get(i + 1).is_some_and(|t| t.is_delimiter('(')) {
                diags.push(
                    Diagnostic::syntactic(format!("expected '(' after '{}'", kw), tok.line, tok.col)
                        .with_suggestion(template(kw)),
                );
                continue;
            }
            // an unmatched '(' is the delimiter check's finding
            let Some((open, close)) = header(toks, i) else { continue };
            if !toks.get(close + 1).is_some_and(|t| t.is_delimiter('{')) {
                let paren = toks[close];
                diags.push(
                    Diagnostic::syntactic(format!("expected '{{' after ')' of '{}'", kw), paren.line, paren.col)
                        .with_suggestion("open the body with '{'"),
                );
            }
            if kw == Keyword::Para {
                let clauses = top_level_semicolons(&toks[open + 1..close]);
                if clauses != 2 {
                    diags.push(
                        Diagnostic::syntactic(
                            format!("'para' header requires three clauses separated by ';' (found {} ';')", clauses),
                            tok.line,
                            tok.col,
                        )
                        .with_suggestion(template(kw)),
                    );
                }
            }
        } else if kw == Keyword::Sino {
            if !seen_si {
                diags.push(
                    Diagnostic::syntactic("'sino' without a preceding 'si'", tok.line, tok.col)
                        .with_suggestion("place 'sino' right after the body of a 'si'"),
                );
            }
            if !toks.get(i + 1).is_some_and(|t| t.is_delimiter('{')) {
                diags.push(
                    Diagnostic::syntactic("expected '{' after 'sino'", tok.line, tok.col)
                        .with_suggestion("write: sino { ... }"),
                );
            }
        }
    }
    diags
}

fn top_level_semicolons(span: &[&Token]) -> usize {
    let mut depth = 0i32;
    let mut count = 0;
    for tok in span {
        if tok.is_delimiter('(') {
            depth += 1;
        } else if tok.is_delimiter(')') {
            depth -= 1;
        } else if depth == 0 && tok.is_delimiter(';') {
            count += 1;
        }
    }
    count
}

pub(crate) fn check_conditions(toks: &[&Token]) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    for (i, tok) in toks.iter().enumerate() {
        let Some(kw) = tok.keyword().filter(|kw| kw.is_control()) else { continue };
        let Some((open, close)) = header(toks, i) else { continue };
        let span = &toks[open + 1..close];
        trace!("condition of '{}' at {}:{} spans {} tokens", kw, tok.line, tok.col, span.len());

        if span.is_empty() {
            diags.push(
                Diagnostic::syntactic(format!("empty condition in '{}'", kw), tok.line, tok.col)
                    .with_suggestion(template(kw)),
            );
            continue;
        }

        let repeated = span.windows(2).find(|pair| is_malformed_pair(pair[0], pair[1]));
        if let Some(pair) = repeated {
            diags.push(
                Diagnostic::syntactic(
                    format!(
                        "repeated or malformed operator in '{}' condition: '{} {}'",
                        kw, pair[0].text, pair[1].text
                    ),
                    pair[0].line,
                    pair[0].col,
                )
                .with_suggestion("keep a single operator between the operands"),
            );
        } else if !span.iter().any(|t| is_condition_operator(t)) {
            diags.push(
                Diagnostic::syntactic(
                    format!("condition in '{}' lacks a relational or logical operator", kw),
                    tok.line,
                    tok.col,
                )
                .with_suggestion("compare values with ==, !=, <, >, <= or >="),
            );
        }
    }
    diags
}
