use lexis_syntax::diagnostic::Diagnostic;
use lexis_syntax::token::Token;
use lexis_syntax::vocab::Keyword;

use crate::limits::Limits;
use crate::stream::{find_terminator, header_spans, inside, is_declared_name, matching_close, starts_statement};

/// Bare assignments and statement-level I/O calls must end in `;`.
///
/// Declarations are left to the symbol collector, and assignments inside a
/// `para (...)` header are exempt.
pub(crate) fn check(toks: &[&Token], limits: &Limits) -> Vec<Diagnostic> {
    let loop_headers = header_spans(toks, Keyword::Para);
    let mut diags = Vec::new();

    for (i, tok) in toks.iter().enumerate() {
        if tok.is_identifier() {
            let assigns = toks.get(i + 1).is_some_and(|t| t.is_operator("="));
            if !assigns || is_declared_name(toks, i) || inside(&loop_headers, i) {
                continue;
            }
            if find_terminator(toks, i, i + 2, limits.terminator_window).is_none() {
                diags.push(
                    Diagnostic::syntactic(format!("missing ';' after assignment to '{}'", tok.text), tok.line, tok.col)
                        .with_suggestion("add ';' at the end of the assignment"),
                );
            }
        } else if let Some(kw) = tok.keyword().filter(|kw| kw.is_io()) {
            if !starts_statement(toks, i) {
                continue;
            }
            let Some(close) = matching_close(toks, i + 1) else { continue };
            if close >= i + limits.call_window {
                continue;
            }
            if !toks.get(close + 1).is_some_and(|t| t.is_delimiter(';')) {
                diags.push(
                    Diagnostic::syntactic(format!("missing ';' after '{}(...)'", kw), tok.line, tok.col)
                        .with_suggestion(format!("write: {}(...);", kw)),
                );
            }
        }
    }
    diags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::code_tokens;
    use lexis_lexer::scan;

    fn check_str(src: &str) -> Vec<Diagnostic> {
        let (tokens, _) = scan(src);
        check(&code_tokens(&tokens), &Limits::default())
    }

    #[test]
    fn terminated_statements() {
        let src = "entero x;\nx = 3;\nimprimir(x);\nleer(x);\npara (x = 0; x < 3; x = x + 1) { }";
        assert!(check_str(src).is_empty());
    }

    #[test]
    fn unterminated_assignment() {
        let diags = check_str("x = 3\nimprimir(x);");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "missing ';' after assignment to 'x'");
        assert_eq!(diags[0].position(), (1, 1));
    }

    #[test]
    fn declarations_are_not_double_reported() {
        assert!(check_str("entero x = 3\n").is_empty());
    }

    #[test]
    fn unterminated_io_call() {
        let diags = check_str("imprimir(\"hola\")\nx = 1;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "missing ';' after 'imprimir(...)'");
        assert_eq!(diags[0].position(), (1, 1));
    }

    #[test]
    fn io_call_inside_expression_is_not_a_statement() {
        assert!(check_str("x = leer() + 1;").is_empty());
    }

    #[test]
    fn call_window_bounds_the_search() {
        let limits = Limits { call_window: 3, ..Limits::default() };
        let (tokens, _) = scan("imprimir(1 + 2 + 3)");
        assert!(check(&code_tokens(&tokens), &limits).is_empty());
        assert_eq!(check_str("imprimir(1 + 2 + 3)").len(), 1);
    }
}
