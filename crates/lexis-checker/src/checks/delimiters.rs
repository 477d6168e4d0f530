use lexis_syntax::diagnostic::Diagnostic;
use lexis_syntax::token::{Token, TokenKind};

fn closer_for(open: char) -> char {
    if open == '(' {
        ')'
    } else {
        '}'
    }
}

/// One stack for `(` and `{` together, so `( }` is a wrong closer rather
/// than two independent imbalances.
pub(crate) fn check(toks: &[&Token]) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    let mut stack: Vec<(&Token, char)> = Vec::new();

    for tok in toks.iter().copied() {
        if tok.kind != TokenKind::Delimiter {
            continue;
        }
        let Some(ch) = tok.text.chars().next() else { continue };
        match ch {
            '(' | '{' => stack.push((tok, ch)),
            ')' | '}' => match stack.pop() {
                None => {
                    let opener = if ch == ')' { '(' } else { '{' };
                    diags.push(
                        Diagnostic::syntactic(
                            format!("unopened '{}': no matching '{}' before it", ch, opener),
                            tok.line,
                            tok.col,
                        )
                        .with_suggestion(format!("add '{}' before it or remove the '{}'", opener, ch)),
                    );
                }
                Some((_, open)) if closer_for(open) == ch => {}
                Some((_, open)) => {
                    let expected = closer_for(open);
                    diags.push(
                        Diagnostic::syntactic(
                            format!("wrong closing delimiter: expected '{}' but found '{}'", expected, ch),
                            tok.line,
                            tok.col,
                        )
                        .with_suggestion(format!("close the '{}' with '{}' first", open, expected)),
                    );
                }
            },
            _ => {}
        }
    }

    for (open, ch) in stack {
        diags.push(
            Diagnostic::syntactic(format!("unclosed '{}'", ch), open.line, open.col)
                .with_suggestion(format!("add the matching '{}'", closer_for(ch))),
        );
    }
    diags
}
