use owo_colors::{AnsiColors, OwoColorize};

use lexis_analyzer::Analysis;
use lexis_syntax::diagnostic::{Diagnostic, Severity};
use lexis_syntax::token::{Token, TokenKind};

/// A diagnostic with its source line, a caret under the column and the
/// suggestion, if any.
pub fn render_diagnostic(source: &str, diag: &Diagnostic) -> String {
    let mut out = format!(
        "{}: {}\n",
        format!("{} error", diag.severity).red().bold(),
        diag.message.bold()
    );
    out.push_str(&format!("  --> line {}, column {}\n", diag.line, diag.col));
    if let Some(src_line) = source.lines().nth(diag.line.saturating_sub(1)) {
        let gutter = format!("{:3} | ", diag.line);
        out.push_str("     |\n");
        out.push_str(&format!("{}{}\n", gutter.bright_black(), src_line));
        let marker = format!("{}^", " ".repeat(gutter.len() + diag.col.saturating_sub(1)));
        out.push_str(&format!("{}\n", marker.red()));
        out.push_str("     |\n");
    }
    if let Some(suggestion) = &diag.suggestion {
        out.push_str(&format!("{} {}\n", "help:".yellow().bold(), suggestion));
    }
    out
}

fn kind_color(kind: TokenKind) -> AnsiColors {
    match kind {
        TokenKind::ReservedWord => AnsiColors::Magenta,
        TokenKind::MisspelledReservedWord => AnsiColors::Red,
        TokenKind::Identifier => AnsiColors::Cyan,
        TokenKind::IntegerLiteral | TokenKind::FloatLiteral => AnsiColors::Yellow,
        TokenKind::StringLiteral => AnsiColors::Green,
        TokenKind::Operator => AnsiColors::Blue,
        TokenKind::Delimiter => AnsiColors::White,
        TokenKind::Comment => AnsiColors::BrightBlack,
    }
}

pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:>4}:{:<4} {:<24} {}\n",
            token.line,
            token.col,
            token.kind.label().color(kind_color(token.kind)),
            token.text
        ));
    }
    out
}

/// One-line outcome, e.g. `demo.lx: 3 diagnostics (1 lexical, 0 syntactic, 2 semantic)`.
pub fn render_summary(analysis: &Analysis, source_name: &str) -> String {
    if !analysis.has_errors() {
        return format!(
            "{}: {} ({} tokens)",
            source_name,
            "no diagnostics".green().bold(),
            analysis.tokens.len()
        );
    }
    let tiers: Vec<String> = Severity::ALL
        .iter()
        .map(|&s| format!("{} {}", analysis.count(s), s))
        .collect();
    let total = analysis.diagnostics.len();
    format!(
        "{}: {} ({})",
        source_name,
        format!("{} diagnostic{}", total, if total == 1 { "" } else { "s" }).red().bold(),
        tiers.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_analyzer::analyze;

    #[test]
    fn token_kinds_have_their_own_colors() {
        let analysis = analyze("entero x = \"a\"; // fin");
        let table = render_tokens(&analysis.tokens);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("\x1b[35m") && lines[0].contains("RESERVED_WORD"));
        assert!(lines[1].contains("\x1b[36m") && lines[1].contains("IDENTIFIER"));
        assert!(lines[3].contains("\x1b[32m") && lines[3].contains("STRING_LITERAL"));
        assert!(lines[5].contains("COMMENT"));
        assert!(!lines[1].contains("\x1b[35m"));
    }

    #[test]
    fn diagnostic_points_at_the_column() {
        let source = "entero x = 1.5;";
        let analysis = analyze(source);
        let rendered = render_diagnostic(source, &analysis.diagnostics[0]);
        assert!(rendered.contains("--> line 1, column 8"));
        assert!(rendered.contains(&format!("{}^", " ".repeat(6 + 7))));
        assert!(rendered.contains("declare the variable as 'flotante'"));
    }
}
