//! Lexis lexer: converts source text into positioned tokens and lexical
//! diagnostics.
//!
//! The scanner never stops on a defect. Every malformed span is reported and
//! skipped, and scanning resumes at the next unconsumed character, so the
//! number of diagnostics grows with the number of defects.
pub mod corrector;

pub use corrector::KeywordCorrector;

use lexis_syntax::diagnostic::Diagnostic;
use lexis_syntax::token::{Token, TokenKind};
use lexis_syntax::vocab::Vocabulary;
use log::{debug, trace};

/// Scans `source` with the standard vocabulary.
pub fn scan(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Lexer::new(source, Vocabulary::standard()).tokenize()
}

/// Single-pass, left-to-right character scanner.
pub struct Lexer<'v> {
    src: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    vocab: &'v Vocabulary,
    corrector: KeywordCorrector<'v>,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'v> Lexer<'v> {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str, vocab: &'v Vocabulary) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            vocab,
            corrector: KeywordCorrector::new(vocab),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }
    fn peek_next(&self) -> Option<char> {
        self.src.get(self.pos + 1).copied()
    }
    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if let Some(c) = ch {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        ch
    }

    fn text_from(&self, start: usize) -> String {
        self.src[start..self.pos].iter().collect()
    }

    /// Whether a `//` or `/*` marker begins at `idx`.
    fn comment_starts_at(&self, idx: usize) -> bool {
        self.src.get(idx) == Some(&'/') && matches!(self.src.get(idx + 1), Some('/') | Some('*'))
    }

    fn push_token(&mut self, kind: TokenKind, start: usize, line: usize, col: usize) {
        let tok = Token::new(kind, self.text_from(start), line, col);
        trace!("token {:?} {:?} at {}:{}", tok.kind, tok.text, line, col);
        self.tokens.push(tok);
    }

    fn report(&mut self, diag: Diagnostic) {
        trace!("lexical diagnostic: {}", diag);
        self.diagnostics.push(diag);
    }

    fn read_line_comment(&mut self, start: usize, line: usize, col: usize) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        self.push_token(TokenKind::Comment, start, line, col);
    }

    fn read_block_comment(&mut self, start: usize, line: usize, col: usize) {
        self.advance();
        self.advance();
        loop {
            match self.peek() {
                None => {
                    self.report(
                        Diagnostic::lexical("unterminated block comment", line, col)
                            .with_suggestion("close the comment with '*/'"),
                    );
                    return;
                }
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    self.push_token(TokenKind::Comment, start, line, col);
                    return;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn read_string(&mut self, quote: char, start: usize, line: usize, col: usize) {
        self.advance();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.report(
                        Diagnostic::lexical("unterminated string literal", line, col)
                            .with_suggestion(format!("add the closing {} before the end of the line", quote)),
                    );
                    return;
                }
                Some('\\') => {
                    self.advance();
                    if matches!(self.peek(), Some(c) if c != '\n') {
                        self.advance();
                    }
                }
                Some(c) if c == quote => {
                    self.advance();
                    self.push_token(TokenKind::StringLiteral, start, line, col);
                    return;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn read_number(&mut self, start: usize, line: usize, col: usize) {
        let mut dots = 0usize;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' {
                dots += 1;
                self.advance();
            } else {
                break;
            }
        }

        if matches!(self.peek(), Some(c) if c.is_alphabetic() || c == '_') {
            while let Some(c) = self.peek() {
                if c.is_alphanumeric() || c == '_' {
                    self.advance();
                } else {
                    break;
                }
            }
            let text = self.text_from(start);
            self.report(
                Diagnostic::lexical(format!("invalid identifier: starts with a digit ('{}')", text), line, col)
                    .with_suggestion("identifiers must start with a letter or '_'"),
            );
            return;
        }

        match dots {
            0 => self.push_token(TokenKind::IntegerLiteral, start, line, col),
            1 => self.push_token(TokenKind::FloatLiteral, start, line, col),
            _ => {
                let text = self.text_from(start);
                self.report(
                    Diagnostic::lexical(format!("number with multiple decimal points: '{}'", text), line, col)
                        .with_suggestion("use a single decimal point"),
                );
            }
        }
    }

    fn read_operator(&mut self, start: usize, line: usize, col: usize) {
        let mut end = self.pos;
        while end < self.src.len() && self.vocab.is_operator_char(self.src[end]) {
            if end > self.pos && self.comment_starts_at(end) {
                break;
            }
            end += 1;
        }
        while self.pos < end {
            self.advance();
        }

        let run = self.text_from(start);
        if self.vocab.is_operator(&run) {
            self.push_token(TokenKind::Operator, start, line, col);
        } else {
            self.report(
                Diagnostic::lexical(format!("invalid operator sequence '{}'", run), line, col)
                    .with_suggestion("separate the operators or use a single valid operator"),
            );
        }
    }

    fn read_word(&mut self, start: usize, line: usize, col: usize) {
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }
        let word = self.text_from(start);
        if self.vocab.is_reserved(&word) {
            self.push_token(TokenKind::ReservedWord, start, line, col);
        } else if let Some(fix) = self.corrector.suggest(&word) {
            self.report(
                Diagnostic::lexical(
                    format!("misspelled reserved word: '{}' - did you mean '{}'?", word, fix),
                    line,
                    col,
                )
                .with_suggestion(fix),
            );
            self.push_token(TokenKind::MisspelledReservedWord, start, line, col);
        } else {
            self.push_token(TokenKind::Identifier, start, line, col);
        }
    }

    /// Tokenize the entire input, returning tokens in source order and the
    /// lexical diagnostics found along the way.
    pub fn tokenize(&mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while let Some(c) = self.peek() {
            let start = self.pos;
            let line = self.line;
            let col = self.col;
            match c {
                c if c.is_whitespace() => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => self.read_line_comment(start, line, col),
                '/' if self.peek_next() == Some('*') => self.read_block_comment(start, line, col),
                '"' | '\'' => self.read_string(c, start, line, col),
                c if c.is_ascii_digit() => self.read_number(start, line, col),
                c if self.vocab.is_operator_char(c) => self.read_operator(start, line, col),
                c if self.vocab.is_delimiter(c) => {
                    self.advance();
                    self.push_token(TokenKind::Delimiter, start, line, col);
                }
                c if c.is_alphabetic() || c == '_' => self.read_word(start, line, col),
                other => {
                    self.advance();
                    self.report(
                        Diagnostic::lexical(format!("character not in alphabet: '{}'", other), line, col)
                            .with_suggestion("remove the character or replace it with a valid symbol"),
                    );
                }
            }
            debug_assert!(self.pos > start, "lexer made no progress at {}:{}", line, col);
        }

        debug!(
            "scanned {} characters into {} tokens with {} lexical diagnostics",
            self.src.len(),
            self.tokens.len(),
            self.diagnostics.len()
        );
        (std::mem::take(&mut self.tokens), std::mem::take(&mut self.diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_syntax::diagnostic::Severity;

    fn kinds(src: &str) -> Vec<TokenKind> {
        scan(src).0.into_iter().map(|t| t.kind).collect()
    }

    fn texts(src: &str) -> Vec<String> {
        scan(src).0.into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_declaration_statement() {
        let (tokens, diags) = scan("entero x = 42;");
        assert!(diags.is_empty());
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::ReservedWord,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::IntegerLiteral,
                TokenKind::Delimiter,
            ]
        );
        assert_eq!(tokens[3].text, "42");
        assert_eq!(tokens[3].col, 12);
    }

    #[test]
    fn test_integer_and_float_literals() {
        assert_eq!(kinds("42"), vec![TokenKind::IntegerLiteral]);
        assert_eq!(texts("42"), vec!["42"]);
        assert_eq!(kinds("3.14"), vec![TokenKind::FloatLiteral]);
    }

    #[test]
    fn test_multiple_decimal_points() {
        let (tokens, diags) = scan("3.14.15");
        assert!(tokens.is_empty());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Lexical);
        assert!(diags[0].message.contains("multiple decimal points"));
    }

    #[test]
    fn test_digit_leading_identifier() {
        let (tokens, diags) = scan("2abc = 1");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("starts with a digit"));
        assert!(diags[0].message.contains("2abc"));
        // scanning resumes after the invalid unit
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "=");
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(texts("a <= b"), vec!["a", "<=", "b"]);
        assert_eq!(texts("a&&b"), vec!["a", "&&", "b"]);
        assert_eq!(texts("!x"), vec!["!", "x"]);
    }

    #[test]
    fn test_invalid_operator_runs_rejected_wholesale() {
        for run in ["====", "<<", "&&&&", "<>", "&", "|"] {
            let src = format!("a {} b", run);
            let (tokens, diags) = scan(&src);
            assert_eq!(diags.len(), 1, "run {run}");
            assert_eq!(diags[0].message, format!("invalid operator sequence '{}'", run));
            assert!(tokens.iter().all(|t| t.kind != TokenKind::Operator), "run {run}");
        }
    }

    #[test]
    fn test_operator_run_stops_before_comment() {
        let (tokens, diags) = scan("x =// note");
        assert!(diags.is_empty());
        assert_eq!(tokens[1].text, "=");
        assert_eq!(tokens[2].kind, TokenKind::Comment);
    }

    #[test]
    fn test_strings_with_escapes() {
        let (tokens, diags) = scan(r#"imprimir("dijo \"hola\"");"#);
        assert!(diags.is_empty());
        assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[2].text, r#""dijo \"hola\"""#);

        let (tokens, diags) = scan("'a' \"b\"");
        assert!(diags.is_empty());
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_unterminated_string_consumes_line() {
        let (tokens, diags) = scan("cadena s = \"hola;\nentero y;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "unterminated string literal");
        assert_eq!(diags[0].position(), (1, 12));
        // nothing from the rest of line 1 is tokenized
        assert_eq!(tokens.iter().filter(|t| t.line == 1).count(), 3);
        assert_eq!(tokens.iter().filter(|t| t.line == 2).count(), 3);
    }

    #[test]
    fn test_comments() {
        let (tokens, diags) = scan("// uno\nx /* dos\ntres */ y");
        assert!(diags.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "// uno");
        assert_eq!(tokens[2].kind, TokenKind::Comment);
        assert_eq!(tokens[2].text, "/* dos\ntres */");
        let y = &tokens[3];
        assert_eq!((y.line, y.col), (3, 9));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let (tokens, diags) = scan("x /* sin cierre\nentero y;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "unterminated block comment");
        assert_eq!(diags[0].position(), (1, 3));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_reserved_and_misspelled_words() {
        let (tokens, diags) = scan("si");
        assert_eq!(tokens[0].kind, TokenKind::ReservedWord);
        assert!(diags.is_empty());

        let (tokens, diags) = scan("Si");
        assert_eq!(tokens[0].kind, TokenKind::MisspelledReservedWord);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].suggestion.as_deref(), Some("si"));
        assert!(diags[0].message.contains("did you mean 'si'?"));

        let (tokens, diags) = scan("x");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_character_not_in_alphabet() {
        let (tokens, diags) = scan("x @ y # 1.5.");
        assert_eq!(tokens.len(), 2);
        assert_eq!(diags.len(), 3);
        assert_eq!(diags[0].message, "character not in alphabet: '@'");
        assert_eq!(diags[1].message, "character not in alphabet: '#'");
        assert!(diags[2].message.contains("multiple decimal points"));
    }

    #[test]
    fn test_positions_track_lines() {
        let (tokens, _) = scan("entero a;\n  flotante b;\n\tcadena c;");
        let b = tokens.iter().find(|t| t.text == "b").unwrap();
        assert_eq!((b.line, b.col), (2, 12));
        let c = tokens.iter().find(|t| t.text == "c").unwrap();
        assert_eq!((c.line, c.col), (3, 9));
    }

    #[test]
    fn test_unicode_identifiers() {
        let (tokens, diags) = scan("entero año = 1;");
        assert!(diags.is_empty());
        assert_eq!(tokens[1].text, "año");
        assert_eq!(tokens[2].col, 12);
    }

    #[test]
    fn test_always_terminates_on_garbage() {
        let garbage = "\"\\\n'/*@@ 1..2.a ==== ))(( ¿? \\";
        let (tokens, diags) = scan(garbage);
        assert!(!diags.is_empty());
        assert!(tokens.len() < garbage.chars().count());
    }
}
