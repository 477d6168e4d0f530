//! Token definitions produced by the Lexis lexer.
//!
//! Tokens are the smallest meaningful units of Lexis source code. Unlike a
//! compiler front-end, the analyzer keeps the exact source slice of every
//! token so that editors and reports can show the text verbatim.
//!
//! # Token Categories
//!
//! - **Comments**: line (`// ...`) and block (`/* ... */`) comments
//! - **Literals**: strings (`"hola"`, `'a'`), integers (`42`), floats (`3.14`)
//! - **Words**: reserved words (`si`, `entero`), identifiers (`contador`) and
//!   near-miss reserved words flagged by the keyword corrector (`Si`, `while`)
//! - **Operators**: arithmetic, relational, logical and assignment (`+`, `<=`, `&&`, `=`)
//! - **Delimiters**: `(` `)` `{` `}` `;` `,`
//!
//! # Examples
//!
//! ```rust
//! use lexis_syntax::{Keyword, Token, TokenKind};
//!
//! let keyword = Token::new(TokenKind::ReservedWord, "si", 1, 1);
//! assert_eq!(keyword.keyword(), Some(Keyword::Si));
//!
//! let open = Token::new(TokenKind::Delimiter, "(", 1, 4);
//! assert!(open.is_delimiter('('));
//! ```

use serde::{Deserialize, Serialize};

use crate::vocab::Keyword;

/// Category of a lexical element.
///
/// The kind is a closed set so that every consumer has to handle each
/// category explicitly. The token text is stored separately on [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A line or block comment, including its markers
    Comment,

    /// A quoted string literal, including its quotes
    StringLiteral,

    /// A run of digits without a decimal point
    IntegerLiteral,

    /// A run of digits with exactly one decimal point
    FloatLiteral,

    /// An exact, case-sensitive match of a reserved word
    ReservedWord,

    /// A user-defined name
    Identifier,

    /// A word that looks like a mistyped reserved word (`Si`, `while`, `mientra`)
    MisspelledReservedWord,

    /// One of the one- or two-character operators
    Operator,

    /// One of `( ) { } ; ,`
    Delimiter,
}

impl TokenKind {
    /// Upper-case label used by text renderings and log reports.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Comment => "COMMENT",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::MisspelledReservedWord => "MISSPELLED_RESERVED_WORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
        }
    }
}

/// A token with its exact source text and position.
///
/// # Fields
///
/// - `kind`: the lexical category
/// - `text`: the exact slice of source that produced the token
/// - `line`: 1-based line number of the first character
/// - `col`: 1-based column (character offset) of the first character
///
/// Position information is what lets diagnostics point at the offending
/// token:
///
/// ```text
/// expected '(' after 'si' at 3:1
///   si x > 0 {
///   ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lexical category of this token
    pub kind: TokenKind,

    /// Source slice, verbatim
    pub text: String,

    /// Line number in the source (1-based)
    pub line: usize,

    /// Column number in the source (1-based)
    #[serde(rename = "column")]
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            col,
        }
    }

    /// Returns the reserved word this token spells, if it is one.
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind == TokenKind::ReservedWord {
            Keyword::from_word(&self.text)
        } else {
            None
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        self.kind == TokenKind::Delimiter && self.text.chars().eq(std::iter::once(ch))
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    /// `(line, col)` pair, convenient for ordering positions.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}
