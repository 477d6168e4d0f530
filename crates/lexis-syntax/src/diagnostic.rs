//! Diagnostic types shared by every stage of the Lexis analyzer.
//!
//! The analyzer never fails on malformed input: describing malformed input
//! is its whole purpose. Every finding is therefore a [`Diagnostic`] value
//! appended to a list, and each stage returns its list alongside its normal
//! output.
//!
//! # Severity tiers
//!
//! - [`Severity::Lexical`]: token-level defects (unterminated literal,
//!   character outside the alphabet, misspelled reserved word)
//! - [`Severity::Syntactic`]: structural shape violations (unbalanced
//!   delimiters, missing `;`, malformed control headers)
//! - [`Severity::Semantic`]: symbol-table violations (redeclaration,
//!   undeclared use, type mismatch)
//!
//! # Examples
//!
//! ```rust
//! use lexis_syntax::{Diagnostic, Severity};
//!
//! let diag = Diagnostic::syntactic("missing ';' after assignment", 4, 3)
//!     .with_suggestion("add ';' at the end of the statement");
//!
//! assert_eq!(diag.severity, Severity::Syntactic);
//! assert_eq!(diag.to_string(), "missing ';' after assignment at 4:3");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// How much cross-token context was needed to detect a defect.
///
/// Variants are ordered from least to most context, so sorting by severity
/// groups lexical findings first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Lexical,
    Syntactic,
    Semantic,
}

impl Severity {
    /// All tiers in increasing order.
    pub const ALL: [Severity; 3] = [Severity::Lexical, Severity::Syntactic, Severity::Semantic];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Lexical => "lexical",
            Severity::Syntactic => "syntactic",
            Severity::Semantic => "semantic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reported defect.
///
/// Diagnostics are append-only findings: once created they are never
/// mutated by a later stage. Two diagnostics from different checks may
/// describe the same token.
///
/// # Fields
///
/// - `line` / `col`: 1-based position the finding points at
/// - `message`: what is wrong, in the language's own terms
/// - `suggestion`: optional corrective text
/// - `severity`: the tier that produced the finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Line number in the source (1-based)
    pub line: usize,

    /// Column number in the source (1-based)
    #[serde(rename = "column")]
    pub col: usize,

    /// Human-readable description
    pub message: String,

    /// Corrective hint, if one is known
    pub suggestion: Option<String>,

    /// Detection tier
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a diagnostic without a suggestion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexis_syntax::{Diagnostic, Severity};
    ///
    /// let diag = Diagnostic::new(Severity::Semantic, "undeclared identifier 'x'", 1, 10);
    /// assert!(diag.suggestion.is_none());
    /// ```
    pub fn new(severity: Severity, message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            message: message.into(),
            suggestion: None,
            severity,
        }
    }

    pub fn lexical(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self::new(Severity::Lexical, message, line, col)
    }

    pub fn syntactic(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self::new(Severity::Syntactic, message, line, col)
    }

    pub fn semantic(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self::new(Severity::Semantic, message, line, col)
    }

    /// Attaches corrective text to a freshly built diagnostic.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.line, self.col)
    }
}
