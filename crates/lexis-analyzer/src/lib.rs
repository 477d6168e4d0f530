//! Lexis analyzer: one call from source text to tokens and diagnostics.
//!
//! This crate wires the lexer, the symbol collector and the validator into a
//! single stateless operation. Each call builds its own symbol table, so
//! concurrent callers share nothing but the read-only vocabulary.
//!
//! ```
//! let analysis = lexis_analyzer::analyze("entero x = 1; imprimir(x);");
//! assert!(!analysis.has_errors());
//! assert_eq!(analysis.tokens.len(), 10);
//! ```

pub mod report;

pub use report::{log_file_name, render_log};

use log::debug;
use serde::{Deserialize, Serialize};

use lexis_checker::{collect, validate, Limits};
use lexis_lexer::Lexer;
use lexis_syntax::diagnostic::{Diagnostic, Severity};
use lexis_syntax::token::Token;
use lexis_syntax::vocab::Vocabulary;

/// Everything one analysis run produced.
///
/// Diagnostics are ordered by stage: lexical findings first, then the
/// symbol collector's, then the validator's check by check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of diagnostics in the given tier.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == severity).count()
    }
}

/// Analysis configured with a vocabulary and lookahead limits.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'v> {
    vocab: &'v Vocabulary,
    limits: Limits,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::standard(), Limits::default())
    }
}

impl<'v> Analyzer<'v> {
    pub fn new(vocab: &'v Vocabulary, limits: Limits) -> Self {
        Self { vocab, limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn analyze(&self, source: &str) -> Analysis {
        let (tokens, mut diagnostics) = Lexer::new(source, self.vocab).tokenize();
        let lexical = diagnostics.len();

        let (table, declared) = collect(&tokens, &self.limits);
        diagnostics.extend(declared);
        let collected = diagnostics.len() - lexical;

        diagnostics.extend(validate(&tokens, &table, &self.limits));
        debug!(
            "analyzed {} chars: {} tokens, {} lexical, {} collection, {} validation diagnostics",
            source.chars().count(),
            tokens.len(),
            lexical,
            collected,
            diagnostics.len() - lexical - collected
        );

        Analysis { tokens, diagnostics }
    }
}

/// Analyzes `source` with the standard vocabulary and default limits.
pub fn analyze(source: &str) -> Analysis {
    Analyzer::default().analyze(source)
}
