//! "Did you mean" proposals for words that are not reserved.

use lexis_syntax::vocab::Vocabulary;

/// Proposes the reserved word a non-reserved word most likely stands for.
///
/// Lookup order:
///
/// 1. the known-typo table, verbatim and then lower-cased
/// 2. a case-insensitive match with a reserved word (`MIENTRAS`)
/// 3. a bounded similarity test against every reserved word, only for words
///    of at least three characters
///
/// The first reserved word (in vocabulary order) satisfying a rule wins.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCorrector<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> KeywordCorrector<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Returns a correction for `word`, or `None` if it should stay an
    /// identifier. Exact reserved words get no correction.
    pub fn suggest(&self, word: &str) -> Option<&'static str> {
        if self.vocab.is_reserved(word) {
            return None;
        }
        if let Some(fix) = self.vocab.known_typo(word) {
            return Some(fix);
        }
        let lower = word.to_lowercase();
        if let Some(fix) = self.vocab.known_typo(&lower) {
            return Some(fix);
        }
        if let Some(reserved) = self.vocab.reserved(&lower) {
            return Some(reserved);
        }
        // Short names like `x` or `i` are legitimate identifiers.
        if word.chars().count() < 3 {
            return None;
        }
        self.vocab
            .reserved_words()
            .iter()
            .copied()
            .find(|reserved| is_similar(&lower, reserved))
    }
}

/// Positional mismatches over the common prefix plus the length difference,
/// accepted when the total is at most 2.
fn is_similar(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let len_diff = a.len().abs_diff(b.len());
    if len_diff > 2 || a.len() <= 2 || b.len() <= 2 {
        return false;
    }
    let mismatches = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
    mismatches + len_diff <= 2
}
