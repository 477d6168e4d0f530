/// Lookahead bounds for the heuristic terminator and call searches.
///
/// The bounds are part of the rules: a `;` that sits further away than the
/// window is reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Tokens scanned from a declaration or assignment looking for `;`
    pub terminator_window: usize,
    /// Tokens scanned from an I/O keyword looking for its closing `)`
    pub call_window: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            terminator_window: 20,
            call_window: 30,
        }
    }
}
