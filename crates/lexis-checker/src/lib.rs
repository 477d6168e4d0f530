//! Declaration collection and structural/semantic validation for Lexis.
//!
//! The checker works on the token stream produced by `lexis-lexer` and never
//! fails: everything it finds is returned as a [`Diagnostic`](lexis_syntax::Diagnostic).
//!
//! ```
//! use lexis_checker::{collect, validate, Limits};
//!
//! let (tokens, _) = lexis_lexer::scan("entero x = 1.5;");
//! let limits = Limits::default();
//! let (table, declared) = collect(&tokens, &limits);
//! let found = validate(&tokens, &table, &limits);
//! assert!(declared.is_empty());
//! assert_eq!(found.len(), 1);
//! ```

pub mod checks;
pub mod limits;
mod stream;
pub mod symbols;

pub use checks::validate;
pub use limits::Limits;
pub use symbols::{collect, FunctionRecord, SymbolTable, VariableRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_lexer::scan;
    use lexis_syntax::diagnostic::{Diagnostic, Severity};

    fn check_program(src: &str) -> Vec<Diagnostic> {
        let (tokens, _) = scan(src);
        let limits = Limits::default();
        let (table, mut diags) = collect(&tokens, &limits);
        diags.extend(validate(&tokens, &table, &limits));
        diags
    }

    #[test]
    fn test_clean_program() {
        let src = r#"
// suma de los primeros numeros
entero total = 0;
para (entero i = 1; i <= 10; i = i + 1) {
    total = total + i;
}
si (total > 50) {
    imprimir("grande");
} sino {
    imprimir(total);
}
"#;
        let diags = check_program(src);
        assert!(diags.is_empty(), "{:?}", diags);
    }

    #[test]
    fn test_functions_program() {
        let src = r#"
funcion sumar(entero a, entero b) {
    retornar a + b;
}
entero x = sumar(1, 2);
mientras (x < 10) {
    x = x + 1;
}
"#;
        let diags = check_program(src);
        assert!(diags.is_empty(), "{:?}", diags);
    }

    #[test]
    fn test_findings_come_in_check_order() {
        let src = "si (x) {\nentero y = 1.5;\n";
        let diags = check_program(src);
        let messages: Vec<_> = diags.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "unclosed '{'",
                "condition in 'si' lacks a relational or logical operator",
                "undeclared identifier 'x'",
                "type mismatch: integer variable 'y' receiving float value",
            ]
        );
    }

    #[test]
    fn test_comments_are_invisible_to_checks() {
        let diags = check_program("entero x /* valor */ = 1; // fin\nimprimir(x);");
        assert!(diags.is_empty(), "{:?}", diags);
    }

    #[test]
    fn test_severities() {
        let diags = check_program("entero x = 1;\nentero x = 2;\nimprimir(z)");
        let severities: Vec<_> = diags.iter().map(|d| d.severity).collect();
        assert_eq!(severities, vec![Severity::Semantic, Severity::Syntactic, Severity::Semantic]);
    }
}
