//! Symbol table and the declaration-collecting pass.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use lexis_syntax::diagnostic::Diagnostic;
use lexis_syntax::token::{Token, TokenKind};
use lexis_syntax::vocab::{DeclaredType, Keyword};
use log::{debug, trace};

use crate::limits::Limits;
use crate::stream::{code_tokens, find_terminator, inside, parameter_spans};

/// A declared variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    pub name: String,
    pub declared_type: DeclaredType,
    pub line: usize,
    pub col: usize,
}

/// A declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    pub line: usize,
    pub col: usize,
}

/// Names declared in one analysis run.
///
/// The table holds at most one record per name and never overwrites: the
/// first declaration wins and later ones are reported by [`collect`].
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: HashMap<String, VariableRecord>,
    functions: HashMap<String, FunctionRecord>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` unless the name is taken, in which case the existing
    /// record is returned untouched.
    pub fn declare_variable(&mut self, record: VariableRecord) -> Result<(), &VariableRecord> {
        match self.variables.entry(record.name.clone()) {
            Entry::Occupied(existing) => {
                let existing: &_ = existing.into_mut();
                Err(existing)
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    pub fn declare_function(&mut self, record: FunctionRecord) -> Result<(), &FunctionRecord> {
        match self.functions.entry(record.name.clone()) {
            Entry::Occupied(existing) => {
                let existing: &_ = existing.into_mut();
                Err(existing)
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    pub fn variable(&self, name: &str) -> Option<&VariableRecord> {
        self.variables.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&FunctionRecord> {
        self.functions.get(name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name) || self.functions.contains_key(name)
    }

    /// Variables in declaration order.
    pub fn variables(&self) -> Vec<&VariableRecord> {
        let mut vars: Vec<_> = self.variables.values().collect();
        vars.sort_by_key(|v| (v.line, v.col));
        vars
    }

    /// Functions in declaration order.
    pub fn functions(&self) -> Vec<&FunctionRecord> {
        let mut funcs: Vec<_> = self.functions.values().collect();
        funcs.sort_by_key(|f| (f.line, f.col));
        funcs
    }
}

/// First pass: registers every `<type> name` and `funcion name` site.
///
/// Redeclarations are `Semantic` findings and keep the original record. A
/// variable declaration outside a parameter list must reach its `;` within
/// the terminator window, otherwise a `Syntactic` finding points at the
/// declared name.
pub fn collect(tokens: &[Token], limits: &Limits) -> (SymbolTable, Vec<Diagnostic>) {
    let toks = code_tokens(tokens);
    let params = parameter_spans(&toks);
    let mut table = SymbolTable::new();
    let mut diags = Vec::new();

    for (i, tok) in toks.iter().enumerate() {
        let Some(kw) = tok.keyword() else { continue };

        if let Some(declared_type) = kw.declared_type() {
            let is_param = inside(&params, i);
            match toks.get(i + 1) {
                Some(name) if name.is_identifier() => {
                    trace!("declaration of {} {} at {}:{}", kw, name.text, name.line, name.col);
                    let record = VariableRecord {
                        name: name.text.clone(),
                        declared_type,
                        line: name.line,
                        col: name.col,
                    };
                    if let Err(existing) = table.declare_variable(record) {
                        diags.push(
                            Diagnostic::semantic(
                                format!("variable '{}' already declared at line {}", name.text, existing.line),
                                name.line,
                                name.col,
                            )
                            .with_suggestion("rename the variable or remove the second declaration"),
                        );
                    }
                    if !is_param && find_terminator(&toks, i, i + 2, limits.terminator_window).is_none() {
                        diags.push(
                            Diagnostic::syntactic(
                                format!("missing ';' at the end of the declaration of '{}'", name.text),
                                name.line,
                                name.col,
                            )
                            .with_suggestion("add ';' at the end of the declaration"),
                        );
                    }
                }
                // already reported by the lexer
                Some(name) if name.kind == TokenKind::MisspelledReservedWord => {}
                _ => diags.push(
                    Diagnostic::syntactic(format!("expected identifier after '{}'", kw), tok.line, tok.col)
                        .with_suggestion(format!("write a declaration like: {} nombre = valor;", kw)),
                ),
            }
        } else if kw == Keyword::Funcion {
            match toks.get(i + 1) {
                Some(name) if name.is_identifier() => {
                    let record = FunctionRecord {
                        name: name.text.clone(),
                        line: name.line,
                        col: name.col,
                    };
                    if let Err(existing) = table.declare_function(record) {
                        diags.push(
                            Diagnostic::semantic(
                                format!("function '{}' already declared at line {}", name.text, existing.line),
                                name.line,
                                name.col,
                            )
                            .with_suggestion("give the function a different name"),
                        );
                    }
                }
                Some(name) if name.kind == TokenKind::MisspelledReservedWord => {}
                _ => diags.push(
                    Diagnostic::syntactic("expected function name after 'funcion'", tok.line, tok.col)
                        .with_suggestion("write: funcion nombre(parametros) { ... }"),
                ),
            }
        }
    }

    debug!(
        "collected {} variables and {} functions with {} diagnostics",
        table.variables.len(),
        table.functions.len(),
        diags.len()
    );
    (table, diags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_lexer::scan;
    use lexis_syntax::diagnostic::Severity;

    fn collect_str(src: &str) -> (SymbolTable, Vec<Diagnostic>) {
        let (tokens, _) = scan(src);
        collect(&tokens, &Limits::default())
    }

    #[test]
    fn registers_declarations() {
        let (table, diags) = collect_str("entero x = 1;\nflotante y;\ncadena s = \"a\";");
        assert!(diags.is_empty(), "{:?}", diags);
        let x = table.variable("x").unwrap();
        assert_eq!(x.declared_type, DeclaredType::Integer);
        assert_eq!(x.line, 1);
        assert_eq!(table.variable("y").unwrap().declared_type, DeclaredType::Float);
        assert_eq!(table.variable("s").unwrap().line, 3);
        let names: Vec<_> = table.variables().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "s"]);
    }

    #[test]
    fn redeclaration_keeps_first_record() {
        let (table, diags) = collect_str("entero x = 1;\ncadena x = \"b\";");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Semantic);
        assert_eq!(diags[0].message, "variable 'x' already declared at line 1");
        assert_eq!(diags[0].position(), (2, 8));
        assert_eq!(table.variable("x").unwrap().declared_type, DeclaredType::Integer);
    }

    #[test]
    fn missing_terminator() {
        let (_, diags) = collect_str("entero x = 1\nimprimir(x);");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Syntactic);
        assert!(diags[0].message.contains("missing ';'"));
        assert_eq!(diags[0].position(), (1, 8));
    }

    #[test]
    fn expected_identifier_after_type() {
        let (_, diags) = collect_str("entero = 5;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "expected identifier after 'entero'");
    }

    #[test]
    fn functions_and_parameters() {
        let src = "funcion sumar(entero a, entero b) { retornar a + b; }\n\
                   funcion doble(entero n) { retornar n * 2; }\n\
                   funcion sumar() { }";
        let (table, diags) = collect_str(src);
        assert_eq!(diags.len(), 1, "{:?}", diags);
        assert_eq!(diags[0].message, "function 'sumar' already declared at line 1");
        assert!(table.function("doble").is_some());
        assert!(table.variable("a").is_some());
        assert!(table.variable("n").is_some());
    }

    #[test]
    fn parameter_names_share_the_flat_table() {
        let src = "funcion f(entero a) { retornar a; }\nfuncion g(cadena a) { a = \"hola\"; }";
        let (table, diags) = collect_str(src);
        assert_eq!(diags.len(), 1, "{:?}", diags);
        assert_eq!(diags[0].severity, Severity::Semantic);
        assert_eq!(diags[0].message, "variable 'a' already declared at line 1");
        assert_eq!(diags[0].position(), (2, 18));
        assert_eq!(table.variable("a").unwrap().declared_type, DeclaredType::Integer);
    }

    #[test]
    fn loop_header_declaration_is_terminated() {
        let (table, diags) = collect_str("para (entero i = 0; i < 3; i = i + 1) { }");
        assert!(diags.is_empty(), "{:?}", diags);
        assert!(table.is_declared("i"));
    }
}
