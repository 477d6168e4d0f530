//! The fixed Lexis vocabulary: reserved words, operators, delimiters and the
//! table of known keyword typos.
//!
//! The vocabulary is read-only configuration. [`Vocabulary::standard`] hands
//! out a `'static` reference that every analysis borrows, so no analysis can
//! observe another one through it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved words of the language, in suggestion priority order.
pub const RESERVED_WORDS: &[&str] = &[
    "si", "sino", "mientras", "para", "entero", "flotante", "cadena", "retornar", "funcion",
    "verdadero", "falso", "imprimir", "leer",
];

/// Valid operators. Two-character operators come first.
pub const OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "+", "-", "*", "/", "%", "<", ">", "!", "=",
];

pub const DELIMITERS: &[char] = &['(', ')', '{', '}', ';', ','];

/// Common mistakes mapped to the reserved word they stand for.
pub const KNOWN_TYPOS: &[(&str, &str)] = &[
    ("if", "si"),
    ("else", "sino"),
    ("while", "mientras"),
    ("for", "para"),
    ("int", "entero"),
    ("float", "flotante"),
    ("string", "cadena"),
    ("return", "retornar"),
    ("function", "funcion"),
    ("true", "verdadero"),
    ("false", "falso"),
    ("print", "imprimir"),
    ("read", "leer"),
    ("sipasa", "si"),
    ("sinos", "sino"),
    ("enteo", "entero"),
    ("flotate", "flotante"),
    ("Si", "si"),
    ("Sino", "sino"),
];

static STANDARD: Vocabulary = Vocabulary {
    reserved_words: RESERVED_WORDS,
    operators: OPERATORS,
    delimiters: DELIMITERS,
    known_typos: KNOWN_TYPOS,
};

/// Lexical configuration of one analysis run.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    reserved_words: &'static [&'static str],
    operators: &'static [&'static str],
    delimiters: &'static [char],
    known_typos: &'static [(&'static str, &'static str)],
}

impl Vocabulary {
    /// The language's vocabulary.
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    pub fn reserved_words(&self) -> &'static [&'static str] {
        self.reserved_words
    }

    /// Returns the canonical `'static` spelling of `word` if it is reserved.
    pub fn reserved(&self, word: &str) -> Option<&'static str> {
        self.reserved_words.iter().copied().find(|w| *w == word)
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved(word).is_some()
    }

    pub fn is_operator(&self, text: &str) -> bool {
        self.operators.contains(&text)
    }

    /// Whether `ch` can appear in some operator.
    pub fn is_operator_char(&self, ch: char) -> bool {
        self.operators.iter().any(|op| op.contains(ch))
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(&ch)
    }

    /// Exact lookup in the known-typo table.
    pub fn known_typo(&self, word: &str) -> Option<&'static str> {
        self.known_typos
            .iter()
            .find(|(typo, _)| *typo == word)
            .map(|(_, fix)| *fix)
    }
}

/// Type named by a type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    Integer,
    Float,
    String,
}

impl DeclaredType {
    pub fn is_numeric(self) -> bool {
        matches!(self, DeclaredType::Integer | DeclaredType::Float)
    }

    pub fn label(self) -> &'static str {
        match self {
            DeclaredType::Integer => "integer",
            DeclaredType::Float => "float",
            DeclaredType::String => "string",
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The reserved words, as a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// conditional
    Si,
    /// else branch of a conditional
    Sino,
    /// condition loop
    Mientras,
    /// three-clause loop
    Para,
    Entero,
    Flotante,
    Cadena,
    Retornar,
    Funcion,
    Verdadero,
    Falso,
    /// output call
    Imprimir,
    /// input call
    Leer,
}

impl Keyword {
    pub fn from_word(word: &str) -> Option<Keyword> {
        let kw = match word {
            "si" => Keyword::Si,
            "sino" => Keyword::Sino,
            "mientras" => Keyword::Mientras,
            "para" => Keyword::Para,
            "entero" => Keyword::Entero,
            "flotante" => Keyword::Flotante,
            "cadena" => Keyword::Cadena,
            "retornar" => Keyword::Retornar,
            "funcion" => Keyword::Funcion,
            "verdadero" => Keyword::Verdadero,
            "falso" => Keyword::Falso,
            "imprimir" => Keyword::Imprimir,
            "leer" => Keyword::Leer,
            _ => return None,
        };
        Some(kw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Si => "si",
            Keyword::Sino => "sino",
            Keyword::Mientras => "mientras",
            Keyword::Para => "para",
            Keyword::Entero => "entero",
            Keyword::Flotante => "flotante",
            Keyword::Cadena => "cadena",
            Keyword::Retornar => "retornar",
            Keyword::Funcion => "funcion",
            Keyword::Verdadero => "verdadero",
            Keyword::Falso => "falso",
            Keyword::Imprimir => "imprimir",
            Keyword::Leer => "leer",
        }
    }

    /// Keywords whose header is a parenthesized condition followed by a block.
    pub fn is_control(self) -> bool {
        matches!(self, Keyword::Si | Keyword::Mientras | Keyword::Para)
    }

    pub fn declared_type(self) -> Option<DeclaredType> {
        match self {
            Keyword::Entero => Some(DeclaredType::Integer),
            Keyword::Flotante => Some(DeclaredType::Float),
            Keyword::Cadena => Some(DeclaredType::String),
            _ => None,
        }
    }

    pub fn is_io(self) -> bool {
        matches!(self, Keyword::Imprimir | Keyword::Leer)
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Keyword::Verdadero | Keyword::Falso)
    }

    /// Keywords that can only begin a new statement. Lookahead windows that
    /// search for a terminator stop at these.
    pub fn starts_statement(self) -> bool {
        !matches!(self, Keyword::Verdadero | Keyword::Falso | Keyword::Leer)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_relational(op: &str) -> bool {
    matches!(op, "==" | "!=" | "<" | ">" | "<=" | ">=")
}

pub fn is_logical(op: &str) -> bool {
    matches!(op, "&&" | "||" | "!")
}
