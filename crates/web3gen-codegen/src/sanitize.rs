//! Identifier sanitization
//!
//! ABI entries can carry arbitrary strings as function and parameter names.
//! The sanitizer rewrites them into legal TypeScript identifiers that are
//! never reserved words. Two different raw names may still sanitize to the
//! same identifier; detecting that collision is the assembler's job.

/// ECMA-262 reserved words, including the strict-mode-only set.
///
/// Generated modules are ES modules and therefore always strict. Kept as an
/// explicit sorted list pinned to a language edition rather than derived
/// from a compiler at runtime.
const ES2023_RESERVED: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// A versioned, immutable reserved-word set for the output language
#[derive(Debug, Clone)]
pub struct ReservedWords {
    version: &'static str,
    words: &'static [&'static str],
}

impl ReservedWords {
    /// The ECMAScript 2023 reserved words
    pub fn es2023() -> Self {
        Self { version: "ES2023", words: ES2023_RESERVED }
    }

    /// Language edition the list was pinned against
    pub fn version(&self) -> &str {
        self.version
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search(&word).is_ok()
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::es2023()
    }
}

/// What the sanitized identifier will name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Method,
    Parameter,
}

/// Rewrites raw ABI names into legal output-language identifiers
#[derive(Debug, Clone)]
pub struct Sanitizer {
    reserved: ReservedWords,
}

impl Sanitizer {
    pub fn new(reserved: ReservedWords) -> Self {
        Self { reserved }
    }

    pub fn reserved(&self) -> &ReservedWords {
        &self.reserved
    }

    /// Sanitize a raw name into a legal identifier.
    ///
    /// Rules, in order: empty parameter names become `param<index>`,
    /// characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a
    /// `_` prepended, and reserved words get a `_method` or `_param` suffix.
    /// An empty method name becomes `_` so the result is never illegal.
    ///
    /// # Examples
    ///
    /// ```
    /// use web3gen_codegen::sanitize::{IdentifierKind, Sanitizer};
    ///
    /// let sanitizer = Sanitizer::default();
    /// assert_eq!(
    ///     sanitizer.sanitize("function", IdentifierKind::Method, 0),
    ///     "function_method"
    /// );
    /// assert_eq!(sanitizer.sanitize("", IdentifierKind::Parameter, 2), "param2");
    /// ```
    pub fn sanitize(&self, raw: &str, kind: IdentifierKind, fallback_index: usize) -> String {
        if raw.is_empty() {
            return match kind {
                IdentifierKind::Parameter => format!("param{}", fallback_index),
                IdentifierKind::Method => "_".to_string(),
            };
        }

        let mut out: String = raw
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        if matches!(out.chars().next(), Some('0'..='9')) {
            out.insert(0, '_');
        }

        if self.reserved.contains(&out) {
            out.push_str(match kind {
                IdentifierKind::Method => "_method",
                IdentifierKind::Parameter => "_param",
            });
        }

        out
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(ReservedWords::default())
    }
}
