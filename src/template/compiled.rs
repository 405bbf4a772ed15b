//! Compiled templates.
//!
//! Compilation does not parse a template into a tree. It pairs the raw text
//! with a content fingerprint and the two structural matchers that every
//! render applies: one for `{{ name }}` placeholders and one for
//! `{% if name %}...{% endif %}` blocks.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::sync::LazyLock;

// --- Compiled regexes (one-time via LazyLock) ---

/// `{{`, optional whitespace, captured word, optional whitespace, `}}`.
static VARIABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("VARIABLE_PATTERN must compile")
});

/// `{% if NAME %}` BODY `{% endif %}` with a non-greedy, newline-spanning body.
static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{%\s*if\s+(\w+)\s*%\}([\s\S]*?)\{%\s*endif\s*%\}")
        .expect("BLOCK_PATTERN must compile")
});

/// A template's raw text together with the matchers derived for it.
///
/// Raw text and matchers live in one value, so replacing a template swaps
/// both at once.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    source: String,
    fingerprint: String,
    variable: &'static Regex,
    block: &'static Regex,
}

impl CompiledTemplate {
    /// Compile raw template text. Never fails: malformed syntax simply
    /// doesn't match at render time.
    pub fn compile(source: impl Into<String>) -> Self {
        let source = source.into();
        let fingerprint = fingerprint(&source);
        Self {
            source,
            fingerprint,
            variable: &VARIABLE_PATTERN,
            block: &BLOCK_PATTERN,
        }
    }

    /// The raw template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Hex content fingerprint of the raw text.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Matcher for `{{ name }}` placeholders. Group 1 is the variable name.
    pub fn variable_matcher(&self) -> &Regex {
        self.variable
    }

    /// Matcher for `{% if name %}...{% endif %}` blocks.
    /// Group 1 is the condition name, group 2 the body.
    pub fn block_matcher(&self) -> &Regex {
        self.block
    }

    /// Names referenced by placeholders in the raw text.
    pub fn variables(&self) -> BTreeSet<String> {
        self.variable
            .captures_iter(&self.source)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Names used as block conditions in the raw text.
    pub fn conditions(&self) -> BTreeSet<String> {
        self.block
            .captures_iter(&self.source)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Hex-encoded prefix of the SHA-256 of `content`.
pub fn fingerprint(content: &str) -> String {
    let hash = Sha256::digest(content.as_bytes());
    hex::encode(&hash[..16])
}
