//! Template syntax diagnostics.
//!
//! Rendering never rejects a template: unmatched syntax is passed through as
//! literal text, and nested blocks are closed by the first `{% endif %}`.
//! This module finds those situations ahead of time so they can be reported
//! instead of discovered as odd output.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%([\s\S]*?)%\}").expect("TAG_PATTERN must compile"));

static OPENER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*if\s+(\w+)\s*$").expect("OPENER_PATTERN must compile"));

static CLOSER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*endif\s*$").expect("CLOSER_PATTERN must compile"));

static PLACEHOLDER_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\w+\s*$").expect("PLACEHOLDER_BODY must compile"));

/// Kind of problem found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// `{% if %}` opened while another block is still open.
    NestedBlock,
    /// `{% if %}` with no matching `{% endif %}`.
    UnclosedBlock,
    /// `{% endif %}` with no open block.
    StrayEndif,
    /// `{% ... %}` that is neither `if NAME` nor `endif`.
    MalformedTag,
    /// `{{ ... }}` whose body is not a single word, or `{{` never closed.
    MalformedPlaceholder,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticKind::NestedBlock => "nested-block",
            DiagnosticKind::UnclosedBlock => "unclosed-block",
            DiagnosticKind::StrayEndif => "stray-endif",
            DiagnosticKind::MalformedTag => "malformed-tag",
            DiagnosticKind::MalformedPlaceholder => "malformed-placeholder",
        };
        write!(f, "{}", s)
    }
}

/// A single finding, positioned at 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Diagnostic {
    fn at(source: &str, offset: usize, kind: DiagnosticKind, message: String) -> Self {
        let (line, column) = line_col(source, offset);
        Self {
            kind,
            line,
            column,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: [{}] {}",
            self.line, self.column, self.kind, self.message
        )
    }
}

/// Check template text, returning findings in source order.
pub fn check_template(source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = check_tags(source);
    diagnostics.extend(check_placeholders(source));
    diagnostics.sort_by_key(|d| (d.line, d.column));
    diagnostics
}

fn check_tags(source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut open: Vec<(usize, String)> = Vec::new();

    for caps in TAG_PATTERN.captures_iter(source) {
        let Some(whole) = caps.get(0) else { continue };
        let inner = &caps[1];
        let offset = whole.start();

        if let Some(opener) = OPENER_PATTERN.captures(inner) {
            let name = opener[1].to_string();
            if let Some((_, outer)) = open.last() {
                diagnostics.push(Diagnostic::at(
                    source,
                    offset,
                    DiagnosticKind::NestedBlock,
                    format!(
                        "block '{}' is nested inside '{}'; the first endif closes '{}'",
                        name, outer, outer
                    ),
                ));
            }
            open.push((offset, name));
        } else if CLOSER_PATTERN.is_match(inner) {
            if open.pop().is_none() {
                diagnostics.push(Diagnostic::at(
                    source,
                    offset,
                    DiagnosticKind::StrayEndif,
                    "endif without a matching if".to_string(),
                ));
            }
        } else {
            diagnostics.push(Diagnostic::at(
                source,
                offset,
                DiagnosticKind::MalformedTag,
                format!("unrecognized tag '{}'", whole.as_str()),
            ));
        }
    }

    for (offset, name) in open {
        diagnostics.push(Diagnostic::at(
            source,
            offset,
            DiagnosticKind::UnclosedBlock,
            format!("block '{}' is never closed", name),
        ));
    }

    diagnostics
}

fn check_placeholders(source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = source[cursor..].find("{{") {
        let start = cursor + rel;
        let body_start = start + 2;
        match source[body_start..].find("}}") {
            Some(len) => {
                let body = &source[body_start..body_start + len];
                if !PLACEHOLDER_BODY.is_match(body) {
                    diagnostics.push(Diagnostic::at(
                        source,
                        start,
                        DiagnosticKind::MalformedPlaceholder,
                        format!("placeholder '{{{{{}}}}}' is not a single name", body),
                    ));
                }
                cursor = body_start + len + 2;
            }
            None => {
                diagnostics.push(Diagnostic::at(
                    source,
                    start,
                    DiagnosticKind::MalformedPlaceholder,
                    "'{{' is never closed".to_string(),
                ));
                break;
            }
        }
    }

    diagnostics
}

fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(nl) => before[nl + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<DiagnosticKind> {
        check_template(source).into_iter().map(|d| d.kind).collect()
    }

    #[test]
    fn clean_template_has_no_findings() {
        assert!(check_template("<p>{{ count }}</p>{% if show %}x{% endif %}").is_empty());
        assert!(check_template("plain text with { braces }").is_empty());
    }

    #[test]
    fn detects_nested_block() {
        let diags = check_template("{% if a %}{% if b %}x{% endif %}{% endif %}");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::NestedBlock);
        assert_eq!(diags[0].column, 11);
        assert!(diags[0].message.contains("'b'"));
    }

    #[test]
    fn detects_unclosed_and_stray() {
        assert_eq!(kinds("{% if a %}never"), vec![DiagnosticKind::UnclosedBlock]);
        assert_eq!(kinds("done{% endif %}"), vec![DiagnosticKind::StrayEndif]);
    }

    #[test]
    fn detects_malformed_tags() {
        assert_eq!(
            kinds("{% for x in xs %}{% endfor %}"),
            vec![DiagnosticKind::MalformedTag, DiagnosticKind::MalformedTag]
        );
        assert_eq!(
            kinds("{% if %}x{% endif %}"),
            vec![DiagnosticKind::MalformedTag, DiagnosticKind::StrayEndif]
        );
    }

    #[test]
    fn detects_malformed_placeholders() {
        assert_eq!(
            kinds("{{ two words }}"),
            vec![DiagnosticKind::MalformedPlaceholder]
        );
        assert_eq!(kinds("{{ }}"), vec![DiagnosticKind::MalformedPlaceholder]);
        assert_eq!(kinds("tail {{ count"), vec![DiagnosticKind::MalformedPlaceholder]);
    }

    #[test]
    fn positions_are_line_and_column() {
        let diags = check_template("line one\n  {{ bad name }}\n");
        assert_eq!(diags.len(), 1);
        assert_eq!((diags[0].line, diags[0].column), (2, 3));
    }

    #[test]
    fn display_includes_position_and_kind() {
        let diags = check_template("{% endif %}");
        assert_eq!(
            diags[0].to_string(),
            "1:1: [stray-endif] endif without a matching if"
        );
    }

    #[test]
    fn findings_are_sorted_by_position() {
        let diags = check_template("{{ a b }}\n{% if x %}");
        let lines: Vec<_> = diags.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }
}
