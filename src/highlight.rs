//! Syntax highlighting for the visible lines.
//!
//! Rules are regexes keyed by file extension. Highlighting is purely cosmetic: a rule that fails
//! to compile is skipped and an unknown extension renders as plain text.

use crate::text::byte_to_char_index;
use regex::Regex;
use std::collections::HashMap;

/// Colors a span can be painted with. The renderer maps these to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Grey,
}

/// A highlighted span within a line, in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Start column (inclusive).
    pub start: usize,
    /// End column (exclusive).
    pub end: usize,
    pub color: HighlightColor,
    /// Higher priority wins where spans overlap.
    pub priority: i32,
}

/// A compiled highlight rule ready for matching.
struct CompiledRule {
    regex: Regex,
    color: HighlightColor,
    priority: i32,
    /// Which capture group to highlight (0 = whole match).
    group: usize,
}

const PYTHON_KEYWORDS: &str = r"\b(?:False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b";

/// Built-in rules: `(extension, pattern, color, priority, group)`.
const BUILTIN_RULES: &[(&str, &str, HighlightColor, i32, usize)] = &[
    ("py", PYTHON_KEYWORDS, HighlightColor::Magenta, 1, 0),
    ("py", r"\b(?:self|cls)\b", HighlightColor::Red, 1, 0),
    ("py", r"\b\d+(?:\.\d+)?\b", HighlightColor::Cyan, 1, 0),
    ("py", r"\b(?:def|class)\s+([A-Za-z_]\w*)", HighlightColor::Blue, 2, 1),
    ("py", r"@[A-Za-z_][\w.]*", HighlightColor::Yellow, 2, 0),
    ("py", r#""(?:[^"\\]|\\.)*"?|'(?:[^'\\]|\\.)*'?"#, HighlightColor::Green, 3, 0),
    ("py", r"#.*$", HighlightColor::Grey, 4, 0),
];

/// Rule sets per file extension, and the extension currently in effect.
#[derive(Default)]
pub struct Highlighter {
    rules_by_ext: HashMap<String, Vec<CompiledRule>>,
    current_ext: String,
}

impl Highlighter {
    /// A highlighter with the built-in rule set.
    pub fn with_builtin_rules() -> Self {
        let mut hl = Self::default();
        for &(ext, pattern, color, priority, group) in BUILTIN_RULES {
            hl.register_rule(ext, pattern, color, priority, group);
        }
        hl
    }

    /// Register a rule for a file extension (without the dot). Invalid patterns are logged and
    /// dropped.
    pub fn register_rule(&mut self, extension: &str, pattern: &str, color: HighlightColor, priority: i32, group: usize) {
        let regex = match Regex::new(pattern) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(pattern, error = %e, "invalid highlight pattern");
                return;
            }
        };
        self.rules_by_ext
            .entry(extension.to_lowercase())
            .or_default()
            .push(CompiledRule { regex, color, priority, group });
    }

    /// Select the rule set from a file name (`None` or no extension means no highlighting).
    pub fn set_file_extension(&mut self, ext: Option<&str>) {
        self.current_ext = ext.unwrap_or_default().to_lowercase();
    }

    pub fn is_active(&self) -> bool {
        self.rules_by_ext.contains_key(&self.current_ext)
    }

    /// Compute highlight spans for a line of text.
    pub fn highlight_line(&self, text: &str) -> Vec<HighlightSpan> {
        let Some(rules) = self.rules_by_ext.get(&self.current_ext) else {
            return Vec::new();
        };

        let mut spans = Vec::new();
        for rule in rules {
            for caps in rule.regex.captures_iter(text) {
                if let Some(m) = caps.get(rule.group) {
                    spans.push(HighlightSpan {
                        start: byte_to_char_index(text, m.start()),
                        end: byte_to_char_index(text, m.end()),
                        color: rule.color,
                        priority: rule.priority,
                    });
                }
            }
        }

        spans.sort_by(|a, b| a.start.cmp(&b.start).then(a.priority.cmp(&b.priority)));
        spans
    }
}

/// The color at `col`: the highest-priority span containing it.
pub fn color_at(spans: &[HighlightSpan], col: usize) -> Option<HighlightColor> {
    spans
        .iter()
        .filter(|s| (s.start..s.end).contains(&col))
        .max_by_key(|s| s.priority)
        .map(|s| s.color)
}
