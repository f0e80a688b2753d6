//! Line-level model of a generated registry source.
//!
//! A registry source holds one `public static final` declaration per
//! generated constant plus a bulk `registerAll` function. New declarations
//! are inserted right before that function's opening line (the anchor).
//! Every other line is kept exactly as found.

use regex::Regex;
use std::sync::OnceLock;

use crate::constants::REGISTRY_ANCHOR;

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*public\s+static\s+final\s+[\w.<>]+\s+(\w+)\s*=")
            .expect("declaration pattern is a valid regex")
    })
}

/// Where a declaration ended up after [`RegistrySource::insert_declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Inserted at this line index, right before the anchor.
    BeforeAnchor(usize),
    /// The anchor is missing, so the declaration went to the end of the file.
    Appended,
    /// A line already mentions the constant; nothing changed.
    AlreadyPresent,
}

/// A registry source split into lines.
///
/// The line terminator of the original file (`\n` or `\r\n`) is kept, so
/// patching never rewrites the endings of lines it did not add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySource {
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl RegistrySource {
    pub fn parse(content: &str) -> Self {
        let line_ending = if content.contains("\r\n") { "\r\n" } else { "\n" };
        Self {
            lines: content.lines().map(str::to_string).collect(),
            line_ending,
            trailing_newline: content.ends_with('\n'),
        }
    }

    pub fn line_ending(&self) -> &str {
        self.line_ending
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the first line containing the registration-loop anchor.
    pub fn anchor_index(&self) -> Option<usize> {
        self.lines.iter().position(|l| l.contains(REGISTRY_ANCHOR))
    }

    /// Constants declared with `public static final`, in file order.
    pub fn declared_constants(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| declaration_regex().captures(l))
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Whether any line contains `constant` as plain text.
    ///
    /// This is a containment check, not a parse: a line declaring
    /// `BREAD_BLOCK_BLOCK` also mentions `BLOCK_BLOCK`.
    pub fn mentions(&self, constant: &str) -> bool {
        self.lines.iter().any(|l| l.contains(constant))
    }

    /// Inserts `declaration` for `constant` unless a line already mentions it.
    pub fn insert_declaration(&mut self, constant: &str, declaration: &str) -> Insertion {
        if self.mentions(constant) {
            return Insertion::AlreadyPresent;
        }
        match self.anchor_index() {
            Some(index) => {
                self.lines.insert(index, declaration.to_string());
                Insertion::BeforeAnchor(index)
            }
            None => {
                self.lines.push(declaration.to_string());
                Insertion::Appended
            }
        }
    }

    pub fn render(&self) -> String {
        let mut content = self.lines.join(self.line_ending);
        if self.trailing_newline {
            content.push_str(self.line_ending);
        }
        content
    }
}
