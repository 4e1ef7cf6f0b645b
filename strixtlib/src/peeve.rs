//! Diagnostics produced by the scanner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The reason a peeve was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeeveKind {
    AsciiControl,
    FormFeed,
    CarriageReturn,
    TabsNotAllowed,
    TabForAlignment,
    BlankLineAtStartOfFile,
    TooManyBlankLines,
    LineTooLong,
    WhitespaceOnBlankLine,
    WhitespaceAtEndOfLine,
    BlankLineAtEndOfFile,
    NoNewlineAtEndOfFile,
}

impl PeeveKind {
    /// The fixed human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            PeeveKind::AsciiControl => "ASCII control character",
            PeeveKind::FormFeed => "ASCII page separator",
            PeeveKind::CarriageReturn => "file contains carriage return",
            PeeveKind::TabsNotAllowed => "tabs not allowed (use -t to allow)",
            PeeveKind::TabForAlignment => "tab after non-tab",
            PeeveKind::BlankLineAtStartOfFile => "blank line at start of file",
            PeeveKind::TooManyBlankLines => "too many consecutive blank lines",
            PeeveKind::LineTooLong => "line too long",
            PeeveKind::WhitespaceOnBlankLine => "whitespace on blank line",
            PeeveKind::WhitespaceAtEndOfLine => "whitespace at end of line",
            PeeveKind::BlankLineAtEndOfFile => "blank line at end of file",
            PeeveKind::NoNewlineAtEndOfFile => "no newline at end of file",
        }
    }
}

impl fmt::Display for PeeveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One style violation at a 1-based line and tab-expanded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peeve {
    pub line: usize,
    pub column: usize,
    pub kind: PeeveKind,
}

impl Peeve {
    pub fn new(line: usize, column: usize, kind: PeeveKind) -> Self {
        Self { line, column, kind }
    }

    /// Shorthand for `self.kind.message()`.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Ordered, append-only list of peeves for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Peeves {
    items: Vec<Peeve>,
}

impl Peeves {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a peeve. Earlier entries are never touched.
    pub fn emit(&mut self, line: usize, column: usize, kind: PeeveKind) {
        self.items.push(Peeve::new(line, column, kind));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Peeve> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_preserves_order() {
        let mut peeves = Peeves::new();
        peeves.emit(3, 1, PeeveKind::LineTooLong);
        peeves.emit(1, 5, PeeveKind::CarriageReturn);
        peeves.emit(1, 5, PeeveKind::CarriageReturn);

        let items = peeves.into_vec();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Peeve::new(3, 1, PeeveKind::LineTooLong));
        assert_eq!(items[1], items[2]);
    }

    #[test]
    fn kind_display_matches_message() {
        assert_eq!(
            PeeveKind::TabsNotAllowed.to_string(),
            "tabs not allowed (use -t to allow)"
        );
        assert_eq!(PeeveKind::FormFeed.to_string(), "ASCII page separator");
    }
}
