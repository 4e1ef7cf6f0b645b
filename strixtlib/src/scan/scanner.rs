//! The single-pass byte scanner.
//!
//! The scanner walks a buffer once, left to right. Per-byte peeves (control
//! characters, tabs) are emitted as the byte is seen; per-line peeves are
//! emitted when the line's LF is reached, or at end of buffer for a final
//! line without one; per-file peeves come last. All line-level and
//! file-level peeves are positioned at the column right after the line's
//! last character.

use crate::options::ScanOptions;
use crate::peeve::{Peeve, PeeveKind, Peeves};

use super::byte_class::ByteClass;
use super::line::{tab_advance, LineState, TabPlacement};

/// Scan a buffer and return its peeves in discovery order.
///
/// The buffer is expected to be capped by the caller already. Scanning is
/// total: every byte sequence produces a (possibly empty) list.
pub fn scan(bytes: &[u8], options: &ScanOptions) -> Vec<Peeve> {
    Scanner::new(options).run(bytes)
}

struct Scanner<'o> {
    options: &'o ScanOptions,
    peeves: Peeves,
    line: LineState,
    human_line: usize,
    human_column: usize,
    at_line_start: bool,
    had_nonblank_line: bool,
    blank_run: usize,
    prev: Option<ByteClass>,
}

impl<'o> Scanner<'o> {
    fn new(options: &'o ScanOptions) -> Self {
        Self {
            options,
            peeves: Peeves::new(),
            line: LineState::default(),
            human_line: 0,
            human_column: 1,
            at_line_start: true,
            had_nonblank_line: false,
            blank_run: 0,
            prev: None,
        }
    }

    fn run(mut self, bytes: &[u8]) -> Vec<Peeve> {
        for (offset, &byte) in bytes.iter().enumerate() {
            if self.at_line_start {
                self.begin_line(offset);
            }
            let offset_on_line = self.line.offset_of(offset);
            let class = ByteClass::of(byte);

            if let Some(kind) = class.peeve() {
                self.emit(kind);
            }

            match class {
                ByteClass::Tab => self.visit_tab(offset_on_line),
                ByteClass::Space => {
                    self.line.push_space(offset_on_line);
                    self.human_column += 1;
                }
                ByteClass::Newline => {
                    self.finish_line(offset_on_line);
                    self.at_line_start = true;
                }
                _ => self.human_column += 1,
            }

            self.prev = Some(class);
        }

        if !self.at_line_start {
            let len = self.line.offset_of(bytes.len());
            self.finish_line(len);
        }
        self.finish_file();

        self.peeves.into_vec()
    }

    fn emit(&mut self, kind: PeeveKind) {
        self.peeves.emit(self.human_line, self.human_column, kind);
    }

    fn begin_line(&mut self, offset: usize) {
        self.line = LineState::starting_at(offset);
        self.human_line += 1;
        self.human_column = 1;
        self.at_line_start = false;
    }

    fn visit_tab(&mut self, offset_on_line: usize) {
        if !self.options.tabs_allowed {
            self.emit(PeeveKind::TabsNotAllowed);
        }
        let advance = tab_advance(self.human_column);
        if self.line.push_tab(offset_on_line) == TabPlacement::Misplaced
            && self.options.tabs_allowed
        {
            self.emit(PeeveKind::TabForAlignment);
        }
        self.human_column += advance;
    }

    /// End-of-line checks. `len` is the line's length in bytes, LF excluded.
    fn finish_line(&mut self, len: usize) {
        let is_blank = self.line.is_blank(len);

        if is_blank {
            self.blank_run += 1;
            if !self.had_nonblank_line && self.blank_run == 1 {
                self.emit(PeeveKind::BlankLineAtStartOfFile);
            } else if self.blank_run > self.options.max_blank_lines {
                self.emit(PeeveKind::TooManyBlankLines);
            }
        } else {
            self.blank_run = 0;
            self.had_nonblank_line = true;
        }

        if self.human_column - 1 > self.options.max_line_width {
            self.emit(PeeveKind::LineTooLong);
        }

        if is_blank {
            if len > 0 {
                self.emit(PeeveKind::WhitespaceOnBlankLine);
            }
        } else if self.prev.is_some_and(ByteClass::is_blank) {
            self.emit(PeeveKind::WhitespaceAtEndOfLine);
        }
    }

    fn finish_file(&mut self) {
        if self.blank_run > 0 {
            self.emit(PeeveKind::BlankLineAtEndOfFile);
        }
        if matches!(self.prev, Some(class) if class != ByteClass::Newline) {
            self.emit(PeeveKind::NoNewlineAtEndOfFile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(input: &[u8], options: ScanOptions) -> Vec<(usize, usize, PeeveKind)> {
        scan(input, &options)
            .into_iter()
            .map(|p| (p.line, p.column, p.kind))
            .collect()
    }

    fn peeves(input: &[u8]) -> Vec<(usize, usize, PeeveKind)> {
        with(input, ScanOptions::new())
    }

    fn peeves_tabs(input: &[u8]) -> Vec<(usize, usize, PeeveKind)> {
        with(input, ScanOptions::new().tabs_allowed(true))
    }

    fn count(found: &[(usize, usize, PeeveKind)], kind: PeeveKind) -> usize {
        found.iter().filter(|(_, _, k)| *k == kind).count()
    }

    #[test]
    fn empty_buffer() {
        assert!(peeves(b"").is_empty());
    }

    #[test]
    fn clean_file() {
        assert!(peeves(b"fn main() {\n    run();\n}\n").is_empty());
    }

    #[test]
    fn missing_final_newline() {
        assert_eq!(
            peeves(b"abc"),
            vec![(1, 4, PeeveKind::NoNewlineAtEndOfFile)]
        );
        assert!(peeves(b"abc\n").is_empty());
    }

    #[test]
    fn blank_lines_at_start() {
        let found = peeves(b"\n\n\n");
        assert_eq!(count(&found, PeeveKind::BlankLineAtStartOfFile), 1);
        assert_eq!(
            found,
            vec![
                (1, 1, PeeveKind::BlankLineAtStartOfFile),
                (3, 1, PeeveKind::TooManyBlankLines),
                (3, 1, PeeveKind::BlankLineAtEndOfFile),
            ]
        );
    }

    #[test]
    fn too_many_blank_lines_reported_per_extra_line() {
        let found = peeves(b"a\n\n\n\n\nb\n");
        assert_eq!(
            found,
            vec![
                (4, 1, PeeveKind::TooManyBlankLines),
                (5, 1, PeeveKind::TooManyBlankLines),
            ]
        );
    }

    #[test]
    fn two_blank_lines_allowed() {
        assert!(peeves(b"a\n\n\nb\n").is_empty());
    }

    #[test]
    fn max_blank_lines_is_configurable() {
        let found = with(b"a\n\nb\n", ScanOptions::new().max_blank_lines(0));
        assert_eq!(found, vec![(2, 1, PeeveKind::TooManyBlankLines)]);
    }

    #[test]
    fn blank_line_at_end() {
        assert_eq!(
            peeves(b"abc\n\n"),
            vec![(2, 1, PeeveKind::BlankLineAtEndOfFile)]
        );
    }

    #[test]
    fn line_length_boundary() {
        let mut ok = vec![b'x'; 79];
        ok.push(b'\n');
        assert!(peeves(&ok).is_empty());

        let mut long = vec![b'x'; 80];
        long.push(b'\n');
        assert_eq!(peeves(&long), vec![(1, 81, PeeveKind::LineTooLong)]);
    }

    #[test]
    fn line_length_counts_expanded_tabs() {
        let mut line = vec![b'\t'; 10];
        line.extend_from_slice(b"x\n");
        assert_eq!(peeves_tabs(&line), vec![(1, 82, PeeveKind::LineTooLong)]);
    }

    #[test]
    fn max_line_width_is_configurable() {
        let found = with(b"abcdef\n", ScanOptions::new().max_line_width(5));
        assert_eq!(found, vec![(1, 7, PeeveKind::LineTooLong)]);
    }

    #[test]
    fn leading_tab_depends_on_option() {
        assert_eq!(
            peeves(b"\tfoo\n"),
            vec![(1, 1, PeeveKind::TabsNotAllowed)]
        );
        assert!(peeves_tabs(b"\tfoo\n").is_empty());
        assert!(peeves_tabs(b"\t\t  foo\n").is_empty());
    }

    #[test]
    fn tab_after_leading_spaces() {
        assert_eq!(
            peeves_tabs(b"  \tfoo\n"),
            vec![(1, 3, PeeveKind::TabForAlignment)]
        );
    }

    #[test]
    fn second_tab_after_spaces_is_not_leading() {
        assert_eq!(
            peeves_tabs(b"  \t\t\n"),
            vec![
                (1, 3, PeeveKind::TabForAlignment),
                (1, 9, PeeveKind::TabForAlignment),
                (1, 17, PeeveKind::WhitespaceAtEndOfLine),
            ]
        );
        assert_eq!(
            peeves_tabs(b"a\n \t\n"),
            vec![
                (2, 2, PeeveKind::TabForAlignment),
                (2, 9, PeeveKind::WhitespaceOnBlankLine),
                (2, 9, PeeveKind::BlankLineAtEndOfFile),
            ]
        );
    }

    #[test]
    fn interior_tab_columns() {
        assert_eq!(
            peeves_tabs(b"ab\tc\x07\n"),
            vec![
                (1, 3, PeeveKind::TabForAlignment),
                (1, 10, PeeveKind::AsciiControl),
            ]
        );
    }

    #[test]
    fn disallowed_tabs_never_report_alignment() {
        let found = peeves(b"ab\tc\n");
        assert_eq!(found, vec![(1, 3, PeeveKind::TabsNotAllowed)]);
    }

    #[test]
    fn trailing_whitespace_on_content_line() {
        assert_eq!(
            peeves(b"abc \n"),
            vec![(1, 5, PeeveKind::WhitespaceAtEndOfLine)]
        );
        assert_eq!(
            peeves_tabs(b"x\t\n"),
            vec![
                (1, 2, PeeveKind::TabForAlignment),
                (1, 9, PeeveKind::WhitespaceAtEndOfLine),
            ]
        );
    }

    #[test]
    fn whitespace_on_blank_line_is_not_trailing_whitespace() {
        let found = peeves(b"a\n \nb\n");
        assert_eq!(found, vec![(2, 2, PeeveKind::WhitespaceOnBlankLine)]);
        assert_eq!(count(&found, PeeveKind::WhitespaceAtEndOfLine), 0);
    }

    #[test]
    fn lone_tab_line() {
        assert_eq!(
            peeves(b"\t\n"),
            vec![
                (1, 1, PeeveKind::TabsNotAllowed),
                (1, 9, PeeveKind::BlankLineAtStartOfFile),
                (1, 9, PeeveKind::WhitespaceOnBlankLine),
                (1, 9, PeeveKind::BlankLineAtEndOfFile),
            ]
        );
    }

    #[test]
    fn final_line_without_newline_gets_line_checks() {
        assert_eq!(
            peeves(b"abc "),
            vec![
                (1, 5, PeeveKind::WhitespaceAtEndOfLine),
                (1, 5, PeeveKind::NoNewlineAtEndOfFile),
            ]
        );
        assert_eq!(
            peeves(b"a\n  "),
            vec![
                (2, 3, PeeveKind::WhitespaceOnBlankLine),
                (2, 3, PeeveKind::BlankLineAtEndOfFile),
                (2, 3, PeeveKind::NoNewlineAtEndOfFile),
            ]
        );
    }

    #[test]
    fn control_characters() {
        assert_eq!(peeves(b"\x0c\n"), vec![(1, 1, PeeveKind::FormFeed)]);
        assert_eq!(
            peeves(b"a\x00b\x7f\n"),
            vec![
                (1, 2, PeeveKind::AsciiControl),
                (1, 4, PeeveKind::AsciiControl),
            ]
        );
    }

    #[test]
    fn carriage_return_after_tab() {
        assert_eq!(
            peeves_tabs(b"\tx\r\n"),
            vec![(1, 10, PeeveKind::CarriageReturn)]
        );
    }

    #[test]
    fn crlf_lines_report_each_cr() {
        let found = peeves(b"one\r\ntwo\r\n");
        assert_eq!(
            found,
            vec![
                (1, 4, PeeveKind::CarriageReturn),
                (2, 4, PeeveKind::CarriageReturn),
            ]
        );
    }

    #[test]
    fn high_bit_bytes_pass_through() {
        assert!(peeves(b"caf\xc3\xa9\n").is_empty());
        assert!(peeves(b"\xff\xfe\n").is_empty());
    }

    #[test]
    fn peeves_are_ordered() {
        let input = b"\n\t x \r\n\x01\tab\t \n\n\n\n   \ny\x0c";
        for options in [ScanOptions::new(), ScanOptions::new().tabs_allowed(true)] {
            let found = with(input, options);
            assert!(!found.is_empty());
            for pair in found.windows(2) {
                assert!(
                    (pair[0].0, pair[0].1) <= (pair[1].0, pair[1].1),
                    "out of order: {:?}",
                    pair
                );
            }
        }
    }

    #[test]
    fn scanning_is_idempotent() {
        let input = b"  \tmixed \n\n\n\nend";
        let options = ScanOptions::new().tabs_allowed(true);
        assert_eq!(scan(input, &options), scan(input, &options));
    }
}
