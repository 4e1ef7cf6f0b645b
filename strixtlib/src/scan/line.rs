//! Per-line whitespace bookkeeping and tab-expanded columns.

use crate::options::TAB_WIDTH;

/// Columns a tab at `column` (1-based) advances to reach the next tab stop.
pub fn tab_advance(column: usize) -> usize {
    TAB_WIDTH - ((column - 1) % TAB_WIDTH)
}

/// Where a tab sits relative to the line's leading whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPlacement {
    /// Continues the run of tabs at the very start of the line
    Leading,
    /// Anywhere else
    Misplaced,
}

/// Leading-whitespace partition of the current line.
///
/// The prefix is split, in this order, into tabs, then spaces, then any
/// further tabs or spaces ("misc"). Each counter only grows while the byte
/// being pushed sits exactly at the end of the prefix seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// Buffer offset of the line's first byte
    pub start: usize,
    pub leading_tabs: usize,
    pub leading_spaces: usize,
    pub misc_leading: usize,
}

impl LineState {
    pub fn starting_at(start: usize) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    pub fn offset_of(&self, buffer_offset: usize) -> usize {
        buffer_offset - self.start
    }

    fn tabs_and_spaces(&self) -> usize {
        self.leading_tabs + self.leading_spaces
    }

    /// Bytes classified as leading whitespace so far.
    pub fn leading_len(&self) -> usize {
        self.tabs_and_spaces() + self.misc_leading
    }

    pub fn push_tab(&mut self, offset_on_line: usize) -> TabPlacement {
        if offset_on_line == self.leading_tabs {
            self.leading_tabs += 1;
            return TabPlacement::Leading;
        }
        if offset_on_line == self.tabs_and_spaces() {
            self.misc_leading += 1;
        }
        TabPlacement::Misplaced
    }

    pub fn push_space(&mut self, offset_on_line: usize) {
        if offset_on_line == self.tabs_and_spaces() {
            self.leading_spaces += 1;
        } else if offset_on_line == self.leading_len() {
            self.misc_leading += 1;
        }
    }

    /// A line of `len` bytes is blank when all of it is leading whitespace.
    pub fn is_blank(&self, len: usize) -> bool {
        len == self.leading_len()
    }
}
