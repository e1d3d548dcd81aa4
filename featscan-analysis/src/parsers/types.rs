//! Source positions attached to every occurrence.

use serde::{Deserialize, Serialize};

/// A point in the source. `line` is 1-based, `column` is a 0-based byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn from_ts_point(point: tree_sitter::Point) -> Self {
        Self {
            line: point.row as u32 + 1,
            column: point.column as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// Line/column location plus the byte range `[start, end)` it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Span {
    pub loc: SourceLocation,
    pub range: [usize; 2],
}

impl Span {
    pub fn from_ts_node(node: &tree_sitter::Node) -> Self {
        Self::covering(node, node)
    }

    /// Span from the start of `first` to the end of `last`.
    pub fn covering(first: &tree_sitter::Node, last: &tree_sitter::Node) -> Self {
        Self {
            loc: SourceLocation {
                start: Position::from_ts_point(first.start_position()),
                end: Position::from_ts_point(last.end_position()),
            },
            range: [first.start_byte(), last.end_byte()],
        }
    }

    pub fn start_offset(&self) -> usize {
        self.range[0]
    }

    pub fn end_offset(&self) -> usize {
        self.range[1]
    }

    /// The covered slice of `source`, if the range is in bounds.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.range[0]..self.range[1])
    }
}
