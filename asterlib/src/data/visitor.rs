//! Line classifier for LOC counting.
//!
//! Every line of a file falls into exactly one of three categories:
//!
//! - **code**: anything that is neither a comment nor blank
//! - **comments**: lines starting with `//` or `#`, and every line of a
//!   `/* ... */` block
//! - **blanks**: whitespace-only lines
//!
//! Classification is purely textual. Lines are trimmed and matched on their
//! prefix/suffix; there is no lexer, so comment markers inside strings or
//! nested block comments are not understood.
//!
//! The only state carried from one line to the next is whether a block
//! comment is still open, modelled by [`ScanState`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::AsterError;
use crate::Result;

use super::stats::Locs;

/// Markers that turn the rest of a line into a comment.
pub const LINE_COMMENT_MARKERS: [&str; 2] = ["//", "#"];
/// Opens a block comment.
pub const BLOCK_COMMENT_OPEN: &str = "/*";
/// Closes a block comment when it ends a line.
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Category of a single line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

/// Scanner state between two lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Outside of any comment
    #[default]
    Normal,
    /// Inside a block comment that has not been closed yet
    InBlockComment,
}

impl ScanState {
    /// Classify one line and return the state for the next one.
    ///
    /// Inside a block comment every line is a comment; the block closes on a
    /// line ending with `*/`. Outside, line comments win over block openers,
    /// which win over blank lines. A block opener always enters the block,
    /// even when the same line ends with `*/`: one-line block comments are
    /// not detected, so the line after `/* note */` is a comment too.
    pub fn step(self, line: &str) -> (LineKind, ScanState) {
        let line = line.trim();

        match self {
            ScanState::InBlockComment => {
                let next = if line.ends_with(BLOCK_COMMENT_CLOSE) {
                    ScanState::Normal
                } else {
                    ScanState::InBlockComment
                };
                (LineKind::Comment, next)
            }
            ScanState::Normal => {
                if LINE_COMMENT_MARKERS.iter().any(|m| line.starts_with(m)) {
                    (LineKind::Comment, ScanState::Normal)
                } else if line.starts_with(BLOCK_COMMENT_OPEN) {
                    (LineKind::Comment, ScanState::InBlockComment)
                } else if line.is_empty() {
                    (LineKind::Blank, ScanState::Normal)
                } else {
                    (LineKind::Code, ScanState::Normal)
                }
            }
        }
    }
}

/// Accumulates line counts while walking through content line by line.
#[derive(Debug, Default)]
pub struct Visitor {
    state: ScanState,
    stats: Locs,
}

impl Visitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scanner state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Classify a single line (without its newline) and count it.
    pub fn visit_line(&mut self, line: &str) -> LineKind {
        let (kind, next) = self.state.step(line);
        self.state = next;

        match kind {
            LineKind::Code => self.stats.code += 1,
            LineKind::Comment => self.stats.comments += 1,
            LineKind::Blank => self.stats.blanks += 1,
        }

        kind
    }

    /// Visit every line of `content`.
    ///
    /// Content is split on `\n`. The empty tail after a final newline is not
    /// a line, so a file ending with `\n` gets no extra blank and empty
    /// content has no lines at all.
    pub fn visit_str(&mut self, content: &str) {
        for line in content.split_terminator('\n') {
            self.visit_line(line);
        }
    }

    /// Return the counts gathered so far.
    pub fn finish(self) -> Locs {
        self.stats
    }
}

/// Count code, comment and blank lines in a string.
///
/// # Example
///
/// ```rust
/// use asterlib::parse_string;
///
/// let locs = parse_string("// greet\nfn main() {}\n\n");
/// assert_eq!(locs.code, 1);
/// assert_eq!(locs.comments, 1);
/// assert_eq!(locs.blanks, 1);
/// ```
pub fn parse_string(content: &str) -> Locs {
    let mut visitor = Visitor::new();
    visitor.visit_str(content);
    visitor.finish()
}

/// Read a file and count its lines.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Locs> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| AsterError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let locs = parse_string(&content);
    debug!(
        path = %path.display(),
        code = locs.code,
        comments = locs.comments,
        blanks = locs.blanks,
        "classified file"
    );
    Ok(locs)
}
