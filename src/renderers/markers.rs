//! Marker and box-drawing character sets for text output.

use super::NodeStatus;

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode { Self::Unicode } else { Self::Ascii }
    }
}

// ─── Markers ─────────────────────────────────────────────────────────────────

/// Status markers plus the few box pieces used to draw the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub current: char,
    pub visited: char,
    pub pending: char,
    pub unvisited: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    /// Edge arrow in the topology listing.
    pub edge: &'static str,
    /// Separator in the traversal order line.
    pub then: &'static str,
    /// Pointer at the top of the stack box.
    pub top: &'static str,
}

impl Markers {
    pub fn unicode() -> Self {
        Self {
            current: '●',
            visited: '✓',
            pending: '◆',
            unvisited: '○',
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            edge: "─►",
            then: " → ",
            top: "◄ top",
        }
    }

    pub fn ascii() -> Self {
        Self {
            current: '*',
            visited: '+',
            pending: 'o',
            unvisited: '.',
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            edge: "->",
            then: " -> ",
            top: "<- top",
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }

    pub fn status(&self, status: NodeStatus) -> char {
        match status {
            NodeStatus::Current => self.current,
            NodeStatus::Visited => self.visited,
            NodeStatus::Pending => self.pending,
            NodeStatus::Unvisited => self.unvisited,
        }
    }
}
