//! Errors reported by the stack editor.
//!
//! Two classes of failure exist and only one of them lives here. "No matching
//! entry" is a soft failure reported through a boolean return with the stack
//! left untouched; it never produces a [`NavigationError`]. The variants
//! below cover contract violations: out-of-range counts and indices
//! (fail-fast, never clamped) and pop/dismiss calls whose removed suffix has
//! the wrong presentation kind. These checks run in every build profile.

use std::fmt;

/// The presentation kind of a stack entry, as seen by the suffix checks.
///
/// `pop` may only remove `Pushed` entries, `dismiss` only `Presented` ones
/// (sheets and covers alike).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Shown via a navigation-stack transition.
    Pushed,
    /// Shown as a modal sheet or full-screen cover.
    Presented,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Pushed => write!(f, "pushed"),
            EntryKind::Presented => write!(f, "presented"),
        }
    }
}

/// A contract violation in a stack-editing operation.
///
/// Every failing operation leaves the stack exactly as it was; the checks run
/// before any entry is removed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested count or target index does not fit the current stack.
    ///
    /// For count-based operations `requested` is the number of entries to
    /// remove; for index-based operations it is the target index. Both are
    /// rejected rather than clamped, so an impossible request surfaces at
    /// the call site instead of leaving the stack in a surprising shape.
    #[error("{operation}: requested {requested}, but the stack holds {len} entries")]
    OutOfRange {
        /// The operation that was attempted.
        operation: &'static str,
        /// The offending count or index.
        requested: usize,
        /// The stack length at the time of the call.
        len: usize,
    },

    /// A pop or dismiss would remove an entry of the wrong presentation kind.
    #[error(
        "{operation}: entry at index {index} is {found}, but every removed entry must be {expected}"
    )]
    InvalidOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// Index of the first offending entry.
        index: usize,
        /// The kind the operation requires.
        expected: EntryKind,
        /// The kind actually found.
        found: EntryKind,
    },
}
