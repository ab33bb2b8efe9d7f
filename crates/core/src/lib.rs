//! Navigation route-stack manipulation utilities for declarative UI
//! frameworks.
//!
//! A host framework keeps the current navigation state as an ordered
//! sequence of [`Route`] entries, each pairing a screen value with the way
//! it was shown (pushed, sheet-presented, or cover-presented). This crate
//! edits that sequence in place through a [`StackEditor`]: appending entries
//! (push / present) and removing contiguous suffixes (go back / pop /
//! dismiss) by exact count, target index, or matching predicate.
//!
//! Rendering, animation, and state restoration are the host framework's
//! business; this crate never owns the stack and performs no I/O.
//!
//! # Example
//!
//! ```
//! use wayfarer_core::{Route, StackEditor};
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! enum Screen {
//!     Library,
//!     Book(u32),
//!     Search,
//! }
//!
//! let mut routes = vec![Route::Push(Screen::Library)];
//! let mut editor = StackEditor::new(&mut routes);
//!
//! editor.push(Screen::Book(12));
//! editor.present_sheet(Screen::Search, false);
//!
//! // Jump straight back to the library, whatever sits on top of it.
//! assert!(editor.go_back_to_screen(&Screen::Library));
//! assert_eq!(routes, vec![Route::Push(Screen::Library)]);
//! ```
//!
//! Operations taking a count or index fail fast with
//! [`NavigationError::OutOfRange`] instead of clamping; `pop*` and
//! `dismiss*` verify the presentation kind of the removed suffix and fail
//! with [`NavigationError::InvalidOperation`] in every build profile. A
//! failing operation always leaves the stack unchanged.
//!
//! Mutations emit `tracing` events at trace level (debug level for
//! failures); the crate installs no subscriber of its own.

pub mod error;
pub mod route;
pub mod screen;
pub mod stack;

pub use error::{EntryKind, NavigationError};
pub use route::{Route, RouteStyle};
pub use screen::ScreenIdentity;
pub use stack::StackEditor;
