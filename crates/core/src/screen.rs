//! Optional screen capabilities.
//!
//! The truncation operations in [`stack`](crate::stack) work on any screen
//! type. Two of them need more: truncating to a screen *value* needs
//! `PartialEq`, and truncating to a screen *identity* needs a stable id.
//! The former is expressed with the standard trait; the latter with
//! [`ScreenIdentity`]. Both operations exist under distinct names
//! (`*_to_screen` vs `*_to_id`), so a screen type may implement either
//! capability, or both, without ambiguity.

/// A screen type with a stable identity.
///
/// The id must remain constant for the lifetime of the screen value; it is
/// what makes "go back to *that* screen" well defined even when the screen's
/// other payload (titles, drafts, scroll offsets) has changed since it was
/// pushed.
pub trait ScreenIdentity {
    /// The stable identifier type.
    type Id: PartialEq;

    /// Returns the screen's stable identifier.
    fn id(&self) -> Self::Id;
}
