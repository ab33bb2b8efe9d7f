//! The route stack editor.
//!
//! [`StackEditor`] wraps a mutable borrow of a caller-owned route stack
//! (`Vec<Route<Screen>>`, index 0 = root, last = topmost) and exposes two
//! symmetric families of operations:
//!
//! - growth: [`push`](StackEditor::push),
//!   [`present_sheet`](StackEditor::present_sheet),
//!   [`present_cover`](StackEditor::present_cover)
//! - truncation: `go_back*` (unconditional), `pop*` (removed suffix must be
//!   all pushed) and `dismiss*` (removed suffix must be all presented), each
//!   parameterized by exact count, target index, or a matching predicate.
//!
//! Truncation only ever removes a contiguous suffix; the stack is never
//! reordered and nothing is removed from the middle. Every operation is a
//! synchronous in-place mutation, and an operation that fails leaves the
//! stack exactly as it was.
//!
//! # Contract
//!
//! Out-of-range counts and indices fail fast with
//! [`NavigationError::OutOfRange`]; they are never clamped. A count of zero
//! is an explicit no-op. Predicate misses are soft failures reported through
//! the boolean return, with the stack left unchanged.
//!
//! The editor does not validate growth: whether the caller is in a context
//! where a push can actually be rendered is the host framework's concern.

use crate::error::{EntryKind, NavigationError};
use crate::route::{Route, RouteStyle};
use crate::screen::ScreenIdentity;

/// Suffix-only editing operations over a borrowed route stack.
///
/// The editor holds the stack's only mutable borrow for its lifetime, so
/// exclusive access is enforced statically; the crate performs no locking
/// and makes no cross-thread guarantee.
///
/// # Example
///
/// ```
/// use wayfarer_core::{Route, StackEditor};
///
/// let mut routes: Vec<Route<&str>> = vec![Route::Push("home")];
/// let mut editor = StackEditor::new(&mut routes);
///
/// editor.push("feed");
/// editor.present_sheet("compose", false);
/// assert!(editor.go_back_to_screen(&"home"));
/// assert_eq!(routes.len(), 1);
/// ```
#[derive(Debug)]
pub struct StackEditor<'a, Screen> {
    routes: &'a mut Vec<Route<Screen>>,
}

impl<'a, Screen> StackEditor<'a, Screen> {
    /// Wraps a caller-owned route stack for editing.
    pub fn new(routes: &'a mut Vec<Route<Screen>>) -> StackEditor<'a, Screen> {
        StackEditor { routes }
    }

    /// Returns the number of entries on the stack.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the stack holds no entries.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the topmost (most recently added) entry, if any.
    pub fn top(&self) -> Option<&Route<Screen>> {
        self.routes.last()
    }

    // ------------------------------------------------------------------
    // Growth
    // ------------------------------------------------------------------

    /// Appends a pushed screen.
    pub fn push(&mut self, screen: Screen) {
        self.append(Route::Push(screen));
    }

    /// Appends a sheet-presented screen.
    pub fn present_sheet(&mut self, screen: Screen, embed_in_navigation_view: bool) {
        self.append(Route::Sheet {
            screen,
            embed_in_navigation_view,
        });
    }

    /// Appends a cover-presented screen.
    pub fn present_cover(&mut self, screen: Screen, embed_in_navigation_view: bool) {
        self.append(Route::Cover {
            screen,
            embed_in_navigation_view,
        });
    }

    /// Appends a screen with an explicit presentation style.
    pub fn present(&mut self, screen: Screen, style: RouteStyle) {
        self.append(Route::from_parts(screen, style));
    }

    #[inline]
    fn append(&mut self, route: Route<Screen>) {
        let presented = route.is_presented();
        self.routes.push(route);
        tracing::trace!(
            len = self.routes.len(),
            presented,
            "appended route stack entry"
        );
    }

    // ------------------------------------------------------------------
    // go_back: unconditional truncation
    // ------------------------------------------------------------------

    /// Removes the last `count` entries, whatever their presentation kind.
    ///
    /// A `count` of zero is a no-op.
    ///
    /// # Errors
    ///
    /// [`NavigationError::OutOfRange`] if `count` exceeds the stack length;
    /// the stack is left unchanged.
    pub fn go_back(&mut self, count: usize) -> Result<(), NavigationError> {
        self.truncate_by("go_back", count, None)
    }

    /// Removes trailing entries so that `index` becomes the topmost position.
    ///
    /// # Errors
    ///
    /// [`NavigationError::OutOfRange`] if `index` does not name an existing
    /// entry; the stack is left unchanged.
    pub fn go_back_to_index(&mut self, index: usize) -> Result<(), NavigationError> {
        self.truncate_to_index("go_back_to_index", index, None)
    }

    /// Removes everything above the root entry.
    ///
    /// # Errors
    ///
    /// [`NavigationError::OutOfRange`] if the stack is empty: there is no
    /// root to retain.
    pub fn go_back_to_root(&mut self) -> Result<(), NavigationError> {
        self.truncate_to_index("go_back_to_root", 0, None)
    }

    /// Truncates to the last (topmost) entry satisfying `predicate`.
    ///
    /// The scan runs right to left, so when several entries match, the most
    /// recently added one wins and becomes the new topmost entry. Returns
    /// true on a match; on a miss the stack is left unchanged and false is
    /// returned.
    pub fn go_back_to<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&Route<Screen>) -> bool,
    {
        let Some(index) = self.routes.iter().rposition(predicate) else {
            tracing::debug!(
                operation = "go_back_to",
                len = self.routes.len(),
                "no matching entry, stack left unchanged"
            );
            return false;
        };

        self.routes.truncate(index + 1);
        tracing::trace!(
            operation = "go_back_to",
            len = self.routes.len(),
            "truncated route stack"
        );
        true
    }

    /// Like [`go_back_to`](StackEditor::go_back_to), testing the screen
    /// value instead of the whole entry.
    pub fn go_back_to_screen_where<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&Screen) -> bool,
    {
        self.go_back_to(|route| predicate(route.screen()))
    }

    /// Truncates to the last entry whose screen equals `screen`.
    pub fn go_back_to_screen(&mut self, screen: &Screen) -> bool
    where
        Screen: PartialEq,
    {
        self.go_back_to(|route| route.screen() == screen)
    }

    /// Truncates to the last entry whose screen carries the given identity.
    pub fn go_back_to_id(&mut self, id: &Screen::Id) -> bool
    where
        Screen: ScreenIdentity,
    {
        self.go_back_to(|route| route.screen().id() == *id)
    }

    // ------------------------------------------------------------------
    // pop: truncation over a pushed suffix
    // ------------------------------------------------------------------

    /// Removes the last `count` entries, all of which must be pushed.
    ///
    /// A `count` of zero is a no-op.
    ///
    /// # Errors
    ///
    /// [`NavigationError::OutOfRange`] if `count` exceeds the stack length,
    /// [`NavigationError::InvalidOperation`] if the removed suffix would
    /// contain a presented entry. Either way the stack is left unchanged.
    pub fn pop(&mut self, count: usize) -> Result<(), NavigationError> {
        self.truncate_by("pop", count, Some(EntryKind::Pushed))
    }

    /// Pops trailing entries so that `index` becomes the topmost position.
    ///
    /// # Errors
    ///
    /// Same contract as [`pop`](StackEditor::pop), plus
    /// [`NavigationError::OutOfRange`] if `index` does not name an existing
    /// entry.
    pub fn pop_to_index(&mut self, index: usize) -> Result<(), NavigationError> {
        self.truncate_to_index("pop_to_index", index, Some(EntryKind::Pushed))
    }

    /// Pops everything above the root entry.
    pub fn pop_to_root(&mut self) -> Result<(), NavigationError> {
        self.truncate_to_index("pop_to_root", 0, Some(EntryKind::Pushed))
    }

    /// Pops to the last (topmost) entry satisfying `predicate`.
    ///
    /// Returns `Ok(false)` on a predicate miss with the stack unchanged.
    ///
    /// # Errors
    ///
    /// [`NavigationError::InvalidOperation`] if a match exists but the
    /// entries above it are not all pushed; the stack is left unchanged.
    pub fn pop_to<F>(&mut self, predicate: F) -> Result<bool, NavigationError>
    where
        F: FnMut(&Route<Screen>) -> bool,
    {
        self.truncate_to_match("pop_to", Some(EntryKind::Pushed), predicate)
    }

    /// Like [`pop_to`](StackEditor::pop_to), testing the screen value
    /// instead of the whole entry.
    pub fn pop_to_screen_where<F>(&mut self, mut predicate: F) -> Result<bool, NavigationError>
    where
        F: FnMut(&Screen) -> bool,
    {
        self.truncate_to_match("pop_to_screen_where", Some(EntryKind::Pushed), |route| {
            predicate(route.screen())
        })
    }

    /// Pops to the last entry whose screen equals `screen`.
    pub fn pop_to_screen(&mut self, screen: &Screen) -> Result<bool, NavigationError>
    where
        Screen: PartialEq,
    {
        self.truncate_to_match("pop_to_screen", Some(EntryKind::Pushed), |route| {
            route.screen() == screen
        })
    }

    /// Pops to the last entry whose screen carries the given identity.
    pub fn pop_to_id(&mut self, id: &Screen::Id) -> Result<bool, NavigationError>
    where
        Screen: ScreenIdentity,
    {
        self.truncate_to_match("pop_to_id", Some(EntryKind::Pushed), |route| {
            route.screen().id() == *id
        })
    }

    // ------------------------------------------------------------------
    // dismiss: truncation over a presented suffix
    // ------------------------------------------------------------------

    /// Removes the last `count` entries, all of which must be presented
    /// (sheet or cover).
    ///
    /// A `count` of zero is a no-op.
    ///
    /// # Errors
    ///
    /// [`NavigationError::OutOfRange`] if `count` exceeds the stack length,
    /// [`NavigationError::InvalidOperation`] if the removed suffix would
    /// contain a pushed entry. Either way the stack is left unchanged.
    pub fn dismiss(&mut self, count: usize) -> Result<(), NavigationError> {
        self.truncate_by("dismiss", count, Some(EntryKind::Presented))
    }

    /// Dismisses trailing entries so that `index` becomes the topmost
    /// position.
    ///
    /// # Errors
    ///
    /// Same contract as [`dismiss`](StackEditor::dismiss), plus
    /// [`NavigationError::OutOfRange`] if `index` does not name an existing
    /// entry.
    pub fn dismiss_to_index(&mut self, index: usize) -> Result<(), NavigationError> {
        self.truncate_to_index("dismiss_to_index", index, Some(EntryKind::Presented))
    }

    /// Dismisses everything above the root entry.
    pub fn dismiss_to_root(&mut self) -> Result<(), NavigationError> {
        self.truncate_to_index("dismiss_to_root", 0, Some(EntryKind::Presented))
    }

    /// Dismisses to the last (topmost) entry satisfying `predicate`.
    ///
    /// Returns `Ok(false)` on a predicate miss with the stack unchanged.
    ///
    /// # Errors
    ///
    /// [`NavigationError::InvalidOperation`] if a match exists but the
    /// entries above it are not all presented; the stack is left unchanged.
    pub fn dismiss_to<F>(&mut self, predicate: F) -> Result<bool, NavigationError>
    where
        F: FnMut(&Route<Screen>) -> bool,
    {
        self.truncate_to_match("dismiss_to", Some(EntryKind::Presented), predicate)
    }

    /// Like [`dismiss_to`](StackEditor::dismiss_to), testing the screen
    /// value instead of the whole entry.
    pub fn dismiss_to_screen_where<F>(&mut self, mut predicate: F) -> Result<bool, NavigationError>
    where
        F: FnMut(&Screen) -> bool,
    {
        self.truncate_to_match(
            "dismiss_to_screen_where",
            Some(EntryKind::Presented),
            |route| predicate(route.screen()),
        )
    }

    /// Dismisses to the last entry whose screen equals `screen`.
    pub fn dismiss_to_screen(&mut self, screen: &Screen) -> Result<bool, NavigationError>
    where
        Screen: PartialEq,
    {
        self.truncate_to_match("dismiss_to_screen", Some(EntryKind::Presented), |route| {
            route.screen() == screen
        })
    }

    /// Dismisses to the last entry whose screen carries the given identity.
    pub fn dismiss_to_id(&mut self, id: &Screen::Id) -> Result<bool, NavigationError>
    where
        Screen: ScreenIdentity,
    {
        self.truncate_to_match("dismiss_to_id", Some(EntryKind::Presented), |route| {
            route.screen().id() == *id
        })
    }

    // ------------------------------------------------------------------
    // Shared truncation plumbing
    // ------------------------------------------------------------------

    /// Removes the last `count` entries after validating the request.
    ///
    /// When `expected` is set, every entry in the removed suffix must be of
    /// that kind. The checks run before anything is removed, so a failing
    /// call leaves the stack untouched.
    fn truncate_by(
        &mut self,
        operation: &'static str,
        count: usize,
        expected: Option<EntryKind>,
    ) -> Result<(), NavigationError> {
        if count == 0 {
            return Ok(());
        }

        let len = self.routes.len();
        if count > len {
            tracing::debug!(operation, count, len, "truncation count out of range");
            return Err(NavigationError::OutOfRange {
                operation,
                requested: count,
                len,
            });
        }

        if let Some(expected) = expected {
            self.check_suffix_kind(operation, len - count, expected)?;
        }

        self.routes.truncate(len - count);
        tracing::trace!(
            operation,
            removed = count,
            len = self.routes.len(),
            "truncated route stack"
        );

        Ok(())
    }

    #[inline]
    fn truncate_to_index(
        &mut self,
        operation: &'static str,
        index: usize,
        expected: Option<EntryKind>,
    ) -> Result<(), NavigationError> {
        let len = self.routes.len();
        if index >= len {
            tracing::debug!(operation, index, len, "target index out of range");
            return Err(NavigationError::OutOfRange {
                operation,
                requested: index,
                len,
            });
        }

        self.truncate_by(operation, len - (index + 1), expected)
    }

    #[inline]
    fn truncate_to_match<F>(
        &mut self,
        operation: &'static str,
        expected: Option<EntryKind>,
        predicate: F,
    ) -> Result<bool, NavigationError>
    where
        F: FnMut(&Route<Screen>) -> bool,
    {
        let Some(index) = self.routes.iter().rposition(predicate) else {
            tracing::debug!(
                operation,
                len = self.routes.len(),
                "no matching entry, stack left unchanged"
            );
            return Ok(false);
        };

        self.truncate_to_index(operation, index, expected)?;
        Ok(true)
    }

    /// Verifies that every entry from `start` to the top is of `expected`
    /// kind, reporting the first offender.
    fn check_suffix_kind(
        &self,
        operation: &'static str,
        start: usize,
        expected: EntryKind,
    ) -> Result<(), NavigationError> {
        for (offset, route) in self.routes[start..].iter().enumerate() {
            let found = if route.is_presented() {
                EntryKind::Presented
            } else {
                EntryKind::Pushed
            };

            if found != expected {
                tracing::debug!(
                    operation,
                    index = start + offset,
                    %expected,
                    %found,
                    "suffix kind check failed"
                );
                return Err(NavigationError::InvalidOperation {
                    operation,
                    index: start + offset,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Screen {
        Home,
        Feed,
        Article(u32),
        Compose,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Draft {
        id: u32,
        body: &'static str,
    }

    impl ScreenIdentity for Draft {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn pushed<S>(screen: S) -> Route<S> {
        Route::Push(screen)
    }

    fn sheet<S>(screen: S) -> Route<S> {
        Route::Sheet {
            screen,
            embed_in_navigation_view: false,
        }
    }

    fn cover<S>(screen: S) -> Route<S> {
        Route::Cover {
            screen,
            embed_in_navigation_view: false,
        }
    }

    /// The worked example from the editor's contract:
    /// [Push(Home), Sheet(Feed), Push(Article(1)), Cover(Compose)].
    fn mixed_stack() -> Vec<Route<Screen>> {
        vec![
            pushed(Screen::Home),
            sheet(Screen::Feed),
            pushed(Screen::Article(1)),
            cover(Screen::Compose),
        ]
    }

    #[test]
    fn growth_appends_in_navigation_order() {
        let mut routes = Vec::new();
        let mut editor = StackEditor::new(&mut routes);

        editor.push(Screen::Home);
        editor.present_sheet(Screen::Feed, true);
        editor.present_cover(Screen::Compose, false);

        assert_eq!(routes.len(), 3);
        assert_eq!(routes[0], pushed(Screen::Home));
        assert_eq!(
            routes[1],
            Route::Sheet {
                screen: Screen::Feed,
                embed_in_navigation_view: true,
            }
        );
        assert_eq!(routes[2], cover(Screen::Compose));
    }

    #[test]
    fn present_with_explicit_style() {
        let mut routes = Vec::new();
        let mut editor = StackEditor::new(&mut routes);

        editor.present(
            Screen::Feed,
            RouteStyle::Sheet {
                embed_in_navigation_view: true,
            },
        );

        assert!(routes[0].is_presented());
        assert!(routes[0].embed_in_navigation_view());
    }

    #[test]
    fn top_and_len_track_the_stack() {
        let mut routes = mixed_stack();
        let editor = StackEditor::new(&mut routes);

        assert_eq!(editor.len(), 4);
        assert!(!editor.is_empty());
        assert_eq!(editor.top(), Some(&cover(Screen::Compose)));
    }

    #[test]
    fn go_back_removes_exactly_the_trailing_count() {
        let mut routes = mixed_stack();
        let expected = routes[..2].to_vec();

        StackEditor::new(&mut routes).go_back(2).unwrap();

        assert_eq!(routes, expected);
    }

    #[test]
    fn go_back_zero_is_a_noop() {
        let mut routes = mixed_stack();
        let before = routes.clone();

        StackEditor::new(&mut routes).go_back(0).unwrap();

        assert_eq!(routes, before);
    }

    #[test]
    fn go_back_full_length_empties_the_stack() {
        let mut routes = mixed_stack();

        StackEditor::new(&mut routes).go_back(4).unwrap();

        assert!(routes.is_empty());
    }

    #[test]
    fn go_back_beyond_length_fails_fast() {
        let mut routes = mixed_stack();
        let before = routes.clone();

        let err = StackEditor::new(&mut routes).go_back(5).unwrap_err();

        assert_eq!(
            err,
            NavigationError::OutOfRange {
                operation: "go_back",
                requested: 5,
                len: 4,
            }
        );
        assert_eq!(routes, before);
    }

    #[test]
    fn go_back_to_index_makes_the_index_topmost() {
        let mut routes = mixed_stack();

        StackEditor::new(&mut routes).go_back_to_index(1).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(*routes.last().unwrap(), sheet(Screen::Feed));
    }

    #[test]
    fn go_back_to_index_out_of_range_fails_fast() {
        let mut routes = mixed_stack();
        let before = routes.clone();

        let err = StackEditor::new(&mut routes)
            .go_back_to_index(4)
            .unwrap_err();

        assert!(matches!(err, NavigationError::OutOfRange { .. }));
        assert_eq!(routes, before);
    }

    #[test]
    fn go_back_to_root_retains_only_the_root() {
        let mut routes = mixed_stack();

        StackEditor::new(&mut routes).go_back_to_root().unwrap();

        assert_eq!(routes, vec![pushed(Screen::Home)]);
    }

    #[test]
    fn go_back_to_root_on_empty_stack_is_out_of_range() {
        let mut routes: Vec<Route<Screen>> = Vec::new();

        let err = StackEditor::new(&mut routes).go_back_to_root().unwrap_err();

        assert_eq!(
            err,
            NavigationError::OutOfRange {
                operation: "go_back_to_root",
                requested: 0,
                len: 0,
            }
        );
    }

    #[test]
    fn go_back_to_truncates_to_the_topmost_match() {
        // Finds Push(Article(1)), the topmost pushed entry, not Push(Home).
        let mut routes = mixed_stack();

        let matched = StackEditor::new(&mut routes).go_back_to(|route| !route.is_presented());

        assert!(matched);
        assert_eq!(
            routes,
            vec![
                pushed(Screen::Home),
                sheet(Screen::Feed),
                pushed(Screen::Article(1)),
            ]
        );
    }

    #[test]
    fn go_back_to_miss_leaves_the_stack_unchanged() {
        let mut routes = mixed_stack();
        let before = routes.clone();

        let matched = StackEditor::new(&mut routes)
            .go_back_to(|route| *route.screen() == Screen::Compose && !route.is_presented());

        assert!(!matched);
        assert_eq!(routes, before);
    }

    #[test]
    fn go_back_to_prefers_the_most_recent_of_several_matches() {
        let mut routes = vec![
            pushed(Screen::Article(1)),
            pushed(Screen::Feed),
            pushed(Screen::Article(2)),
            pushed(Screen::Compose),
        ];

        let matched = StackEditor::new(&mut routes)
            .go_back_to_screen_where(|screen| matches!(screen, Screen::Article(_)));

        assert!(matched);
        assert_eq!(routes.len(), 3);
        assert_eq!(*routes.last().unwrap(), pushed(Screen::Article(2)));
    }

    #[test]
    fn push_then_go_back_to_screen_round_trips() {
        let mut routes = mixed_stack();
        let mut editor = StackEditor::new(&mut routes);

        editor.push(Screen::Article(9));
        let matched = editor.go_back_to_screen(&Screen::Article(9));

        assert!(matched);
        assert_eq!(routes.len(), 5);
        assert_eq!(*routes.last().unwrap(), pushed(Screen::Article(9)));
    }

    #[test]
    fn go_back_to_id_matches_on_identity_not_payload() {
        let mut routes = vec![
            pushed(Draft { id: 1, body: "a" }),
            pushed(Draft { id: 2, body: "b" }),
            pushed(Draft { id: 1, body: "edited" }),
            pushed(Draft { id: 3, body: "c" }),
        ];

        let matched = StackEditor::new(&mut routes).go_back_to_id(&1);

        assert!(matched);
        // The topmost id-1 entry wins, whatever its body says now.
        assert_eq!(routes.len(), 3);
        assert_eq!(routes.last().unwrap().screen().body, "edited");
    }

    #[test]
    fn pop_equals_go_back_over_a_pushed_suffix() {
        let mut popped = vec![
            pushed(Screen::Home),
            pushed(Screen::Feed),
            pushed(Screen::Article(1)),
        ];
        let mut went_back = popped.clone();

        StackEditor::new(&mut popped).pop(2).unwrap();
        StackEditor::new(&mut went_back).go_back(2).unwrap();

        assert_eq!(popped, went_back);
    }

    #[test]
    fn pop_rejects_a_presented_entry_in_the_suffix() {
        let mut routes = mixed_stack();
        let before = routes.clone();

        let err = StackEditor::new(&mut routes).pop(2).unwrap_err();

        assert_eq!(
            err,
            NavigationError::InvalidOperation {
                operation: "pop",
                index: 3,
                expected: EntryKind::Pushed,
                found: EntryKind::Presented,
            }
        );
        assert_eq!(routes, before);
    }

    #[test]
    fn pop_to_root_on_a_single_entry_is_a_noop() {
        let mut routes = vec![pushed(Screen::Home)];

        StackEditor::new(&mut routes).pop_to_root().unwrap();

        assert_eq!(routes, vec![pushed(Screen::Home)]);
    }

    #[test]
    fn pop_to_screen_miss_is_a_soft_failure() {
        let mut routes = vec![pushed(Screen::Home), pushed(Screen::Feed)];
        let before = routes.clone();

        let matched = StackEditor::new(&mut routes)
            .pop_to_screen(&Screen::Compose)
            .unwrap();

        assert!(!matched);
        assert_eq!(routes, before);
    }

    #[test]
    fn pop_to_fails_when_the_suffix_above_the_match_is_presented() {
        let mut routes = vec![
            pushed(Screen::Home),
            pushed(Screen::Feed),
            sheet(Screen::Compose),
        ];
        let before = routes.clone();

        let err = StackEditor::new(&mut routes)
            .pop_to_screen(&Screen::Home)
            .unwrap_err();

        assert!(matches!(
            err,
            NavigationError::InvalidOperation {
                operation: "pop_to_screen",
                index: 2,
                ..
            }
        ));
        assert_eq!(routes, before);
    }

    #[test]
    fn pop_to_id_removes_the_pushed_suffix_above_the_match() {
        let mut routes = vec![
            pushed(Draft { id: 1, body: "a" }),
            pushed(Draft { id: 2, body: "b" }),
            pushed(Draft { id: 3, body: "c" }),
        ];

        let matched = StackEditor::new(&mut routes).pop_to_id(&1).unwrap();

        assert!(matched);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].screen().id, 1);
    }

    #[test]
    fn dismiss_removes_a_presented_suffix() {
        let mut routes = vec![
            pushed(Screen::Home),
            sheet(Screen::Feed),
            cover(Screen::Compose),
        ];

        StackEditor::new(&mut routes).dismiss(2).unwrap();

        assert_eq!(routes, vec![pushed(Screen::Home)]);
    }

    #[test]
    fn dismiss_default_single_entry() {
        let mut routes = vec![pushed(Screen::Home), sheet(Screen::Compose)];

        StackEditor::new(&mut routes).dismiss(1).unwrap();

        assert_eq!(routes, vec![pushed(Screen::Home)]);
    }

    #[test]
    fn dismiss_to_index_rejects_a_mixed_suffix() {
        // dismiss_to_index(0) over [Push, Sheet, Push, Cover] would have to
        // remove Push(Article(1)) at index 2, which is not presented.
        let mut routes = mixed_stack();
        let before = routes.clone();

        let err = StackEditor::new(&mut routes)
            .dismiss_to_index(0)
            .unwrap_err();

        assert_eq!(
            err,
            NavigationError::InvalidOperation {
                operation: "dismiss_to_index",
                index: 2,
                expected: EntryKind::Presented,
                found: EntryKind::Pushed,
            }
        );
        assert_eq!(routes, before);
    }

    #[test]
    fn dismiss_to_truncates_to_the_topmost_match() {
        let mut routes = vec![
            pushed(Screen::Home),
            sheet(Screen::Feed),
            sheet(Screen::Compose),
        ];

        let matched = StackEditor::new(&mut routes)
            .dismiss_to_screen_where(|screen| *screen == Screen::Feed)
            .unwrap();

        assert!(matched);
        assert_eq!(routes, vec![pushed(Screen::Home), sheet(Screen::Feed)]);
    }

    #[test]
    fn dismiss_to_miss_is_a_soft_failure() {
        let mut routes = mixed_stack();
        let before = routes.clone();

        let matched = StackEditor::new(&mut routes)
            .dismiss_to(|route| *route.screen() == Screen::Article(99))
            .unwrap();

        assert!(!matched);
        assert_eq!(routes, before);
    }

    #[test]
    fn dismiss_count_beyond_length_fails_fast() {
        let mut routes = vec![sheet(Screen::Feed)];

        let err = StackEditor::new(&mut routes).dismiss(2).unwrap_err();

        assert_eq!(
            err,
            NavigationError::OutOfRange {
                operation: "dismiss",
                requested: 2,
                len: 1,
            }
        );
    }

    #[test]
    fn dismiss_to_id_requires_a_presented_suffix() {
        let mut routes = vec![
            sheet(Draft { id: 1, body: "a" }),
            sheet(Draft { id: 2, body: "b" }),
            pushed(Draft { id: 3, body: "c" }),
        ];
        let before = routes.clone();

        let err = StackEditor::new(&mut routes).dismiss_to_id(&1).unwrap_err();

        assert!(matches!(
            err,
            NavigationError::InvalidOperation { index: 2, .. }
        ));
        assert_eq!(routes, before);
    }
}
