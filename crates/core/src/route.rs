//! The route entry model.
//!
//! A [`Route`] combines a screen value with the way it was shown: pushed onto
//! a navigation stack, presented as a sheet, or presented as a full-screen
//! cover. [`RouteStyle`] is the presentation style on its own, detached from
//! the screen value, so callers can inspect or rebuild entries without
//! cloning screens.

use serde::{Deserialize, Serialize};

/// How a screen was, or should be, shown.
///
/// `Sheet` and `Cover` are modal presentations (dismiss semantics); `Push` is
/// a navigation-stack transition (back-button semantics). The
/// `embed_in_navigation_view` flag records whether a presented screen carries
/// its own navigation context, so that screens pushed on top of it land in
/// the right place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteStyle {
    /// Shown via a navigation-stack transition.
    Push,
    /// Shown as a modal sheet.
    Sheet {
        /// Whether the sheet hosts its own navigation context.
        embed_in_navigation_view: bool,
    },
    /// Shown as a full-screen modal cover.
    Cover {
        /// Whether the cover hosts its own navigation context.
        embed_in_navigation_view: bool,
    },
}

impl RouteStyle {
    /// Returns true for modal presentations (`Sheet` and `Cover`).
    pub fn is_presented(&self) -> bool {
        !matches!(self, RouteStyle::Push)
    }
}

/// One navigation-stack entry: a screen value plus its presentation style.
///
/// The generic `Screen` parameter is the caller's screen identifier type,
/// typically a small enum owned by a parent view model. `Route` places no
/// bounds on it; operations that need equality or stable identity state
/// their own bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route<Screen> {
    /// A screen shown via a navigation-stack transition.
    Push(Screen),
    /// A screen presented as a modal sheet.
    Sheet {
        /// The screen value.
        screen: Screen,
        /// Whether the sheet hosts its own navigation context.
        embed_in_navigation_view: bool,
    },
    /// A screen presented as a full-screen modal cover.
    Cover {
        /// The screen value.
        screen: Screen,
        /// Whether the cover hosts its own navigation context.
        embed_in_navigation_view: bool,
    },
}

impl<Screen> Route<Screen> {
    /// Builds a route from a screen value and a detached presentation style.
    pub fn from_parts(screen: Screen, style: RouteStyle) -> Self {
        match style {
            RouteStyle::Push => Route::Push(screen),
            RouteStyle::Sheet {
                embed_in_navigation_view,
            } => Route::Sheet {
                screen,
                embed_in_navigation_view,
            },
            RouteStyle::Cover {
                embed_in_navigation_view,
            } => Route::Cover {
                screen,
                embed_in_navigation_view,
            },
        }
    }

    /// Returns the screen value.
    pub fn screen(&self) -> &Screen {
        match self {
            Route::Push(screen)
            | Route::Sheet { screen, .. }
            | Route::Cover { screen, .. } => screen,
        }
    }

    /// Returns a mutable reference to the screen value.
    pub fn screen_mut(&mut self) -> &mut Screen {
        match self {
            Route::Push(screen)
            | Route::Sheet { screen, .. }
            | Route::Cover { screen, .. } => screen,
        }
    }

    /// Consumes the route, returning the screen value.
    pub fn into_screen(self) -> Screen {
        match self {
            Route::Push(screen)
            | Route::Sheet { screen, .. }
            | Route::Cover { screen, .. } => screen,
        }
    }

    /// Returns the presentation style, detached from the screen value.
    pub fn style(&self) -> RouteStyle {
        match *self {
            Route::Push(_) => RouteStyle::Push,
            Route::Sheet {
                embed_in_navigation_view,
                ..
            } => RouteStyle::Sheet {
                embed_in_navigation_view,
            },
            Route::Cover {
                embed_in_navigation_view,
                ..
            } => RouteStyle::Cover {
                embed_in_navigation_view,
            },
        }
    }

    /// Returns true for modal presentations (`Sheet` and `Cover`).
    pub fn is_presented(&self) -> bool {
        self.style().is_presented()
    }

    /// Whether the entry hosts its own navigation context.
    ///
    /// Always false for `Push`; a pushed screen lives inside whatever
    /// navigation context its presenter supplied.
    pub fn embed_in_navigation_view(&self) -> bool {
        match *self {
            Route::Push(_) => false,
            Route::Sheet {
                embed_in_navigation_view,
                ..
            }
            | Route::Cover {
                embed_in_navigation_view,
                ..
            } => embed_in_navigation_view,
        }
    }

    /// Transforms the screen value while keeping the presentation style.
    ///
    /// Useful when projecting a parent screen enum into a child
    /// coordinator's screen enum.
    pub fn map<T, F>(self, transform: F) -> Route<T>
    where
        F: FnOnce(Screen) -> T,
    {
        let style = self.style();
        Route::from_parts(transform(self.into_screen()), style)
    }
}
