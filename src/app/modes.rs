//! Input and view mode state types for the dashboard.
//!
//! This module defines the state machine enums that control user interaction
//! modes and list presentation. These types determine which keybindings are
//! active, how input is processed, and how the record list is rendered.
//!
//! # State Machine
//!
//! The application operates in one of four input modes:
//! - **Normal**: Default navigation and command mode
//! - **Search**: Active search with typing or result navigation focus
//! - **Category**: Digit keys toggle category filters
//! - **Feature**: Digit keys toggle feature filters
//!
//! View modes control how the filtered list is presented:
//! - **Table**: One row per record with fixed columns
//! - **Cards**: Multi-line block per record

/// Focus state within search mode.
///
/// Determines whether search input is being typed or search results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, enter to open the drawer, and / to return
    /// to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), 1-3 (tiers),
    /// c (category mode), f (feature mode), s/n/t (sort), v (view),
    /// enter (detail), y (export), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results.
    Search(SearchFocus),

    /// Category filter mode: digits 1-9 toggle categories.
    Category,

    /// Feature filter mode: digits 1-4 toggle MCP/CLI/OAuth/Webhooks.
    Feature,
}

/// Presentation mode for the filtered record list.
///
/// Both presentations consume the same filtered and sorted collection; they
/// differ only in how much of each record a screenful shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// One row per record: index, name, category, tier, score, feature badges.
    Table,

    /// Three-line block per record with description and freshness.
    Cards,
}

impl ViewMode {
    /// Returns the other presentation.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Cards,
            Self::Cards => Self::Table,
        }
    }
}
