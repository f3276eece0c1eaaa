//! Stackdash: a terminal dashboard for comparing developer-tooling services.
//!
//! Stackdash renders a fixed catalog of service records (auth, database,
//! deploy, jobs, email, files, messaging, edge, code) as a keyboard-driven
//! terminal dashboard:
//! - Filtering by tier, category, feature flags, and free-text search
//! - Sorting by score, name, or tier in either direction
//! - A detail drawer for a single selected record
//! - Table and cards presentations over the same query results
//! - TOML-defined themes with truecolor ANSI output
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← crossterm, clap
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Cursor, selection
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │
//! │ (ui/)         │   │ (query/)      │
//! │ - Rendering   │   │ - Filtering   │
//! │ - Theming     │   │ - Sorting     │
//! │ - Components  │   │               │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog & Domain Layers                            │
//! │  - Immutable record collection (catalog/)           │
//! │  - Service model, error types (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Structured logs to rotating file                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Immutable record collection and aggregate metadata
//! - [`domain`]: Core domain types (`ServiceRecord`, errors)
//! - [`infrastructure`]: Platform paths and path expansion
//! - [`query`]: Pure filter and sort functions (the dashboard's core)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: File-based structured logging
//!
//! # Data Flow
//!
//! The record collection is loaded exactly once, ahead of any query
//! execution, and never mutated afterwards:
//!
//! ```text
//! catalog ──▶ filter_services ──▶ sort_services ──▶ view model ──▶ ANSI
//!                  ▲                   ▲
//!             FilterSpec           SortSpec        (written only by the
//!                                                   interaction handler)
//! ```
//!
//! All operations run to completion within one interaction turn; there is
//! no concurrency and no I/O in the query path.
//!
//! # Example
//!
//! ```rust
//! use stackdash::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! assert!(!state.visible.is_empty());
//!
//! // Narrow to tier 1 and move the cursor.
//! handle_event(&mut state, &Event::ToggleTier(1))?;
//! handle_event(&mut state, &Event::CursorDown)?;
//! assert!(state.visible.iter().all(|record| record.tier == 1));
//! # Ok::<(), stackdash::StackdashError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod query;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, ViewMode};
pub use catalog::Catalog;
pub use domain::{Result, ServiceRecord, StackdashError};
pub use query::{FilterSpec, SortDirection, SortKey, SortSpec};
pub use ui::Theme;

/// Runtime configuration assembled from the command line.
///
/// All fields are optional; an empty configuration renders the bundled
/// dataset with the default theme.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Path to a JSON dataset replacing the bundled one.
    ///
    /// The file must match the bundled dataset's layout and is validated
    /// against the catalog invariants at load time.
    pub data_file: Option<String>,

    /// Log level for file-based tracing.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    /// The `RUST_LOG` environment variable takes precedence.
    pub trace_level: Option<String>,
}

/// Initializes the dashboard state from configuration.
///
/// Loads the theme (custom file first, then built-in name, then default;
/// theme problems fall back to the default with a log line rather than
/// failing) and the catalog (user-supplied file or the bundled dataset),
/// and returns an [`AppState`] ready for event processing.
///
/// # Errors
///
/// Returns an error when the catalog cannot be loaded: unreadable data
/// file, malformed JSON, or an invariant violation.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing stackdash");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let catalog = match &config.data_file {
        Some(path) => Catalog::from_file(infrastructure::expand_tilde(path))?,
        None => Catalog::bundled()?,
    };

    tracing::debug!(
        services = catalog.len(),
        theme = %theme.name,
        "state initialized"
    );

    Ok(AppState::new(catalog, theme))
}
