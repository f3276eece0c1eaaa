//! Terminal shim and entry point.
//!
//! This module provides the thin integration layer between the stackdash
//! library and the terminal: command line parsing, raw mode and alternate
//! screen management, key event mapping, and action execution.
//!
//! # Lifecycle
//!
//! 1. **Parse**: read command line flags into [`Config`]
//! 2. **Init**: set up file-based tracing, load catalog and theme
//! 3. **Loop**: render a frame, wait for a key event, translate it to a
//!    library [`Event`] based on the current mode, let [`handle_event`]
//!    mutate state, execute returned actions
//! 4. **Restore**: leave the alternate screen and disable raw mode, also
//!    on error paths
//!
//! # Event Mapping
//!
//! Terminal keys are translated to library events per input mode:
//!
//! - Normal: `j`/`k` move, `Enter` opens the drawer, `/` searches,
//!   `1`-`3` toggle tiers, `c`/`f` enter category/feature mode,
//!   `s`/`n`/`t` sort, `v` toggles the presentation, `y` exports,
//!   `Esc` clears all filters, `q` quits
//! - Search (typing): characters edit the query, `Tab` moves focus to the
//!   results, `Esc` exits search
//! - Search (navigating): `j`/`k` move, `/` returns to the query,
//!   `Esc` exits search
//! - Category mode: digits `1`-`9` toggle categories, `Esc`/`c` leave
//! - Feature mode: digits `1`-`4` toggle MCP/CLI/OAuth/Webhooks,
//!   `Esc`/`f` leave
//! - Drawer open: `Esc`/`q` close, `y` exports
//! - `Ctrl+n`/`Ctrl+p` move the cursor in every mode

use std::io::Write;

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use stackdash::app::FEATURE_FILTERS;
use stackdash::domain::Category;
use stackdash::query::SortKey;
use stackdash::{
    handle_event, initialize, ui, Action, AppState, Config, Event, InputMode, Result, SearchFocus,
};

/// Compare developer-tooling services in the terminal.
#[derive(Debug, Parser)]
#[command(name = "stackdash", version, about)]
struct Cli {
    /// Built-in theme name (catppuccin-mocha, catppuccin-latte,
    /// catppuccin-frappe, catppuccin-macchiato).
    #[arg(long)]
    theme: Option<String>,

    /// Path to a custom TOML theme file (overrides --theme).
    #[arg(long)]
    theme_file: Option<String>,

    /// Path to a JSON dataset replacing the bundled one.
    #[arg(long)]
    data: Option<String>,

    /// Log level for the file-based log (trace, debug, info, warn, error).
    #[arg(long)]
    trace_level: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("stackdash: {e}");
        std::process::exit(1);
    }
}

/// Parses flags, initializes state, and drives the terminal session.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config {
        theme_name: cli.theme,
        theme_file: cli.theme_file,
        data_file: cli.data,
        trace_level: cli.trace_level,
    };

    stackdash::observability::init_tracing(&config);
    let mut state = initialize(&config)?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(&mut state);

    // Always restore the terminal, even when the loop errored.
    let restore = execute!(stdout, Show, LeaveAlternateScreen)
        .map_err(Into::into)
        .and_then(|()| disable_raw_mode().map_err(Into::into));

    result.and(restore)
}

/// Renders frames and processes key events until a quit action arrives.
fn event_loop(state: &mut AppState) -> Result<()> {
    let mut stdout = std::io::stdout();

    loop {
        let (cols, rows) = crossterm::terminal::size()?;
        ui::render(state, rows as usize, cols as usize);
        stdout.flush()?;

        match event::read()? {
            event::Event::Key(key) if key.kind != KeyEventKind::Release => {
                let Some(our_event) = map_key_event(state, &key) else {
                    continue;
                };

                match handle_event(state, &our_event) {
                    Ok((_redraw, actions)) => {
                        for action in actions {
                            if execute_action(state, &action) {
                                return Ok(());
                            }
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "error handling event");
                    }
                }
            }
            event::Event::Resize(..) => {
                // Next loop iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}

/// Maps a terminal key event to a library event, honoring the current mode.
#[allow(clippy::too_many_lines)]
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    tracing::trace!(code = ?key.code, "key event");

    if key.code == KeyCode::Char('n') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::CursorDown);
    }
    if key.code == KeyCode::Char('p') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::CursorUp);
    }

    // The drawer swallows everything except close and export.
    if state.selected.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Event::CloseDetail),
            KeyCode::Char('y') => Some(Event::ExportSelected),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Normal => Some(match key.code {
            KeyCode::Down | KeyCode::Char('j') => Event::CursorDown,
            KeyCode::Up | KeyCode::Char('k') => Event::CursorUp,
            KeyCode::Enter => Event::OpenDetail,
            KeyCode::Esc => Event::Escape,
            KeyCode::Char('q') => Event::Quit,
            KeyCode::Char('/') => Event::SearchMode,
            KeyCode::Char('1') => Event::ToggleTier(1),
            KeyCode::Char('2') => Event::ToggleTier(2),
            KeyCode::Char('3') => Event::ToggleTier(3),
            KeyCode::Char('c') => Event::CategoryMode,
            KeyCode::Char('f') => Event::FeatureMode,
            KeyCode::Char('s') => Event::SortBy(SortKey::Score),
            KeyCode::Char('n') => Event::SortBy(SortKey::Name),
            KeyCode::Char('t') => Event::SortBy(SortKey::Tier),
            KeyCode::Char('v') => Event::ToggleView,
            KeyCode::Char('y') => Event::ExportSelected,
            _ => return None,
        }),
        InputMode::Search(SearchFocus::Typing) => Some(match key.code {
            KeyCode::Esc => Event::ExitSearch,
            KeyCode::Enter => Event::OpenDetail,
            KeyCode::Tab => Event::FocusResults,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Down => Event::CursorDown,
            KeyCode::Up => Event::CursorUp,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        }),
        InputMode::Search(SearchFocus::Navigating) => Some(match key.code {
            KeyCode::Esc => Event::ExitSearch,
            KeyCode::Enter => Event::OpenDetail,
            KeyCode::Char('/') => Event::FocusSearchBar,
            KeyCode::Down | KeyCode::Char('j') => Event::CursorDown,
            KeyCode::Up | KeyCode::Char('k') => Event::CursorUp,
            _ => return None,
        }),
        InputMode::Category => match key.code {
            KeyCode::Esc | KeyCode::Char('c') => Some(Event::Escape),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::CursorDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::CursorUp),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| Category::from_index(d as usize))
                .map(Event::ToggleCategory),
            _ => None,
        },
        InputMode::Feature => match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Event::Escape),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::CursorDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::CursorUp),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| FEATURE_FILTERS.get((d as usize).wrapping_sub(1)))
                .map(|name| Event::ToggleFeature((*name).to_string())),
            _ => None,
        },
    }
}

/// Executes an action returned from event handling.
///
/// Returns `true` when the event loop should terminate.
fn execute_action(state: &AppState, action: &Action) -> bool {
    match action {
        Action::Quit => {
            tracing::debug!("quit requested");
            true
        }
        Action::ExportService { id } => {
            export_service(state, id);
            false
        }
    }
}

/// Writes the record with the given id to `<id>.json` in the working
/// directory.
///
/// Failures are logged rather than surfaced; the dashboard keeps running.
fn export_service(state: &AppState, id: &str) {
    let Some(record) = state.catalog.service_by_id(id) else {
        tracing::debug!(service_id = %id, "export requested for unknown id");
        return;
    };

    let path = format!("{id}.json");
    match serde_json::to_string_pretty(record) {
        Ok(json) => match std::fs::write(&path, json) {
            Ok(()) => tracing::info!(path = %path, "record exported"),
            Err(e) => tracing::error!(error = %e, path = %path, "failed to write export"),
        },
        Err(e) => tracing::error!(error = %e, "failed to serialize record"),
    }
}
