//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. The drawer takes
//! precedence over the list when a record is selected.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The renderer clears the screen each frame; the shim in `main.rs` owns
//! terminal modes and flushing.

use crate::app::AppState;
use crate::ui::components;

/// Renders one frame of the dashboard to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate layout: the detail drawer when a record is selected, the
/// list (table or cards) otherwise.
///
/// Prints ANSI-styled output using `print!`; the caller is responsible for
/// flushing stdout after the frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    // Clear screen and home the cursor before drawing the frame.
    print!("\u{1b}[2J\u{1b}[H");

    if viewmodel.detail.is_some() {
        components::render_detail_mode(&viewmodel, &state.theme, cols, rows);
    } else {
        components::render_list_mode(&viewmodel, &state.theme, state.view_mode, cols, rows);
    }
}
