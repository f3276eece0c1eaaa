//! Actions representing side effects to be executed by the binary shim.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input.
//! Actions bridge pure state transformations and effectful operations:
//! leaving the terminal loop and writing record exports to disk.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! and the shim in `main.rs` executes them in sequence.

/// Commands representing side effects to be executed by the binary shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leaves the event loop, restores the terminal, and exits.
    ///
    /// Sent when the user explicitly requests to quit (pressing 'q').
    Quit,

    /// Writes the record with the given id to `<id>.json` in the working
    /// directory.
    ///
    /// Sent when the user presses 'y' with a record under the cursor or the
    /// detail drawer open. The shim resolves the id against the catalog and
    /// serializes the full record.
    ExportService {
        /// Identifier of the record to export.
        id: String,
    },
}
