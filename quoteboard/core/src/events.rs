//! Surface Events
//!
//! Events sent from UI surfaces to the board. Surfaces are "dumb"
//! renderers that forward user actions without interpreting them - the
//! board decides how each action mutates state and answers with
//! [`BoardMessage`](crate::messages::BoardMessage)s.

use serde::{Deserialize, Serialize};

/// User actions a surface can report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BoardEvent {
    /// The user asked for a fresh quote list (the Refresh control).
    RefreshRequested,

    /// The user asked for a random quote from the filtered list (Find).
    FindRequested,

    /// The user toggled the search panel. Closing it clears the term.
    SearchToggled,

    /// The search input changed.
    SearchChanged {
        /// The complete new search term (not a delta).
        term: String,
    },

    /// The user asked to quit.
    QuitRequested,
}
