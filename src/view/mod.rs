//! Filter/view engine: derives what to display from the dataset and the
//! current search/stage selection.
//!
//! Nothing in here touches a terminal. The TUI and the `list` command both
//! hand a [`ViewState`] to [`compute_view`] and render whatever comes back.

pub mod copy_ack;
mod filter;
mod state;

pub use copy_ack::{CopyAck, CopyAcks, COPIED_DURATION};
pub use filter::{compute_view, DerivedView, StageView};
pub use state::ViewState;
