//! Card zones: the per-player hand and the shared timeline.
//!
//! The deck lives in `cards`; discarded cards leave the game entirely and
//! are only counted in `GameState`.

pub mod hand;
pub mod timeline;

pub use hand::Hand;
pub use timeline::Timeline;
