//! Adapters implementing domain ports.
//!
//! Adapters depend on the traits in [`crate::ports`], not the other way
//! around.

pub mod search_player;

pub use search_player::SearchPlayer;
