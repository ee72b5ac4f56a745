//! Ports (trait boundaries) for external collaborators.
//!
//! Interactive frontends are not part of this crate. They plug into the game
//! loops through the traits defined here, and adapters in
//! [`crate::adapters`] provide the in-crate implementations.

pub mod source;

pub use source::{Command, FnSource, MoveSource, ScriptedSource};
