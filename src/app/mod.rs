//! Application layer: configuration for building engines and players.

pub mod config;

pub use config::EngineConfig;
