//! CLI infrastructure for the gamesearch toolkit
//!
//! This module provides the command-line interface for solving puzzles,
//! choosing tic-tac-toe moves, and comparing search strategies.

pub mod commands;
pub mod config;
pub mod output;
