//! Pokedex CLI Library
//!
//! This module exposes the cache, client, and prompt modules for use by the
//! binary and by integration tests.

pub mod cache;
pub mod cli;
pub mod commands;
pub mod data;
pub mod logging;
pub mod repl;
