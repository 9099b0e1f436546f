//! Testing infrastructure for ohmybar integration tests.
//!
//! - `TestWorld`: isolated home directory, config file and binary runner
//! - `assertions`: checks on rendered menu output
//! - `fixtures`: bookmark files and config snippets

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
