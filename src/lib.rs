// Make the same modules available from the library crate so integration
// tests (and any host embedding) can reach them via `roastlint::...`.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

pub use crate::core::{RoastCatalog, RoastEngine, RoastMatch, SavageLevel};
