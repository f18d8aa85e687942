//! Rampart bot library.
//!
//! Exposes the board model, host boundary, zone defense, turn strategy,
//! and protocol modules for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod config;
pub mod defense;
pub mod engine;
pub mod host;
pub mod protocol;
pub mod strategy;
