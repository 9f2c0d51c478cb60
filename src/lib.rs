//! Skycast Library
//!
//! This module exposes the data-shaping and CLI modules for use in
//! integration tests.

pub mod cli;
pub mod data;
pub mod daynight;
pub mod forecast;
pub mod prefs;
pub mod summary;
pub mod units;
