//! Vestibule - a terminal sign-in / sign-up screen
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod ui;
