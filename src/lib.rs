//! Podex - a terminal Pokédex client
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod traits;
pub mod ui;
pub mod view_state;
