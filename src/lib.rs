//! Shortlinker Dashboard - terminal client for a URL shortener's link API
//!
//! Keeps an in-memory snapshot of the link collection in sync with the
//! backend, validates creates before they are sent, filters the collection
//! locally and resolves each link's public short URL.
//!
//! # Features
//! - **cli**: One-shot commands
//! - **tui**: Interactive terminal dashboard (ratatui)
//!
//! # Architecture
//! - `client`: `LinkApi` gateway and its HTTP implementation
//! - `services`: collection store, submitter, view, stats lookup, resolver
//! - `interfaces`: CLI and TUI front-ends
//! - `config`: Configuration management
//! - `runtime`: Startup wiring and execution modes
//! - `system`: Logging and panic handling

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod runtime;
pub mod services;
pub mod system;
pub mod utils;
