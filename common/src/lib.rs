//! Shared core for the Dexview catalog viewer.
//!
//! Everything here compiles for both the SSR server and the WASM client:
//! the catalog model, the upstream wire schema, configuration, and the
//! view-state logic that decides which items are on screen.

pub mod api;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod view;
