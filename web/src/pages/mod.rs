//! Routed pages.

pub mod catalog;
pub mod item;
