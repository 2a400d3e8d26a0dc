//! Reusable view components.

pub mod item_card;
pub mod nav;
pub mod pagination;
pub mod search_bar;
pub mod stat_bar;
