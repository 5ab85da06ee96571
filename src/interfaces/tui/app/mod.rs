//! Dashboard application state and operations

mod link_operations;
mod navigation;
mod state;

pub use state::*;
