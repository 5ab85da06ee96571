pub mod startup;

pub use startup::{DashboardContext, prepare_startup};
