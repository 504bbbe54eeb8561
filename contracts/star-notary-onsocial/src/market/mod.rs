mod listing;
pub mod types;
mod views;

pub use types::Listing;
