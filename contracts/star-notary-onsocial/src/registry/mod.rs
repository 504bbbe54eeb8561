mod create;
mod ownership;
pub mod types;
mod views;

pub use types::{Asset, AssetView};
