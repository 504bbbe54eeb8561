mod charge;
mod flush;
mod types;

pub use types::*;
