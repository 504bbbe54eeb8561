mod purchase;
mod refund;
mod resolve;

pub use purchase::Settlement;
