pub mod gain;
pub mod receipt;
pub mod services;

pub use gain::GainTracker;
pub use receipt::{Receipt, ReceiptLine};
