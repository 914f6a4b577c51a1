#![doc(test(attr(deny(warnings))))]

//! Retail Core keeps an in-memory shop stock, prices purchases with tiered VAT,
//! prints receipts and tracks the day's running gain.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Retail Core tracing initialized.");
    });
}
