#![doc(test(attr(deny(warnings))))]

//! ExpenseWise Core offers the durable expense ledger, derived monthly
//! aggregates, and the profile and session primitives that power the
//! ExpenseWise client surfaces.

pub mod calendar;
pub mod catalog;
pub mod clock;
pub mod domain;
pub mod errors;
pub mod format;
pub mod ledger;
pub mod otp;
pub mod session;
pub mod storage;
pub mod validate;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expensewise_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("ExpenseWise Core tracing initialized.");
    });
}
