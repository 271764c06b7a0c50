//! Email OTP flow: issue, store, verify.
//!
//! A development stand-in, not a security mechanism. Codes live in a
//! session-scoped slot and the default delivery channel just logs them.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::storage::{SlotStore, OTP_SLOT};

/// Digits in a generated code.
pub const CODE_LENGTH: usize = 6;
/// Minutes a code stays valid.
pub const EXPIRY_MINUTES: i64 = 5;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// User-facing OTP failures; messages are shown verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    #[error("OTP expired. Please request a new one.")]
    Expired,
    #[error("Invalid OTP. Please try again.")]
    Invalid,
    #[error("Failed to generate OTP. Please try again.")]
    Storage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OtpRecord {
    email: String,
    otp: String,
    created_at: i64,
    expires_at: i64,
}

/// Hands generated codes to a delivery channel.
pub trait OtpMailer: Send + Sync {
    fn deliver(&self, email: &str, code: &str) -> Result<(), OtpError>;
}

/// Default mailer: writes the code to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMailer;

impl OtpMailer for ConsoleMailer {
    fn deliver(&self, email: &str, code: &str) -> Result<(), OtpError> {
        info!(%email, %code, minutes = EXPIRY_MINUTES, "OTP issued");
        Ok(())
    }
}

pub struct OtpService {
    store: Arc<dyn SlotStore>,
    clock: Arc<dyn Clock>,
    mailer: Box<dyn OtpMailer>,
}

impl OtpService {
    pub fn new(store: Arc<dyn SlotStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_mailer(store, clock, Box::new(ConsoleMailer))
    }

    pub fn with_mailer(
        store: Arc<dyn SlotStore>,
        clock: Arc<dyn Clock>,
        mailer: Box<dyn OtpMailer>,
    ) -> Self {
        Self {
            store,
            clock,
            mailer,
        }
    }

    /// Issues a fresh code for `email`, stores it with its expiry, and hands
    /// it to the mailer. Any previously pending code is superseded.
    pub fn send(&self, email: &str) -> Result<(), OtpError> {
        let code = generate_code();
        let now = self.clock.epoch_millis();
        let record = OtpRecord {
            email: canonical_email(email),
            otp: code.clone(),
            created_at: now,
            expires_at: now + EXPIRY_MINUTES * MILLIS_PER_MINUTE,
        };
        let payload = serde_json::to_string(&record).map_err(|error| {
            warn!(%error, "could not serialize OTP record");
            OtpError::Storage
        })?;
        self.store.write(OTP_SLOT, &payload).map_err(|error| {
            warn!(%error, "could not store OTP record");
            OtpError::Storage
        })?;
        self.mailer.deliver(email, &code)
    }

    /// Drops any pending code and issues a new one.
    pub fn resend(&self, email: &str) -> Result<(), OtpError> {
        self.clear();
        self.send(email)
    }

    /// Checks a submitted code. A matching code is consumed; expired records
    /// are removed so the next attempt reports expiry consistently.
    pub fn verify(&self, email: &str, code: &str) -> Result<(), OtpError> {
        let record = match self.pending() {
            Some(record) => record,
            None => return Err(OtpError::Expired),
        };
        if record.email != canonical_email(email) {
            return Err(OtpError::Invalid);
        }
        if self.clock.epoch_millis() > record.expires_at {
            self.clear();
            return Err(OtpError::Expired);
        }
        if record.otp != code {
            return Err(OtpError::Invalid);
        }
        self.clear();
        Ok(())
    }

    /// Whole seconds until the pending code lapses, rounded up; zero when
    /// nothing is pending.
    pub fn remaining_seconds(&self) -> u64 {
        match self.pending() {
            Some(record) => {
                let remaining = record.expires_at - self.clock.epoch_millis();
                if remaining <= 0 {
                    0
                } else {
                    ((remaining + 999) / 1000) as u64
                }
            }
            None => 0,
        }
    }

    /// Drops any pending code.
    pub fn clear(&self) {
        if let Err(error) = self.store.remove(OTP_SLOT) {
            warn!(%error, "could not clear OTP slot");
        }
    }

    fn pending(&self) -> Option<OtpRecord> {
        let raw = self.store.read(OTP_SLOT).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
}

fn canonical_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Random code in `100000..=999999`, always [`CODE_LENGTH`] digits.
pub fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}
