//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical shipment record persisted in `parcel`.
//! - Name the status values the core gives meaning to.
//!
//! # Invariants
//! - `number` is assigned by the store and never reused.
//! - `created_at` is written once at creation and never modified.
//! - Only `STATUS_REGISTERED` gates mutation; other status strings are opaque.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned parcel identifier.
pub type ParcelNumber = i64;

/// Identifier of the client that owns a parcel.
pub type ClientId = i64;

/// Initial status. Address changes and deletion are allowed only here.
pub const STATUS_REGISTERED: &str = "registered";
/// Parcel handed over to the carrier.
pub const STATUS_SENT: &str = "sent";
/// Parcel received by the client.
pub const STATUS_DELIVERED: &str = "delivered";

/// Validation failures for parcel writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParcelValidationError {
    EmptyStatus,
}

impl Display for ParcelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStatus => write!(f, "parcel status must not be empty"),
        }
    }
}

impl Error for ParcelValidationError {}

/// Shipment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Ignored on insert; populated from the store afterwards.
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: String,
    /// Free-text delivery address.
    pub address: String,
    /// RFC 3339 text, e.g. `2026-10-18T09:30:00Z`.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved `registered` parcel stamped with the current UTC time.
    pub fn new(client: ClientId, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: STATUS_REGISTERED.to_string(),
            address: address.into(),
            created_at: now_rfc3339(),
        }
    }

    /// Checks write-time invariants.
    ///
    /// # Errors
    /// - `EmptyStatus` when `status` is the empty string.
    pub fn validate(&self) -> Result<(), ParcelValidationError> {
        validate_status(&self.status)
    }

    /// Returns whether address changes and deletion are currently allowed.
    pub fn is_registered(&self) -> bool {
        self.status == STATUS_REGISTERED
    }
}

/// Returns the status that follows `status` in the delivery progression.
///
/// `delivered` and unknown values have no successor.
pub fn next_status(status: &str) -> Option<&'static str> {
    match status {
        STATUS_REGISTERED => Some(STATUS_SENT),
        STATUS_SENT => Some(STATUS_DELIVERED),
        _ => None,
    }
}

pub(crate) fn validate_status(status: &str) -> Result<(), ParcelValidationError> {
    if status.is_empty() {
        return Err(ParcelValidationError::EmptyStatus);
    }
    Ok(())
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::{next_status, validate_status, STATUS_DELIVERED, STATUS_SENT};

    #[test]
    fn progression_stops_at_delivered() {
        assert_eq!(next_status("registered"), Some(STATUS_SENT));
        assert_eq!(next_status("sent"), Some(STATUS_DELIVERED));
        assert_eq!(next_status("delivered"), None);
        assert_eq!(next_status("lost"), None);
    }

    #[test]
    fn only_empty_status_is_rejected() {
        assert!(validate_status("").is_err());
        assert!(validate_status("  ").is_ok());
        assert!(validate_status("returned").is_ok());
    }
}
