//! Error families raised by the booking validation engine
//!
//! Every variant is an expected, recoverable business error surfaced to
//! the API consumer; transport to HTTP status codes is a caller policy.

use thiserror::Error;

use crate::domain::value_objects::{ServiceKind, MAX_BOOKING_DAYS};

/// Date range validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date format; expected RFC 3339")]
    InvalidFormat,

    #[error("Start date must be in the future")]
    StartNotInFuture,

    #[error("End date must be after start date")]
    EndBeforeStart,

    #[error("Booking cannot exceed {MAX_BOOKING_DAYS} days")]
    SpanTooLong,
}

/// Service selection errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("A booking must include a service (residence, vehicle or offer)")]
    NoServiceSpecified,

    #[error("A booking can only include one service type at a time")]
    MultipleServicesSpecified,
}

/// Availability check errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("{kind} not found")]
    ResourceNotFound { kind: ServiceKind },

    #[error("This {kind} is not available")]
    ResourceUnavailable { kind: ServiceKind },

    #[error("This {kind} is not available for the selected dates")]
    ResourceNotAvailable { kind: ServiceKind },

    #[error("This offer is not currently valid")]
    OfferNotCurrentlyValid,
}

/// Price calculation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("{kind} not found")]
    ResourceNotFound { kind: ServiceKind },

    #[error("Unable to calculate a price for this booking")]
    PriceUnresolvable,
}
