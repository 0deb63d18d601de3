//! Domain-specific error types and error handling.

mod types;

pub use types::{AvailabilityError, DateError, PriceError, SelectionError};

use thiserror::Error;

use crate::domain::entities::booking::BookingStatus;
use rf_shared::types::response::ErrorResponse;

/// Umbrella error for booking operations.
///
/// Every check fails fast: the first violated rule is returned and no
/// further rules are evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error("Booking cannot move from {from} to {to}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Booking not found")]
    BookingNotFound,

    #[error("Storage error: {message}")]
    Store { message: String },
}

pub type BookingResult<T> = Result<T, BookingError>;

impl BookingError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::Date(DateError::InvalidFormat) => "INVALID_FORMAT",
            BookingError::Date(DateError::StartNotInFuture) => "START_NOT_IN_FUTURE",
            BookingError::Date(DateError::EndBeforeStart) => "END_BEFORE_START",
            BookingError::Date(DateError::SpanTooLong) => "SPAN_TOO_LONG",
            BookingError::Selection(SelectionError::NoServiceSpecified) => "NO_SERVICE_SPECIFIED",
            BookingError::Selection(SelectionError::MultipleServicesSpecified) => {
                "MULTIPLE_SERVICES_SPECIFIED"
            }
            BookingError::Availability(AvailabilityError::ResourceNotFound { .. }) => {
                "RESOURCE_NOT_FOUND"
            }
            BookingError::Availability(AvailabilityError::ResourceUnavailable { .. }) => {
                "RESOURCE_UNAVAILABLE"
            }
            BookingError::Availability(AvailabilityError::ResourceNotAvailable { .. }) => {
                "RESOURCE_NOT_AVAILABLE"
            }
            BookingError::Availability(AvailabilityError::OfferNotCurrentlyValid) => {
                "OFFER_NOT_CURRENTLY_VALID"
            }
            BookingError::Price(PriceError::ResourceNotFound { .. }) => "RESOURCE_NOT_FOUND",
            BookingError::Price(PriceError::PriceUnresolvable) => "PRICE_UNRESOLVABLE",
            BookingError::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            BookingError::BookingNotFound => "BOOKING_NOT_FOUND",
            BookingError::Store { .. } => "STORAGE_ERROR",
        }
    }
}

/// Convert BookingError to the shared API error envelope
impl From<&BookingError> for ErrorResponse {
    fn from(err: &BookingError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}
