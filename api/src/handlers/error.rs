//! Central mapping from domain errors to HTTP responses.
//!
//! Status policy: validation and business-rule failures are 400, missing
//! resources are 404, booking conflicts are 409, storage faults are 500.

use actix_web::HttpResponse;

use rf_core::errors::{AvailabilityError, BookingError, PriceError};
use rf_shared::types::response::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response.
pub fn error_response(err: &BookingError) -> HttpResponse {
    let body = ErrorResponse::from(err);

    match err {
        BookingError::Availability(AvailabilityError::ResourceNotFound { .. })
        | BookingError::Price(PriceError::ResourceNotFound { .. })
        | BookingError::BookingNotFound => HttpResponse::NotFound().json(body),

        BookingError::Availability(AvailabilityError::ResourceNotAvailable { .. }) => {
            HttpResponse::Conflict().json(body)
        }

        BookingError::Store { message } => {
            log::error!("Storage failure: {}", message);
            HttpResponse::InternalServerError().json(body)
        }

        BookingError::Date(_)
        | BookingError::Selection(_)
        | BookingError::Availability(_)
        | BookingError::Price(_)
        | BookingError::InvalidStatusTransition { .. } => HttpResponse::BadRequest().json(body),
    }
}

/// Convert DTO validation failures into a 400 response.
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", errors.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_core::domain::value_objects::ServiceKind;
    use rf_core::errors::{DateError, SelectionError};

    #[test]
    fn test_validation_errors_are_bad_request() {
        let response = error_response(&BookingError::Date(DateError::SpanTooLong));
        assert_eq!(response.status(), 400);

        let response =
            error_response(&BookingError::Selection(SelectionError::NoServiceSpecified));
        assert_eq!(response.status(), 400);
    }

    #[test]
    fn test_missing_resources_are_not_found() {
        let response = error_response(&BookingError::Availability(
            AvailabilityError::ResourceNotFound {
                kind: ServiceKind::Offer,
            },
        ));
        assert_eq!(response.status(), 404);

        let response = error_response(&BookingError::BookingNotFound);
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn test_booking_conflicts_are_conflicts() {
        let response = error_response(&BookingError::Availability(
            AvailabilityError::ResourceNotAvailable {
                kind: ServiceKind::Residence,
            },
        ));
        assert_eq!(response.status(), 409);
    }

    #[test]
    fn test_storage_faults_are_internal_errors() {
        let response = error_response(&BookingError::Store {
            message: "connection reset".to_string(),
        });
        assert_eq!(response.status(), 500);
    }
}
