//! Result types produced by the booking engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{DateRange, ServiceKind};

/// Outcome of a successful `validate_and_price` call.
///
/// Carries everything the create-booking use case needs to build the
/// persisted record without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingQuote {
    /// The selected resource kind
    pub kind: ServiceKind,

    /// The selected resource
    pub resource_id: Uuid,

    /// Parsed and validated booking interval
    pub range: DateRange,

    /// Billable day count for the interval
    pub days: i64,

    /// Total price: the caller's explicit price when given, otherwise
    /// the derived price
    pub total_price: Decimal,
}
