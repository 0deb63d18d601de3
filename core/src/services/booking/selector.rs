//! Service selection: exactly one resource kind per booking.

use uuid::Uuid;

use crate::domain::value_objects::ServiceKind;
use crate::errors::SelectionError;

/// Determines which service a booking request refers to.
///
/// A request must reference exactly one of residence, vehicle or offer;
/// zero references or more than one are rejected. The returned kind
/// routes the subsequent availability and pricing calls.
pub fn select_service(
    residence_id: Option<Uuid>,
    vehicle_id: Option<Uuid>,
    offer_id: Option<Uuid>,
) -> Result<ServiceKind, SelectionError> {
    let mut kinds = [
        (ServiceKind::Residence, residence_id),
        (ServiceKind::Vehicle, vehicle_id),
        (ServiceKind::Offer, offer_id),
    ]
    .into_iter()
    .filter_map(|(kind, id)| id.map(|_| kind));

    match (kinds.next(), kinds.next()) {
        (None, _) => Err(SelectionError::NoServiceSpecified),
        (Some(kind), None) => Ok(kind),
        (Some(_), Some(_)) => Err(SelectionError::MultipleServicesSpecified),
    }
}
