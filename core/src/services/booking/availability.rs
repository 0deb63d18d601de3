//! Availability conflict detection against existing bookings.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::value_objects::{DateRange, ServiceKind};
use crate::errors::{AvailabilityError, BookingError};
use crate::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};

/// Checks whether a resource can be booked over a requested interval.
///
/// The check is advisory and lock-free: it reads the store and decides.
/// The storage boundary is responsible for making the final
/// read-decide-write sequence safe against concurrent requests.
pub struct AvailabilityChecker<R, V, O, B>
where
    R: ResidenceRepository,
    V: VehicleRepository,
    O: OfferRepository,
    B: BookingRepository,
{
    residences: Arc<R>,
    vehicles: Arc<V>,
    offers: Arc<O>,
    bookings: Arc<B>,
}

impl<R, V, O, B> AvailabilityChecker<R, V, O, B>
where
    R: ResidenceRepository,
    V: VehicleRepository,
    O: OfferRepository,
    B: BookingRepository,
{
    /// Create a new availability checker over the given repositories.
    pub fn new(residences: Arc<R>, vehicles: Arc<V>, offers: Arc<O>, bookings: Arc<B>) -> Self {
        Self {
            residences,
            vehicles,
            offers,
            bookings,
        }
    }

    /// Check availability for the selected resource kind.
    ///
    /// For offers this validates the offer itself (active, inside its
    /// validity window at `now`) and then recurses into the underlying
    /// residence and vehicle.
    pub async fn check(
        &self,
        kind: ServiceKind,
        resource_id: Uuid,
        range: &DateRange,
        now: DateTime<Utc>,
    ) -> Result<(), BookingError> {
        match kind {
            ServiceKind::Residence => self.check_residence(resource_id, range).await,
            ServiceKind::Vehicle => self.check_vehicle(resource_id, range).await,
            ServiceKind::Offer => self.check_offer(resource_id, range, now).await,
        }
    }

    async fn check_residence(&self, id: Uuid, range: &DateRange) -> Result<(), BookingError> {
        let residence = self
            .residences
            .find_by_id(id)
            .await?
            .ok_or(AvailabilityError::ResourceNotFound {
                kind: ServiceKind::Residence,
            })?;

        if !residence.is_active {
            return Err(AvailabilityError::ResourceUnavailable {
                kind: ServiceKind::Residence,
            }
            .into());
        }

        self.ensure_no_conflict(ServiceKind::Residence, id, range)
            .await
    }

    async fn check_vehicle(&self, id: Uuid, range: &DateRange) -> Result<(), BookingError> {
        let vehicle = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or(AvailabilityError::ResourceNotFound {
                kind: ServiceKind::Vehicle,
            })?;

        if !vehicle.is_active {
            return Err(AvailabilityError::ResourceUnavailable {
                kind: ServiceKind::Vehicle,
            }
            .into());
        }

        self.ensure_no_conflict(ServiceKind::Vehicle, id, range).await
    }

    async fn check_offer(
        &self,
        id: Uuid,
        range: &DateRange,
        now: DateTime<Utc>,
    ) -> Result<(), BookingError> {
        let offer = self
            .offers
            .find_by_id(id)
            .await?
            .ok_or(AvailabilityError::ResourceNotFound {
                kind: ServiceKind::Offer,
            })?;

        if !offer.is_active {
            return Err(AvailabilityError::ResourceUnavailable {
                kind: ServiceKind::Offer,
            }
            .into());
        }

        if !offer.is_valid_at(now) {
            return Err(AvailabilityError::OfferNotCurrentlyValid.into());
        }

        self.ensure_no_conflict(ServiceKind::Offer, id, range).await?;

        // A package holds both underlying resources for the whole interval
        self.check_residence(offer.residence_id, range).await?;
        self.check_vehicle(offer.vehicle_id, range).await
    }

    /// Rejects the interval if any PENDING/CONFIRMED booking for the
    /// resource overlaps it. Intervals are half-open, so a booking ending
    /// exactly when the new one starts is not a conflict.
    async fn ensure_no_conflict(
        &self,
        kind: ServiceKind,
        resource_id: Uuid,
        range: &DateRange,
    ) -> Result<(), BookingError> {
        let existing = self
            .bookings
            .list_active_for_resource(kind, resource_id)
            .await?;

        for booking in &existing {
            if range.overlaps(booking.start_date, booking.end_date) {
                tracing::warn!(
                    kind = %kind,
                    resource_id = %resource_id,
                    conflicting_booking = %booking.id,
                    "Booking request conflicts with an existing booking"
                );
                return Err(AvailabilityError::ResourceNotAvailable { kind }.into());
            }
        }

        Ok(())
    }
}
