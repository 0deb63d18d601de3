//! Booking orchestration service.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::{BookingRequest, ServiceKind};
use crate::errors::{BookingError, BookingResult, SelectionError};
use crate::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};

use super::availability::AvailabilityChecker;
use super::dates::validate_dates;
use super::pricing::PriceCalculator;
use super::selector::select_service;
use super::types::BookingQuote;

/// Booking service composing validation, availability and pricing.
///
/// `validate_and_price` is the pure decision core: it issues only read
/// queries and commits nothing. The surrounding use cases
/// (`create_booking`, status transitions) delegate persistence to the
/// booking repository after the decision succeeds.
pub struct BookingService<R, V, O, B>
where
    R: ResidenceRepository,
    V: VehicleRepository,
    O: OfferRepository,
    B: BookingRepository,
{
    bookings: Arc<B>,
    availability: AvailabilityChecker<R, V, O, B>,
    pricing: PriceCalculator<R, V, O>,
}

impl<R, V, O, B> BookingService<R, V, O, B>
where
    R: ResidenceRepository,
    V: VehicleRepository,
    O: OfferRepository,
    B: BookingRepository,
{
    /// Create a new booking service over the given repositories.
    pub fn new(
        residences: Arc<R>,
        vehicles: Arc<V>,
        offers: Arc<O>,
        bookings: Arc<B>,
    ) -> Self {
        let availability = AvailabilityChecker::new(
            residences.clone(),
            vehicles.clone(),
            offers.clone(),
            bookings.clone(),
        );
        let pricing = PriceCalculator::new(residences, vehicles, offers);
        Self {
            bookings,
            availability,
            pricing,
        }
    }

    /// Validate a booking request and resolve its total price.
    ///
    /// Runs the full decision sequence: date validation, service
    /// selection, availability check, price resolution. The first failing
    /// check short-circuits. An explicit `total_price` on the request
    /// always wins and is trusted as-is.
    pub async fn validate_and_price(&self, request: &BookingRequest) -> BookingResult<BookingQuote> {
        self.validate_and_price_at(request, Utc::now()).await
    }

    /// Clock-injected variant of [`validate_and_price`].
    ///
    /// [`validate_and_price`]: Self::validate_and_price
    pub async fn validate_and_price_at(
        &self,
        request: &BookingRequest,
        now: DateTime<Utc>,
    ) -> BookingResult<BookingQuote> {
        let range = validate_dates(&request.start_date, &request.end_date, now)?;

        let kind = select_service(request.residence_id, request.vehicle_id, request.offer_id)?;
        let resource_id = selected_id(request, kind)?;

        self.availability.check(kind, resource_id, &range, now).await?;

        let days = range.days();
        let total_price = match request.total_price {
            Some(price) => price,
            None => self.pricing.calculate(kind, resource_id, days).await?,
        };

        Ok(BookingQuote {
            kind,
            resource_id,
            range,
            days,
            total_price,
        })
    }

    /// Create a booking for a user.
    ///
    /// Validates and prices the request, then persists a PENDING booking.
    /// Nothing is written when any check fails.
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
        user_id: Uuid,
    ) -> BookingResult<Booking> {
        let quote = self.validate_and_price(request).await?;

        let booking = Booking::new(
            user_id,
            quote.range.start,
            quote.range.end,
            quote.total_price,
            quote.kind,
            quote.resource_id,
            request.notes.clone(),
        );

        let created = self.bookings.create(booking).await?;

        tracing::info!(
            booking_id = %created.id,
            user_id = %user_id,
            kind = %quote.kind,
            resource_id = %quote.resource_id,
            total_price = %created.total_price,
            "Created booking"
        );

        Ok(created)
    }

    /// Fetch a single booking.
    pub async fn get_booking(&self, id: Uuid) -> BookingResult<Booking> {
        self.bookings
            .find_by_id(id)
            .await?
            .ok_or(BookingError::BookingNotFound)
    }

    /// List all bookings, newest first.
    pub async fn list_bookings(&self) -> BookingResult<Vec<Booking>> {
        self.bookings.find_all().await
    }

    /// List a user's bookings, newest first.
    pub async fn list_bookings_for_user(&self, user_id: Uuid) -> BookingResult<Vec<Booking>> {
        self.bookings.find_by_user(user_id).await
    }

    /// Confirm a pending booking.
    pub async fn confirm_booking(&self, id: Uuid) -> BookingResult<Booking> {
        self.transition_booking(id, Booking::confirm).await
    }

    /// Cancel a pending or confirmed booking.
    pub async fn cancel_booking(&self, id: Uuid) -> BookingResult<Booking> {
        self.transition_booking(id, Booking::cancel).await
    }

    /// Complete a confirmed booking.
    pub async fn complete_booking(&self, id: Uuid) -> BookingResult<Booking> {
        self.transition_booking(id, Booking::complete).await
    }

    /// Delete a booking.
    pub async fn delete_booking(&self, id: Uuid) -> BookingResult<()> {
        if !self.bookings.delete(id).await? {
            return Err(BookingError::BookingNotFound);
        }
        Ok(())
    }

    async fn transition_booking(
        &self,
        id: Uuid,
        transition: fn(&mut Booking) -> Result<(), BookingError>,
    ) -> BookingResult<Booking> {
        let mut booking = self.get_booking(id).await?;
        transition(&mut booking)?;
        let updated = self.bookings.update(booking).await?;

        tracing::info!(
            booking_id = %updated.id,
            status = %updated.status,
            "Booking status updated"
        );

        Ok(updated)
    }
}

/// Extract the ID matching the selected kind. The selector guarantees the
/// reference exists, so the error branch is unreachable in practice.
fn selected_id(request: &BookingRequest, kind: ServiceKind) -> BookingResult<Uuid> {
    let id = match kind {
        ServiceKind::Residence => request.residence_id,
        ServiceKind::Vehicle => request.vehicle_id,
        ServiceKind::Offer => request.offer_id,
    };
    id.ok_or_else(|| SelectionError::NoServiceSpecified.into())
}
