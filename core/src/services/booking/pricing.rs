//! Price derivation for bookings without an explicit price.

use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::value_objects::ServiceKind;
use crate::errors::{BookingError, PriceError};
use crate::repositories::{OfferRepository, ResidenceRepository, VehicleRepository};

/// Derives a total price from the selected resource's rate.
///
/// Residences and vehicles are billed per day; an offer price is a
/// package total and is never multiplied by the day count.
pub struct PriceCalculator<R, V, O>
where
    R: ResidenceRepository,
    V: VehicleRepository,
    O: OfferRepository,
{
    residences: Arc<R>,
    vehicles: Arc<V>,
    offers: Arc<O>,
}

impl<R, V, O> PriceCalculator<R, V, O>
where
    R: ResidenceRepository,
    V: VehicleRepository,
    O: OfferRepository,
{
    /// Create a new price calculator over the given repositories.
    pub fn new(residences: Arc<R>, vehicles: Arc<V>, offers: Arc<O>) -> Self {
        Self {
            residences,
            vehicles,
            offers,
        }
    }

    /// Compute the total price for a known resource selection.
    pub async fn calculate(
        &self,
        kind: ServiceKind,
        resource_id: Uuid,
        days: i64,
    ) -> Result<Decimal, BookingError> {
        match kind {
            ServiceKind::Residence => {
                let residence = self
                    .residences
                    .find_by_id(resource_id)
                    .await?
                    .ok_or(PriceError::ResourceNotFound { kind })?;
                Ok(residence.price_per_day * Decimal::from(days))
            }
            ServiceKind::Vehicle => {
                let vehicle = self
                    .vehicles
                    .find_by_id(resource_id)
                    .await?
                    .ok_or(PriceError::ResourceNotFound { kind })?;
                Ok(vehicle.price_per_day * Decimal::from(days))
            }
            ServiceKind::Offer => {
                let offer = self
                    .offers
                    .find_by_id(resource_id)
                    .await?
                    .ok_or(PriceError::ResourceNotFound { kind })?;
                Ok(offer.price)
            }
        }
    }

    /// Compute the total price for an optional resource selection.
    ///
    /// A missing selection cannot be priced; callers that already ran the
    /// service selector will never hit that branch.
    pub async fn calculate_for(
        &self,
        selection: Option<(ServiceKind, Uuid)>,
        days: i64,
    ) -> Result<Decimal, BookingError> {
        match selection {
            Some((kind, resource_id)) => self.calculate(kind, resource_id, days).await,
            None => Err(PriceError::PriceUnresolvable.into()),
        }
    }
}
