//! Offer repository trait defining the interface for combined-offer lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::offer::Offer;
use crate::errors::BookingError;

/// Repository trait for combined-offer lookups
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Find an offer by its unique identifier
    ///
    /// The returned offer carries its underlying residence and vehicle
    /// references so the availability checker can recurse into both.
    ///
    /// # Returns
    /// * `Ok(Some(Offer))` - Offer found
    /// * `Ok(None)` - No offer with the given ID
    /// * `Err(BookingError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, BookingError>;
}
