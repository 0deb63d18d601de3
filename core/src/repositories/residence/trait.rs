//! Residence repository trait defining the interface for residence lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::residence::Residence;
use crate::errors::BookingError;

/// Repository trait for residence lookups
///
/// The booking engine only reads residences; listing management is a
/// separate concern handled by the surrounding CRUD surface.
#[async_trait]
pub trait ResidenceRepository: Send + Sync {
    /// Find a residence by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Residence))` - Residence found
    /// * `Ok(None)` - No residence with the given ID
    /// * `Err(BookingError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Residence>, BookingError>;
}
