//! Vehicle repository trait defining the interface for vehicle lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::vehicle::Vehicle;
use crate::errors::BookingError;

/// Repository trait for vehicle lookups
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Find a vehicle by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Vehicle))` - Vehicle found
    /// * `Ok(None)` - No vehicle with the given ID
    /// * `Err(BookingError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, BookingError>;
}
