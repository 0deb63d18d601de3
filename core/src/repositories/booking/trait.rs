//! Booking repository trait defining the interface for booking persistence.
//!
//! The booking engine itself never writes; only the surrounding use cases
//! (create, confirm, cancel, complete) go through the mutating methods.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::ServiceKind;
use crate::errors::BookingError;

/// Repository trait for booking persistence operations
///
/// Implementations must make the create path safe against concurrent
/// requests: two overlapping bookings for the same resource must not both
/// commit even if both passed the advisory availability check. The MySQL
/// implementation does this with a locking re-check inside the insert
/// transaction.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    ///
    /// # Returns
    /// * `Ok(Booking)` - The created booking
    /// * `Err(BookingError::Availability)` - A conflicting booking was
    ///   committed concurrently
    /// * `Err(BookingError::Store)` - Storage error occurred
    async fn create(&self, booking: Booking) -> Result<Booking, BookingError>;

    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, BookingError>;

    /// List all bookings, newest first
    async fn find_all(&self) -> Result<Vec<Booking>, BookingError>;

    /// List all bookings placed by a user, newest first
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError>;

    /// Update an existing booking (status transitions, notes)
    ///
    /// # Returns
    /// * `Ok(Booking)` - The updated booking
    /// * `Err(BookingError::BookingNotFound)` - No booking with that ID
    async fn update(&self, booking: Booking) -> Result<Booking, BookingError>;

    /// Delete a booking
    ///
    /// # Returns
    /// * `Ok(true)` - Booking was deleted
    /// * `Ok(false)` - Booking not found
    async fn delete(&self, id: Uuid) -> Result<bool, BookingError>;

    /// List bookings that occupy capacity for a resource
    ///
    /// Returns only PENDING and CONFIRMED bookings referencing the given
    /// resource; CANCELLED and COMPLETED bookings never conflict with new
    /// requests and are filtered at the store.
    async fn list_active_for_resource(
        &self,
        kind: ServiceKind,
        resource_id: Uuid,
    ) -> Result<Vec<Booking>, BookingError>;
}
