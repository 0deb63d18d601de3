//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::domain::value_objects::ServiceKind;
use crate::errors::BookingError;

use super::trait_::BookingRepository;

/// In-memory booking repository for testing
pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an existing booking
    pub async fn insert(&self, booking: Booking) {
        self.bookings.write().await.insert(booking.id, booking);
    }

    /// Number of stored bookings
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, BookingError> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, BookingError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Booking>, BookingError> {
        let bookings = self.bookings.read().await;
        let mut all: Vec<Booking> = bookings.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        let bookings = self.bookings.read().await;
        let mut matching: Vec<Booking> = bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, BookingError> {
        let mut bookings = self.bookings.write().await;
        if !bookings.contains_key(&booking.id) {
            return Err(BookingError::BookingNotFound);
        }
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BookingError> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings.remove(&id).is_some())
    }

    async fn list_active_for_resource(
        &self,
        kind: ServiceKind,
        resource_id: Uuid,
    ) -> Result<Vec<Booking>, BookingError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.is_active() && b.resource() == Some((kind, resource_id)))
            .cloned()
            .collect())
    }
}
