//! Mock implementation of OfferRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::offer::Offer;
use crate::errors::BookingError;

use super::trait_::OfferRepository;

/// In-memory offer repository for testing
pub struct MockOfferRepository {
    offers: Arc<RwLock<HashMap<Uuid, Offer>>>,
}

impl MockOfferRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            offers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add an offer to the repository
    pub async fn insert(&self, offer: Offer) {
        self.offers.write().await.insert(offer.id, offer);
    }
}

impl Default for MockOfferRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OfferRepository for MockOfferRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, BookingError> {
        let offers = self.offers.read().await;
        Ok(offers.get(&id).cloned())
    }
}
