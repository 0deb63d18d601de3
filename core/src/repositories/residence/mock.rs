//! Mock implementation of ResidenceRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::residence::Residence;
use crate::errors::BookingError;

use super::trait_::ResidenceRepository;

/// In-memory residence repository for testing
pub struct MockResidenceRepository {
    residences: Arc<RwLock<HashMap<Uuid, Residence>>>,
}

impl MockResidenceRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            residences: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a residence to the repository
    pub async fn insert(&self, residence: Residence) {
        self.residences.write().await.insert(residence.id, residence);
    }
}

impl Default for MockResidenceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResidenceRepository for MockResidenceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Residence>, BookingError> {
        let residences = self.residences.read().await;
        Ok(residences.get(&id).cloned())
    }
}
