//! Mock implementation of VehicleRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::vehicle::Vehicle;
use crate::errors::BookingError;

use super::trait_::VehicleRepository;

/// In-memory vehicle repository for testing
pub struct MockVehicleRepository {
    vehicles: Arc<RwLock<HashMap<Uuid, Vehicle>>>,
}

impl MockVehicleRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            vehicles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a vehicle to the repository
    pub async fn insert(&self, vehicle: Vehicle) {
        self.vehicles.write().await.insert(vehicle.id, vehicle);
    }
}

impl Default for MockVehicleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleRepository for MockVehicleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, BookingError> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.get(&id).cloned())
    }
}
