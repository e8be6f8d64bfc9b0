use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{UserId, VehicleId},
    vehicle::{event::CreateVehicle, Vehicle},
};
use kernel::repository::vehicle::VehicleRepository;
use shared::error::AppResult;

use crate::store::MemoryStore;

#[derive(new)]
pub struct VehicleRepositoryImpl {
    store: MemoryStore,
}

impl VehicleRepository for VehicleRepositoryImpl {
    fn create(&self, event: CreateVehicle) -> AppResult<VehicleId> {
        let vehicle_id = VehicleId::new();
        let vehicle = Vehicle {
            vehicle_id,
            owner_id: event.owner_id,
            make_model: event.make_model,
            license_plate: event.license_plate,
            created_at: Utc::now(),
        };
        self.store.vehicles_mut().insert(0, vehicle);
        Ok(vehicle_id)
    }

    fn find_by_id(&self, vehicle_id: VehicleId) -> AppResult<Option<Vehicle>> {
        Ok(self
            .store
            .vehicles()
            .iter()
            .find(|v| v.vehicle_id == vehicle_id)
            .cloned())
    }

    fn find_by_owner_id(&self, owner_id: UserId) -> AppResult<Vec<Vehicle>> {
        Ok(self
            .store
            .vehicles()
            .iter()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_vehicle() -> anyhow::Result<()> {
        let repo = VehicleRepositoryImpl::new(MemoryStore::new());

        let owner_id = UserId::new();
        let vehicle_id = repo.create(CreateVehicle::new(
            owner_id,
            "Maruti Suzuki Swift".into(),
            "KA-01-AB-1234".into(),
        ))?;

        let res = repo.find_by_id(vehicle_id)?;
        assert!(res.is_some());
        assert_eq!(res.unwrap().license_plate, "KA-01-AB-1234");

        assert_eq!(repo.find_by_owner_id(owner_id)?.len(), 1);
        assert!(repo.find_by_owner_id(UserId::new())?.is_empty());
        Ok(())
    }
}
