use shared::error::AppResult;

use crate::model::{
    id::{UserId, VehicleId},
    vehicle::{event::CreateVehicle, Vehicle},
};

pub trait VehicleRepository: Send + Sync {
    fn create(&self, event: CreateVehicle) -> AppResult<VehicleId>;
    fn find_by_id(&self, vehicle_id: VehicleId) -> AppResult<Option<Vehicle>>;
    /// car_owner が登録した車両の一覧を返す
    fn find_by_owner_id(&self, owner_id: UserId) -> AppResult<Vec<Vehicle>>;
}
