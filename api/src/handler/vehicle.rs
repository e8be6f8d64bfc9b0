use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::vehicle::{
        CreateVehicleRequest, CreateVehicleRequestWithOwnerId, VehicleResponse, VehiclesResponse,
    },
};

/// 車両を登録する（car_owner の my-cars ビュー）
pub fn register_vehicle(
    user: &AuthorizedUser,
    registry: &AppRegistry,
    req: CreateVehicleRequest,
) -> AppResult<VehicleResponse> {
    req.validate(&())?;

    let event = CreateVehicleRequestWithOwnerId::new(user.id(), req);
    let vehicle_id = registry.vehicle_repository().create(event.into())?;

    registry
        .vehicle_repository()
        .find_by_id(vehicle_id)?
        .map(VehicleResponse::from)
        .ok_or_else(|| AppError::EntityNotFound("登録した車両が見つかりません".into()))
}

/// 自分が登録した車両の一覧を返す
pub fn my_vehicles(user: &AuthorizedUser, registry: &AppRegistry) -> AppResult<VehiclesResponse> {
    registry
        .vehicle_repository()
        .find_by_owner_id(user.id())
        .map(VehiclesResponse::from)
}
