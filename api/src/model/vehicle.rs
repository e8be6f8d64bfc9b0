use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{UserId, VehicleId},
    vehicle::{event::CreateVehicle, Vehicle},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[garde(length(min = 1))]
    pub make_model: String,
    #[garde(length(min = 1))]
    pub license_plate: String,
}

#[derive(new)]
pub struct CreateVehicleRequestWithOwnerId(UserId, CreateVehicleRequest);

impl From<CreateVehicleRequestWithOwnerId> for CreateVehicle {
    fn from(value: CreateVehicleRequestWithOwnerId) -> Self {
        let CreateVehicleRequestWithOwnerId(
            owner_id,
            CreateVehicleRequest {
                make_model,
                license_plate,
            },
        ) = value;
        CreateVehicle {
            owner_id,
            make_model,
            license_plate,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclesResponse {
    pub items: Vec<VehicleResponse>,
}

impl From<Vec<Vehicle>> for VehiclesResponse {
    fn from(value: Vec<Vehicle>) -> Self {
        Self {
            items: value.into_iter().map(VehicleResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub vehicle_id: VehicleId,
    pub owner_id: UserId,
    pub make_model: String,
    pub license_plate: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(value: Vehicle) -> Self {
        let Vehicle {
            vehicle_id,
            owner_id,
            make_model,
            license_plate,
            created_at,
        } = value;
        Self {
            vehicle_id,
            owner_id,
            make_model,
            license_plate,
            created_at,
        }
    }
}
