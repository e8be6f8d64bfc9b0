pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{UserId, VehicleId};

/// car_owner が登録する車両
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub vehicle_id: VehicleId,
    pub owner_id: UserId,
    pub make_model: String,
    pub license_plate: String,
    pub created_at: DateTime<Utc>,
}
