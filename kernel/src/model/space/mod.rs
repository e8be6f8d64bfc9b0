pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{SpaceId, UserId};

/// 貸し出し可能な駐車スペース。
/// owner_id は登録した space_owner のユーザー ID。
/// car_owner 側からは読み取り専用として扱う。
#[derive(Debug, Clone)]
pub struct ParkingSpace {
    pub space_id: SpaceId,
    pub owner_id: UserId,
    pub title: String,
    pub address: String,
    pub hourly_rate: f64,
    pub daily_rate: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
