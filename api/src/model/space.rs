use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{SpaceId, UserId},
    space::{event::CreateSpace, ParkingSpace},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(range(min = 0.0))]
    pub hourly_rate: f64,
    #[garde(range(min = 0.0))]
    pub daily_rate: f64,
    #[garde(skip)]
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

/// 登録リクエストに操作ユーザーの ID を添えて kernel イベントへ変換する
#[derive(new)]
pub struct CreateSpaceRequestWithOwnerId(UserId, CreateSpaceRequest);

impl From<CreateSpaceRequestWithOwnerId> for CreateSpace {
    fn from(value: CreateSpaceRequestWithOwnerId) -> Self {
        let CreateSpaceRequestWithOwnerId(
            owner_id,
            CreateSpaceRequest {
                title,
                address,
                hourly_rate,
                daily_rate,
                is_active,
            },
        ) = value;
        CreateSpace {
            owner_id,
            title,
            address,
            hourly_rate,
            daily_rate,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesResponse {
    pub items: Vec<SpaceResponse>,
}

impl From<Vec<ParkingSpace>> for SpacesResponse {
    fn from(value: Vec<ParkingSpace>) -> Self {
        Self {
            items: value.into_iter().map(SpaceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub space_id: SpaceId,
    pub owner_id: UserId,
    pub title: String,
    pub address: String,
    pub hourly_rate: f64,
    pub daily_rate: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ParkingSpace> for SpaceResponse {
    fn from(value: ParkingSpace) -> Self {
        let ParkingSpace {
            space_id,
            owner_id,
            title,
            address,
            hourly_rate,
            daily_rate,
            is_active,
            created_at,
        } = value;
        Self {
            space_id,
            owner_id,
            title,
            address,
            hourly_rate,
            daily_rate,
            is_active,
            created_at,
        }
    }
}
