use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingStatus, BookingType, PaymentMethod, PaymentStatus},
    id::{BookingId, SpaceId, UserId, VehicleId},
};
use serde::{Deserialize, Serialize};

/// 予約フォームの送信ペイロード。
/// total_cost はフォーム層で計算済みの値をそのまま受け取る。
/// payment_method は未指定なら upi になる。
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub space_id: SpaceId,
    #[garde(skip)]
    pub vehicle_id: VehicleId,
    #[garde(skip)]
    pub start_time: DateTime<Utc>,
    #[garde(skip)]
    pub end_time: DateTime<Utc>,
    #[garde(skip)]
    pub total_cost: f64,
    #[garde(skip)]
    pub booking_type: BookingType,
    #[garde(skip)]
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[garde(inner(length(max = 500)))]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub space_id: SpaceId,
    pub vehicle_id: VehicleId,
    pub car_owner_id: UserId,
    pub space_owner_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_cost: f64,
    pub booking_type: BookingType,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            space_id,
            vehicle_id,
            car_owner_id,
            space_owner_id,
            start_time,
            end_time,
            total_cost,
            booking_type,
            status,
            payment_status,
            payment_method,
            special_instructions,
            created_at,
            updated_at,
        } = value;
        Self {
            booking_id,
            space_id,
            vehicle_id,
            car_owner_id,
            space_owner_id,
            start_time,
            end_time,
            total_cost,
            booking_type,
            status,
            payment_status,
            payment_method,
            special_instructions,
            created_at,
            updated_at,
        }
    }
}
