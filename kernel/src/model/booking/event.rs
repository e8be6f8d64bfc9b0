use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::{
    booking::{BookingType, PaymentMethod},
    id::{SpaceId, UserId, VehicleId},
};

/// 予約フォームの送信内容。
/// space_owner_id は含まない。対象スペースから作成時に転記する。
#[derive(new, Debug)]
pub struct CreateBooking {
    pub space_id: SpaceId,
    pub vehicle_id: VehicleId,
    pub car_owner_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_cost: f64,
    pub booking_type: BookingType,
    pub payment_method: PaymentMethod,
    pub special_instructions: Option<String>,
}
