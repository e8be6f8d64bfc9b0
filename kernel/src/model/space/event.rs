use derive_new::new;

use crate::model::id::UserId;

#[derive(new, Debug)]
pub struct CreateSpace {
    pub owner_id: UserId,
    pub title: String,
    pub address: String,
    pub hourly_rate: f64,
    pub daily_rate: f64,
    pub is_active: bool,
}
