use derive_new::new;

use crate::model::id::UserId;

#[derive(new, Debug)]
pub struct CreateVehicle {
    pub owner_id: UserId,
    pub make_model: String,
    pub license_plate: String,
}
