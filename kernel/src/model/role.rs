use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// ユーザーの役割。
/// car_owner はスペースを予約する側、space_owner はスペースを貸す側。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    CarOwner,
    SpaceOwner,
}
