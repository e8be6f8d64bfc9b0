use shared::error::AppResult;

use crate::model::{
    id::{SpaceId, UserId},
    space::{event::CreateSpace, ParkingSpace},
};

pub trait SpaceRepository: Send + Sync {
    fn create(&self, event: CreateSpace) -> AppResult<SpaceId>;
    /// 検索ビュー向けに、利用可能なスペースを登録の新しい順で返す
    fn find_active(&self) -> AppResult<Vec<ParkingSpace>>;
    fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<ParkingSpace>>;
    /// space_owner が所有するスペースの一覧を返す
    fn find_by_owner_id(&self, owner_id: UserId) -> AppResult<Vec<ParkingSpace>>;
}
