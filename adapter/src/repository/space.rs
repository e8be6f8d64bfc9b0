use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{SpaceId, UserId},
    space::{event::CreateSpace, ParkingSpace},
};
use kernel::repository::space::SpaceRepository;
use shared::error::AppResult;

use crate::store::MemoryStore;

#[derive(new)]
pub struct SpaceRepositoryImpl {
    store: MemoryStore,
}

impl SpaceRepository for SpaceRepositoryImpl {
    fn create(&self, event: CreateSpace) -> AppResult<SpaceId> {
        let space_id = SpaceId::new();
        let space = ParkingSpace {
            space_id,
            owner_id: event.owner_id,
            title: event.title,
            address: event.address,
            hourly_rate: event.hourly_rate,
            daily_rate: event.daily_rate,
            is_active: event.is_active,
            created_at: Utc::now(),
        };
        self.store.spaces_mut().insert(0, space);
        Ok(space_id)
    }

    fn find_active(&self) -> AppResult<Vec<ParkingSpace>> {
        Ok(self
            .store
            .spaces()
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect())
    }

    fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<ParkingSpace>> {
        Ok(self
            .store
            .spaces()
            .iter()
            .find(|s| s.space_id == space_id)
            .cloned())
    }

    fn find_by_owner_id(&self, owner_id: UserId) -> AppResult<Vec<ParkingSpace>> {
        Ok(self
            .store
            .spaces()
            .iter()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_space() -> anyhow::Result<()> {
        let repo = SpaceRepositoryImpl::new(MemoryStore::new());

        let owner_id = UserId::new();
        let space_id = repo.create(CreateSpace::new(
            owner_id,
            "Test Space".into(),
            "Test Address".into(),
            40.0,
            500.0,
            true,
        ))?;

        let res = repo.find_active()?;
        assert_eq!(res.len(), 1);

        let res = repo.find_by_id(space_id)?;
        assert!(res.is_some());

        let ParkingSpace {
            space_id: id,
            owner_id: owned_by,
            title,
            address,
            hourly_rate,
            daily_rate,
            is_active,
            ..
        } = res.unwrap();
        assert_eq!(id, space_id);
        assert_eq!(owned_by, owner_id);
        assert_eq!(title, "Test Space");
        assert_eq!(address, "Test Address");
        assert_eq!(hourly_rate, 40.0);
        assert_eq!(daily_rate, 500.0);
        assert!(is_active);
        Ok(())
    }

    #[test]
    fn test_inactive_space_hidden_from_search() -> anyhow::Result<()> {
        let repo = SpaceRepositoryImpl::new(MemoryStore::new());

        let owner_id = UserId::new();
        repo.create(CreateSpace::new(
            owner_id,
            "Closed Space".into(),
            "Test Address".into(),
            30.0,
            350.0,
            false,
        ))?;

        // 検索ビューには出ないが、所有者の一覧には出る
        assert!(repo.find_active()?.is_empty());
        assert_eq!(repo.find_by_owner_id(owner_id)?.len(), 1);
        Ok(())
    }
}
