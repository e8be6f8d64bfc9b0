use derive_new::new;
use kernel::model::{id::UserId, user::User};
use kernel::repository::user::UserRepository;
use shared::error::AppResult;

use crate::store::MemoryStore;

#[derive(new)]
pub struct UserRepositoryImpl {
    store: MemoryStore,
}

impl UserRepository for UserRepositoryImpl {
    fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .store
            .users()
            .iter()
            .find(|u| u.user_id == current_user_id)
            .cloned())
    }

    fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.store.users().clone())
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::role::Role;

    use super::*;
    use crate::store::seed;

    #[test]
    fn test_find_current_user() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        seed::load(&store);
        let repo = UserRepositoryImpl::new(store);

        let users = repo.find_all()?;
        assert!(!users.is_empty());

        // サインイン中のユーザーを ID から引き直せる
        let driver = users
            .iter()
            .find(|u| u.role == Role::CarOwner)
            .expect("seed data must contain a car owner");
        let found = repo.find_current_user(driver.user_id)?;
        assert_eq!(found.as_ref(), Some(driver));

        // 存在しない ID は None
        assert!(repo.find_current_user(UserId::new())?.is_none());
        Ok(())
    }
}
