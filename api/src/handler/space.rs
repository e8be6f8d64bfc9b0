use garde::Validate;
use kernel::model::id::SpaceId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::space::{
        CreateSpaceRequest, CreateSpaceRequestWithOwnerId, SpaceResponse, SpacesResponse,
    },
    session::SessionState,
};

/// スペースを登録する。登録したユーザーが所有者になる。
pub fn register_space(
    user: &AuthorizedUser,
    registry: &AppRegistry,
    req: CreateSpaceRequest,
) -> AppResult<SpaceResponse> {
    if !user.is_space_owner() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let event = CreateSpaceRequestWithOwnerId::new(user.id(), req);
    let space_id = registry.space_repository().create(event.into())?;

    tracing::info!(space_id = %space_id, "space registered");

    registry
        .space_repository()
        .find_by_id(space_id)?
        .map(SpaceResponse::from)
        .ok_or_else(|| AppError::EntityNotFound("登録したスペースが見つかりません".into()))
}

/// 検索ビュー向けに、利用可能なスペースの一覧を返す
pub fn show_space_list(
    _user: &AuthorizedUser,
    registry: &AppRegistry,
) -> AppResult<SpacesResponse> {
    registry
        .space_repository()
        .find_active()
        .map(SpacesResponse::from)
}

/// 自分が所有するスペースの一覧を返す（space_owner の my-spaces ビュー）
pub fn my_spaces(user: &AuthorizedUser, registry: &AppRegistry) -> AppResult<SpacesResponse> {
    registry
        .space_repository()
        .find_by_owner_id(user.id())
        .map(SpacesResponse::from)
}

/// 検索ビューでスペースを選択し、予約モーダルを開く
pub fn select_space(
    _user: &AuthorizedUser,
    session: &mut SessionState,
    registry: &AppRegistry,
    space_id: SpaceId,
) -> AppResult<()> {
    let space = registry
        .space_repository()
        .find_by_id(space_id)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("スペース（{}）が見つかりませんでした。", space_id))
        })?;

    if !space.is_active {
        return Err(AppError::UnprocessableEntity(format!(
            "スペース（{}）は現在利用できません（is_active = false）",
            space_id
        )));
    }

    session.select_space(space);
    Ok(())
}

/// 予約モーダルを閉じる（予約せずに戻った場合）
pub fn close_booking_modal(_user: &AuthorizedUser, session: &mut SessionState) {
    session.close_modal();
}

#[cfg(test)]
mod tests {
    use adapter::store::MemoryStore;
    use kernel::model::{id::UserId, role::Role, user::User};
    use shared::config::{AppConfig, AppMetaConfig, SeedConfig};
    use shared::env::Environment;

    use super::*;

    fn empty_registry() -> AppRegistry {
        let config = AppConfig {
            app: AppMetaConfig {
                env: Environment::Development,
            },
            seed: SeedConfig { enabled: false },
        };
        AppRegistry::new(MemoryStore::new(), &config)
    }

    fn user_with_role(role: Role) -> AuthorizedUser {
        AuthorizedUser {
            user: User {
                user_id: UserId::new(),
                user_name: "Priya Sharma".into(),
                email: "priya.sharma@example.in".into(),
                role,
            },
        }
    }

    fn create_request() -> CreateSpaceRequest {
        CreateSpaceRequest {
            title: "Covered slot".into(),
            address: "80 Feet Road, Bengaluru".into(),
            hourly_rate: 40.0,
            daily_rate: 500.0,
            is_active: true,
        }
    }

    #[test]
    fn test_register_space_sets_owner() -> anyhow::Result<()> {
        let registry = empty_registry();
        let owner = user_with_role(Role::SpaceOwner);

        let res = register_space(&owner, &registry, create_request())?;
        assert_eq!(res.owner_id, owner.id());

        let mine = my_spaces(&owner, &registry)?;
        assert_eq!(mine.items.len(), 1);
        Ok(())
    }

    #[test]
    fn test_register_space_rejects_car_owner() {
        let registry = empty_registry();
        let driver = user_with_role(Role::CarOwner);

        let res = register_space(&driver, &registry, create_request());
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
    }

    #[test]
    fn test_register_space_validation() {
        let registry = empty_registry();
        let owner = user_with_role(Role::SpaceOwner);

        let mut req = create_request();
        req.title = "".into();
        let res = register_space(&owner, &registry, req);
        assert!(matches!(res, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_select_space_opens_modal() -> anyhow::Result<()> {
        let registry = empty_registry();
        let owner = user_with_role(Role::SpaceOwner);
        let space = register_space(&owner, &registry, create_request())?;

        let driver = user_with_role(Role::CarOwner);
        let mut session = SessionState::new();
        select_space(&driver, &mut session, &registry, space.space_id)?;

        assert!(session.is_modal_open());
        assert_eq!(
            session.selected_space().map(|s| s.space_id),
            Some(space.space_id)
        );

        close_booking_modal(&driver, &mut session);
        assert!(!session.is_modal_open());
        assert!(session.selected_space().is_none());
        Ok(())
    }

    #[test]
    fn test_select_unknown_space() {
        let registry = empty_registry();
        let driver = user_with_role(Role::CarOwner);
        let mut session = SessionState::new();

        let res = select_space(&driver, &mut session, &registry, SpaceId::new());
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        assert!(!session.is_modal_open());
    }
}
