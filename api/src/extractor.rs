use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::{AppError, AppResult};

use crate::session::AuthState;

/// サインイン済みであることが確認されたユーザー。
/// ハンドラはこの型を受け取ることで認証ゲート通過を前提にできる。
#[derive(Debug, Clone)]
pub struct AuthorizedUser {
    pub user: User,
}

impl AuthorizedUser {
    /// 認証ゲートを通過していなければ取り出せない
    pub fn from_auth(auth: &AuthState) -> AppResult<Self> {
        match (&auth.user, auth.loading) {
            (Some(user), false) => Ok(Self { user: user.clone() }),
            _ => Err(AppError::ForbiddenOperation),
        }
    }

    pub fn id(&self) -> UserId {
        self.user.user_id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn is_space_owner(&self) -> bool {
        self.user.role == Role::SpaceOwner
    }
}
