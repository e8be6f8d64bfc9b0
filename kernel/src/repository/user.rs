use shared::error::AppResult;

use crate::model::{id::UserId, user::User};

/// ユーザー情報の取得のみを提供する。
/// 認証自体は外部の ID プロバイダの責務であり、このコアの範囲外。
pub trait UserRepository: Send + Sync {
    fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>>;
    fn find_all(&self) -> AppResult<Vec<User>>;
}
