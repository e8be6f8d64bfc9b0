use shared::error::AppResult;

use crate::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, UserId},
    role::Role,
};

/// 予約一覧はストアが所有し、取得側は複製されたスナップショットを受け取る。
/// 書き込みは create のみ。更新・削除のパスは存在しない。
pub trait BookingRepository: Send + Sync {
    /// 予約操作を行う。
    /// 新しい予約は一覧の先頭に追加される（新しい順）。
    fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    /// booking_id から予約を取得する
    fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking>;
    /// 役割に応じた予約履歴を取得する。
    /// car_owner は car_owner_id、space_owner は space_owner_id で絞り込む。
    /// 一覧の相対順序（新しい順）は維持される。
    fn find_for_role(&self, role: Role, user_id: UserId) -> AppResult<Vec<Booking>>;
    /// すべての予約を取得する（新しい順）
    fn find_all(&self) -> AppResult<Vec<Booking>>;
}
