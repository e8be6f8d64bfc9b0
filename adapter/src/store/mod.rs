pub mod seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use kernel::model::{booking::Booking, space::ParkingSpace, user::User, vehicle::Vehicle};

/// プロセスメモリ上のデータストア。
/// 永続化は行わない。プロセス終了とともにすべて失われる。
///
/// 実行モデルは単一スレッドのイベント駆動であり、書き込みは
/// 予約送信ハンドラの一箇所のみ。RwLock は Arc<dyn ...Repository> 越しに
/// &self で変更するための内部可変性として使っている。
#[derive(Clone)]
pub struct MemoryStore(Arc<StoreInner>);

struct StoreInner {
    users: RwLock<Vec<User>>,
    spaces: RwLock<Vec<ParkingSpace>>,
    vehicles: RwLock<Vec<Vehicle>>,
    // 先頭が最新。予約は常に insert(0, ..) で追加する
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self(Arc::new(StoreInner {
            users: RwLock::new(Vec::new()),
            spaces: RwLock::new(Vec::new()),
            vehicles: RwLock::new(Vec::new()),
            bookings: RwLock::new(Vec::new()),
        }))
    }

    pub(crate) fn users(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.0.users.read().expect("users lock poisoned")
    }

    pub(crate) fn users_mut(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.0.users.write().expect("users lock poisoned")
    }

    pub(crate) fn spaces(&self) -> RwLockReadGuard<'_, Vec<ParkingSpace>> {
        self.0.spaces.read().expect("spaces lock poisoned")
    }

    pub(crate) fn spaces_mut(&self) -> RwLockWriteGuard<'_, Vec<ParkingSpace>> {
        self.0.spaces.write().expect("spaces lock poisoned")
    }

    pub(crate) fn vehicles(&self) -> RwLockReadGuard<'_, Vec<Vehicle>> {
        self.0.vehicles.read().expect("vehicles lock poisoned")
    }

    pub(crate) fn vehicles_mut(&self) -> RwLockWriteGuard<'_, Vec<Vehicle>> {
        self.0.vehicles.write().expect("vehicles lock poisoned")
    }

    pub(crate) fn bookings(&self) -> RwLockReadGuard<'_, Vec<Booking>> {
        self.0.bookings.read().expect("bookings lock poisoned")
    }

    pub(crate) fn bookings_mut(&self) -> RwLockWriteGuard<'_, Vec<Booking>> {
        self.0.bookings.write().expect("bookings lock poisoned")
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
