use chrono::Utc;
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, Booking, BookingStatus, PaymentStatus},
    id::{BookingId, UserId},
    role::Role,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::store::MemoryStore;

#[derive(new)]
pub struct BookingRepositoryImpl {
    store: MemoryStore,
}

impl BookingRepository for BookingRepositoryImpl {
    // 予約操作を行う
    fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        // 事前のチェックとして、以下を調べる。
        // - 指定のスペース ID をもつスペースが存在するか
        // - 存在した場合、そのスペースは利用可能（is_active）か
        //
        // 両方が Yes だった場合のみ予約を作成する。
        // 時間帯の重複チェックはこのコアでは行わない。
        let space_owner_id = {
            let spaces = self.store.spaces();
            let space = spaces
                .iter()
                .find(|s| s.space_id == event.space_id)
                .ok_or_else(|| {
                    AppError::EntityNotFound(format!(
                        "スペース（{}）が見つかりませんでした。",
                        event.space_id
                    ))
                })?;

            if !space.is_active {
                return Err(AppError::UnprocessableEntity(format!(
                    "スペース（{}）は現在利用できません（is_active = false）",
                    event.space_id
                )));
            }

            // space_owner_id はここで一度だけ転記する
            space.owner_id
        };

        let now = Utc::now();
        let booking_id = BookingId::new();
        let booking = Booking {
            booking_id,
            space_id: event.space_id,
            vehicle_id: event.vehicle_id,
            car_owner_id: event.car_owner_id,
            space_owner_id,
            start_time: event.start_time,
            end_time: event.end_time,
            total_cost: event.total_cost,
            booking_type: event.booking_type,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method: event.payment_method,
            special_instructions: event.special_instructions,
            created_at: now,
            updated_at: now,
        };

        // 新しい予約は一覧の先頭に追加する（新しい順）
        self.store.bookings_mut().insert(0, booking);

        Ok(booking_id)
    }

    fn find_by_id(&self, booking_id: BookingId) -> AppResult<Booking> {
        self.store
            .bookings()
            .iter()
            .find(|b| b.booking_id == booking_id)
            .cloned()
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("予約（{}）が見つかりませんでした。", booking_id))
            })
    }

    // 役割に応じた予約履歴を取得する
    fn find_for_role(&self, role: Role, user_id: UserId) -> AppResult<Vec<Booking>> {
        let bookings = self.store.bookings();
        let filtered = bookings
            .iter()
            .filter(|b| match role {
                Role::CarOwner => b.car_owner_id == user_id,
                Role::SpaceOwner => b.space_owner_id == user_id,
            })
            .cloned()
            .collect();
        Ok(filtered)
    }

    fn find_all(&self) -> AppResult<Vec<Booking>> {
        Ok(self.store.bookings().clone())
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::{
        booking::{BookingType, PaymentMethod},
        id::{SpaceId, VehicleId},
        space::event::CreateSpace,
    };
    use kernel::repository::space::SpaceRepository;

    use super::*;
    use crate::repository::space::SpaceRepositoryImpl;

    fn create_event(space_id: SpaceId, car_owner_id: UserId) -> CreateBooking {
        let start = Utc::now();
        CreateBooking::new(
            space_id,
            VehicleId::new(),
            car_owner_id,
            start,
            start + chrono::Duration::days(1),
            500.0,
            BookingType::Daily,
            PaymentMethod::Upi,
            None,
        )
    }

    #[test]
    fn test_create_booking_copies_space_owner() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let space_repo = SpaceRepositoryImpl::new(store.clone());
        let repo = BookingRepositoryImpl::new(store);

        let owner_id = UserId::new();
        let space_id = space_repo.create(CreateSpace::new(
            owner_id,
            "Test Space".into(),
            "Test Address".into(),
            40.0,
            500.0,
            true,
        ))?;

        let car_owner_id = UserId::new();
        let booking_id = repo.create(create_event(space_id, car_owner_id))?;

        let booking = repo.find_by_id(booking_id)?;
        assert_eq!(booking.space_owner_id, owner_id);
        assert_eq!(booking.car_owner_id, car_owner_id);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        Ok(())
    }

    #[test]
    fn test_create_booking_prepends() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let space_repo = SpaceRepositoryImpl::new(store.clone());
        let repo = BookingRepositoryImpl::new(store);

        let space_id = space_repo.create(CreateSpace::new(
            UserId::new(),
            "Test Space".into(),
            "Test Address".into(),
            40.0,
            500.0,
            true,
        ))?;

        let car_owner_id = UserId::new();
        let first = repo.create(create_event(space_id, car_owner_id))?;
        let second = repo.create(create_event(space_id, car_owner_id))?;
        let third = repo.create(create_event(space_id, car_owner_id))?;

        let all = repo.find_all()?;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].booking_id, third);
        assert_eq!(all[1].booking_id, second);
        assert_eq!(all[2].booking_id, first);
        Ok(())
    }

    #[test]
    fn test_create_booking_missing_space() {
        let repo = BookingRepositoryImpl::new(MemoryStore::new());
        let res = repo.create(create_event(SpaceId::new(), UserId::new()));
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[test]
    fn test_create_booking_inactive_space() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let space_repo = SpaceRepositoryImpl::new(store.clone());
        let repo = BookingRepositoryImpl::new(store);

        let space_id = space_repo.create(CreateSpace::new(
            UserId::new(),
            "Closed Space".into(),
            "Test Address".into(),
            40.0,
            500.0,
            false,
        ))?;

        let res = repo.create(create_event(space_id, UserId::new()));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }

    #[test]
    fn test_find_for_role_filters_and_keeps_order() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let space_repo = SpaceRepositoryImpl::new(store.clone());
        let repo = BookingRepositoryImpl::new(store);

        let owner_a = UserId::new();
        let owner_b = UserId::new();
        let space_a = space_repo.create(CreateSpace::new(
            owner_a,
            "Space A".into(),
            "Address A".into(),
            40.0,
            500.0,
            true,
        ))?;
        let space_b = space_repo.create(CreateSpace::new(
            owner_b,
            "Space B".into(),
            "Address B".into(),
            60.0,
            700.0,
            true,
        ))?;

        let driver_x = UserId::new();
        let driver_y = UserId::new();
        let b1 = repo.create(create_event(space_a, driver_x))?;
        let b2 = repo.create(create_event(space_b, driver_x))?;
        let b3 = repo.create(create_event(space_a, driver_y))?;

        // driver_x の履歴は新しい順のまま b2, b1
        let for_x = repo.find_for_role(Role::CarOwner, driver_x)?;
        assert_eq!(
            for_x.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
            vec![b2, b1]
        );

        // owner_a の履歴は b3, b1
        let for_owner_a = repo.find_for_role(Role::SpaceOwner, owner_a)?;
        assert_eq!(
            for_owner_a.iter().map(|b| b.booking_id).collect::<Vec<_>>(),
            vec![b3, b1]
        );

        // 絞り込みは元の一覧を変更しない
        assert_eq!(repo.find_all()?.len(), 3);
        Ok(())
    }
}
