use chrono::{Duration, Utc};
use kernel::model::{
    booking::{Booking, BookingStatus, BookingType, PaymentMethod, PaymentStatus},
    id::{BookingId, SpaceId, UserId, VehicleId},
    role::Role,
    space::ParkingSpace,
    user::User,
    vehicle::Vehicle,
};

use crate::store::MemoryStore;

/// デモ・テスト用のモックデータを投入する。
/// 既にデータがある場合は何もしない。
pub fn load(store: &MemoryStore) {
    if !store.users().is_empty() {
        return;
    }

    let now = Utc::now();

    let rajesh = User {
        user_id: UserId::new(),
        user_name: "Rajesh Kumar".into(),
        email: "rajesh.kumar@example.in".into(),
        role: Role::CarOwner,
    };
    let priya = User {
        user_id: UserId::new(),
        user_name: "Priya Sharma".into(),
        email: "priya.sharma@example.in".into(),
        role: Role::SpaceOwner,
    };
    let amit = User {
        user_id: UserId::new(),
        user_name: "Amit Patel".into(),
        email: "amit.patel@example.in".into(),
        role: Role::SpaceOwner,
    };

    let koramangala = ParkingSpace {
        space_id: SpaceId::new(),
        owner_id: priya.user_id,
        title: "Covered slot near Koramangala 5th Block".into(),
        address: "80 Feet Road, Koramangala, Bengaluru".into(),
        hourly_rate: 40.0,
        daily_rate: 500.0,
        is_active: true,
        created_at: now - Duration::days(30),
    };
    let andheri = ParkingSpace {
        space_id: SpaceId::new(),
        owner_id: amit.user_id,
        title: "Basement parking, Andheri West".into(),
        address: "Veera Desai Road, Andheri West, Mumbai".into(),
        hourly_rate: 60.0,
        daily_rate: 700.0,
        is_active: true,
        created_at: now - Duration::days(12),
    };
    let closed_lot = ParkingSpace {
        space_id: SpaceId::new(),
        owner_id: amit.user_id,
        title: "Open lot, Sector 18 Noida".into(),
        address: "Sector 18, Noida".into(),
        hourly_rate: 30.0,
        daily_rate: 350.0,
        is_active: false,
        created_at: now - Duration::days(60),
    };

    let swift = Vehicle {
        vehicle_id: VehicleId::new(),
        owner_id: rajesh.user_id,
        make_model: "Maruti Suzuki Swift".into(),
        license_plate: "KA-01-AB-1234".into(),
        created_at: now - Duration::days(45),
    };

    // 既存の予約を 1 件だけ入れておく（履歴ビューの初期表示用）
    let past_booking = Booking {
        booking_id: BookingId::new(),
        space_id: koramangala.space_id,
        vehicle_id: swift.vehicle_id,
        car_owner_id: rajesh.user_id,
        space_owner_id: koramangala.owner_id,
        start_time: now - Duration::days(7),
        end_time: now - Duration::days(6),
        total_cost: 500.0,
        booking_type: BookingType::Daily,
        status: BookingStatus::Completed,
        payment_status: PaymentStatus::Paid,
        payment_method: PaymentMethod::Upi,
        special_instructions: None,
        created_at: now - Duration::days(8),
        updated_at: now - Duration::days(6),
    };

    store.users_mut().extend([rajesh, priya, amit]);
    store
        .spaces_mut()
        .extend([koramangala, andheri, closed_lot]);
    store.vehicles_mut().push(swift);
    store.bookings_mut().push(past_booking);
}
