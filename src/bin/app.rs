use adapter::store::MemoryStore;
use anyhow::Result;
use api::extractor::AuthorizedUser;
use api::handler::{
    booking::{booking_history, submit_booking},
    space::{select_space, show_space_list},
};
use api::model::booking::CreateBookingRequest;
use api::session::{AuthState, Module, Screen, SessionState};
use chrono::{Duration, Utc};
use kernel::model::booking::{BookingType, PaymentMethod};
use kernel::model::role::Role;
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logger()?;
    bootstrap()
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// モックデータ上で予約ワークフローを一通り実行するデモ。
/// サーバーも永続化もないため、1 プロセス内のセッションとして動かす。
fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let store = MemoryStore::new();
    let registry = AppRegistry::new(store, &app_config);

    // ID プロバイダの代わりに、シードデータから car_owner のユーザー ID を得る
    let users = registry.user_repository().find_all()?;
    let driver_id = users
        .iter()
        .find(|u| u.role == Role::CarOwner)
        .map(|u| u.user_id)
        .expect("seed data must contain a car owner");

    // 認証ゲート: ID プロバイダが user を返すまでの分岐を再現する。
    // サインイン中のユーザーは ID からストア上の User を引き直す。
    let mut auth = AuthState {
        loading: true,
        user: None,
    };
    tracing::debug!(screen = ?auth.screen(), "loading ParkSpace");
    auth.loading = false;
    auth.user = registry.user_repository().find_current_user(driver_id)?;
    assert_eq!(auth.screen(), Screen::Main);

    let user = AuthorizedUser::from_auth(&auth)?;
    let mut session = SessionState::new();
    tracing::info!(
        user = %user.user.user_name,
        module = session.module().as_ref(),
        tab = session.tab().as_ref(),
        "session started"
    );

    // 検索ビューからスペースを選択して予約する
    let spaces = show_space_list(&user, &registry)?;
    tracing::info!(count = spaces.items.len(), "active spaces");
    let target = spaces
        .items
        .first()
        .expect("seed data must contain an active space");

    select_space(&user, &mut session, &registry, target.space_id)?;

    let vehicle = registry
        .vehicle_repository()
        .find_by_owner_id(user.id())?
        .into_iter()
        .next()
        .expect("seed data must contain a vehicle for the car owner");

    let start = Utc::now() + Duration::days(1);
    let booking = submit_booking(
        &user,
        &mut session,
        &registry,
        CreateBookingRequest {
            space_id: target.space_id,
            vehicle_id: vehicle.vehicle_id,
            start_time: start,
            end_time: start + Duration::days(1),
            total_cost: target.daily_rate,
            booking_type: BookingType::Daily,
            payment_method: PaymentMethod::default(),
            special_instructions: Some("Near the gate, please keep the slot lit".into()),
        },
    )?;
    tracing::info!("booking:\n{}", serde_json::to_string_pretty(&booking)?);

    // 履歴ビュー: car_owner としての自分の予約一覧
    let history = booking_history(&user, &registry)?;
    tracing::info!(count = history.items.len(), "my bookings");

    // space_owner モジュールへ切り替えるとタブはデフォルトに戻る
    session.set_module(Module::SpaceOwner);
    tracing::info!(
        module = session.module().as_ref(),
        tab = session.tab().as_ref(),
        "switched module"
    );

    Ok(())
}
