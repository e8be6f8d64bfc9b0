use garde::Validate;
use kernel::model::booking::event::CreateBooking;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking::{BookingResponse, BookingsResponse, CreateBookingRequest},
    session::SessionState,
};

/// 予約フォームの送信を処理する。
///
/// セッションで選択中のスペースに対して予約レコードを一度だけ作成し、
/// 一覧の先頭に追加してモーダルを閉じる。検証に失敗した場合は
/// エラーを返すだけで、選択状態もモーダルも変更しない。
pub fn submit_booking(
    user: &AuthorizedUser,
    session: &mut SessionState,
    registry: &AppRegistry,
    req: CreateBookingRequest,
) -> AppResult<BookingResponse> {
    req.validate(&())?;

    let selected = session.selected_space().ok_or(AppError::MissingSelection)?;
    if selected.space_id != req.space_id {
        return Err(AppError::UnprocessableEntity(format!(
            "選択中のスペース（{}）とフォームのスペース（{}）が一致しません",
            selected.space_id, req.space_id
        )));
    }
    if req.start_time >= req.end_time {
        return Err(AppError::InvalidDateRange);
    }
    if req.total_cost <= 0.0 {
        return Err(AppError::NonPositiveCost);
    }

    let event = CreateBooking::new(
        req.space_id,
        req.vehicle_id,
        user.id(),
        req.start_time,
        req.end_time,
        req.total_cost,
        req.booking_type,
        req.payment_method,
        req.special_instructions,
    );

    let booking_id = registry.booking_repository().create(event)?;

    // 作成に成功したときだけ選択・モーダルをクリアする
    session.close_modal();

    tracing::info!(
        booking_id = %booking_id,
        space_id = %req.space_id,
        "booking created"
    );

    registry
        .booking_repository()
        .find_by_id(booking_id)
        .map(BookingResponse::from)
}

/// 予約履歴を取得する。
/// car_owner は自分が予約した一覧、space_owner は自分のスペースへの
/// 予約一覧を、どちらも新しい順で受け取る。
pub fn booking_history(
    user: &AuthorizedUser,
    registry: &AppRegistry,
) -> AppResult<BookingsResponse> {
    registry
        .booking_repository()
        .find_for_role(user.role(), user.id())
        .map(BookingsResponse::from)
}
