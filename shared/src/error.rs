use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("予約開始時刻が終了時刻より後になっています")]
    InvalidDateRange,
    #[error("スペースが選択されていません")]
    MissingSelection,
    #[error("料金は正の値である必要があります")]
    NonPositiveCost,
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("この操作は許可されていません")]
    ForbiddenOperation,
}

pub type AppResult<T> = Result<T, AppError>;
