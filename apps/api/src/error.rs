//! # dailyDo API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## レスポンス形式
//!
//! すべてのエラーレスポンスは `{"detail": "<メッセージ>"}` の形式で返す。
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `UnprocessableEntity` | 422 Unprocessable Entity |
//! | `NotFound` | 404 Not Found |
//! | `Infra` | 500 Internal Server Error |
//!
//! ストア/接続系の失敗は詳細をログに残し、クライアントには
//! 一般的なメッセージのみを返す。リトライは行わない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dailydo_domain::DomainError;
use dailydo_infra::InfraError;
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンスボディ
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// dailyDo API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リソースが見つからない
    ///
    /// ペイロードの文字列がそのままクライアント向けの detail になる。
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 入力値がフィールド制約に違反している
    ///
    /// ストアへの書き込みを試みる前に検出され、そのまま返される。
    #[error("バリデーションエラー: {0}")]
    UnprocessableEntity(String),

    /// インフラエラー
    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::UnprocessableEntity(msg),
            DomainError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::UnprocessableEntity(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            ApiError::Infra(e) => {
                tracing::error!(error = %e, span_trace = %e.span_trace(), "インフラエラー");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
