//! # ルートハンドラ
//!
//! ウェルカムメッセージを返すエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /
//! ```

use axum::Json;
use serde::Serialize;

/// ウェルカムレスポンス
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// ルートエンドポイント
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the dailyDo todo app".to_string(),
    })
}
