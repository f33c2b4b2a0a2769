//! # Todo ハンドラ
//!
//! Todo の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /todos/` - Todo 作成
//! - `GET /todos/` - Todo 一覧
//! - `GET /todos/{id}` - Todo 取得（存在しない場合は `null` ボディ）
//! - `PUT /todos/{id}` - Todo 更新（content と is_completed の全置換）
//! - `DELETE /todos/{id}` - Todo 削除
//!
//! ## 既知の非対称性
//!
//! get-by-id は該当行が無いとき 404 ではなく 200 + `null` を返す。
//! update/delete は 404 を返す。意図的にこの非対称を維持している。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use dailydo_domain::todo::{Todo, TodoContent, TodoId};
use dailydo_infra::repository::TodoRepository;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Todo API の共有状態
///
/// リポジトリ（ストアクライアント）は起動時に構築し、
/// ルーターに注入する。モジュールレベルのシングルトンは持たない。
pub struct TodoState {
    pub repository: Arc<dyn TodoRepository>,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成・更新リクエスト
///
/// `id` はサーバーが採番するため受け取らない（送られても無視される）。
/// `is_completed` を省略した場合は `false` になる（全置換のため、
/// 更新時も以前の値は引き継がれない）。
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub content:      String,
    #[serde(default)]
    pub is_completed: bool,
}

/// Todo DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoDto {
    pub id:           i64,
    pub content:      String,
    pub is_completed: bool,
}

impl TodoDto {
    fn from_entity(todo: &Todo) -> Self {
        Self {
            id:           todo.id().as_i64(),
            content:      todo.content().as_str().to_string(),
            is_completed: todo.is_completed(),
        }
    }
}

/// 削除成功レスポンス
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

// --- ハンドラ ---

/// POST /todos/
///
/// Todo を作成する。バリデーションはストアへの書き込み前に行う。
///
/// ## レスポンス
///
/// - `200 OK`: 採番された id を含む Todo
/// - `422 Unprocessable Entity`: content の文字数制約違反
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    Json(payload): Json<TodoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let content = TodoContent::new(payload.content)?;

    let todo = state
        .repository
        .insert(&content, payload.is_completed)
        .await?;

    Ok((StatusCode::OK, Json(TodoDto::from_entity(&todo))))
}

/// GET /todos/
///
/// 全 Todo を取得する。並び順は未指定（ストア依存）。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.repository.find_all().await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from_entity).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /todos/{id}
///
/// ID で Todo を取得する。
///
/// ## レスポンス
///
/// - `200 OK`: Todo、または該当行が無い場合は `null`
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state.repository.find_by_id(TodoId::from_i64(id)).await?;

    let dto = todo.as_ref().map(TodoDto::from_entity);
    Ok((StatusCode::OK, Json(dto)))
}

/// PUT /todos/{id}
///
/// content と is_completed をペイロードの値で全置換する。
/// 部分更新はサポートしない。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の Todo
/// - `404 Not Found`: 該当行が存在しない
/// - `422 Unprocessable Entity`: content の文字数制約違反
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i64>,
    Json(payload): Json<TodoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let content = TodoContent::new(payload.content)?;

    let updated = state
        .repository
        .update(TodoId::from_i64(id), &content, payload.is_completed)
        .await?;

    match updated {
        Some(todo) => Ok((StatusCode::OK, Json(TodoDto::from_entity(&todo)))),
        None => Err(ApiError::NotFound("No task found".to_string())),
    }
}

/// DELETE /todos/{id}
///
/// Todo を削除する。
///
/// ## レスポンス
///
/// - `200 OK`: 削除確認メッセージ
/// - `404 Not Found`: 該当行が存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.repository.delete(TodoId::from_i64(id)).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task Not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Task successfully deleted".to_string(),
        }),
    ))
}
