//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 リクエスト 1 ステートメント**: 各操作は単一の SQL 文で完結し、
//!   複数操作にまたがるトランザクションは張らない。一貫性はストアの
//!   トランザクション保証に委ねる
//! - **存在チェックと更新の一体化**: `UPDATE .. RETURNING` / `DELETE` の
//!   影響行数で not-found を判定する。アプリケーション側のロックや
//!   楽観的ロックは行わず、同一 ID への同時更新は last-writer-wins

use async_trait::async_trait;
use dailydo_domain::todo::{Todo, TodoContent, TodoId};
use sqlx::PgPool;

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo の CRUD 操作を定義する。API 層はこのトレイト経由でストアに
/// アクセスし、テストではインメモリ実装に差し替える。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo を挿入し、採番された ID を含むエンティティを返す
    async fn insert(
        &self,
        content: &TodoContent,
        is_completed: bool,
    ) -> Result<Todo, InfraError>;

    /// 全 Todo を取得する（並び順はストア依存で未指定）
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// content と is_completed を全置換で更新する
    ///
    /// 該当行が存在しない場合は `None` を返す。
    async fn update(
        &self,
        id: TodoId,
        content: &TodoContent,
        is_completed: bool,
    ) -> Result<Option<Todo>, InfraError>;

    /// Todo を削除する
    ///
    /// 行が削除された場合は `true`、該当行が存在しない場合は `false` を返す。
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError>;
}

/// todos テーブルの行
///
/// DB の行とドメインエンティティの変換点。NOT NULL 制約と CHECK 制約により
/// content は常に有効な値が格納されている。
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:           i64,
    content:      String,
    is_completed: bool,
}

impl TodoRow {
    fn into_entity(self) -> Todo {
        // DB の CHECK 制約により content は常に有効
        let content =
            TodoContent::new(self.content).expect("DB に格納された content は常に有効");
        Todo::from_db(TodoId::from_i64(self.id), content, self.is_completed)
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(
        &self,
        content: &TodoContent,
        is_completed: bool,
    ) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (content, is_completed)
            VALUES ($1, $2)
            RETURNING id, content, is_completed
            "#,
        )
        .bind(content.as_str())
        .bind(is_completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_entity())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, content, is_completed
            FROM todos
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_entity).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, content, is_completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_entity))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: TodoId,
        content: &TodoContent,
        is_completed: bool,
    ) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET content = $2, is_completed = $3
            WHERE id = $1
            RETURNING id, content, is_completed
            "#,
        )
        .bind(id.as_i64())
        .bind(content.as_str())
        .bind(is_completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_entity))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
