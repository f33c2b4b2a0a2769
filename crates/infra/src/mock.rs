//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! dailydo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dailydo_domain::todo::{Todo, TodoContent, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

/// インメモリ実装の TodoRepository
///
/// ID はストアと同様に 1 から連番で採番する。
/// 実際のトランザクションは張らないが、Mutex により操作単位の
/// 一貫性を保証する。
#[derive(Clone)]
pub struct MockTodoRepository {
    todos:   Arc<Mutex<Vec<Todo>>>,
    next_id: Arc<Mutex<i64>>,
}

impl Default for MockTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self {
            todos:   Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// 保持している Todo の件数を返す（テストの検証用）
    pub fn len(&self) -> usize {
        self.todos.lock().unwrap().len()
    }

    /// Todo を保持していない場合に true を返す
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn insert(
        &self,
        content: &TodoContent,
        is_completed: bool,
    ) -> Result<Todo, InfraError> {
        let mut next_id = self.next_id.lock().unwrap();
        let id = TodoId::from_i64(*next_id);
        *next_id += 1;

        let todo = Todo::from_db(id, content.clone(), is_completed);
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn update(
        &self,
        id: TodoId,
        content: &TodoContent,
        is_completed: bool,
    ) -> Result<Option<Todo>, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let Some(existing) = todos.iter_mut().find(|t| t.id() == id) else {
            return Ok(None);
        };

        *existing = Todo::from_db(id, content.clone(), is_completed);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id() != id);
        Ok(todos.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn content(value: &str) -> TodoContent {
        TodoContent::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_insertはidを1から連番で採番する() {
        let sut = MockTodoRepository::new();

        let first = sut.insert(&content("buy milk"), false).await.unwrap();
        let second = sut.insert(&content("buy bread"), true).await.unwrap();

        assert_eq!(first.id().as_i64(), 1);
        assert_eq!(second.id().as_i64(), 2);
    }

    #[tokio::test]
    async fn test_find_by_idは存在しないidでnoneを返す() {
        let sut = MockTodoRepository::new();

        let found = sut.find_by_id(TodoId::from_i64(999_999)).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_updateは存在する行を全置換する() {
        let sut = MockTodoRepository::new();
        let created = sut.insert(&content("buy milk"), false).await.unwrap();

        let updated = sut
            .update(created.id(), &content("buy milk and bread"), true)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.content().as_str(), "buy milk and bread");
        assert!(updated.is_completed());
        assert_eq!(sut.len(), 1);
    }

    #[tokio::test]
    async fn test_updateは存在しない行でnoneを返す() {
        let sut = MockTodoRepository::new();

        let updated = sut
            .update(TodoId::from_i64(999_999), &content("anything"), false)
            .await
            .unwrap();

        assert_eq!(updated, None);
        assert!(sut.is_empty());
    }

    #[tokio::test]
    async fn test_deleteは2回目にfalseを返す() {
        let sut = MockTodoRepository::new();
        let created = sut.insert(&content("buy milk"), false).await.unwrap();

        assert!(sut.delete(created.id()).await.unwrap());
        assert!(!sut.delete(created.id()).await.unwrap());
        assert!(sut.is_empty());
    }

    #[test]
    fn test_モックはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockTodoRepository>();
    }
}
