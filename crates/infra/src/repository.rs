//! # リポジトリ実装
//!
//! ドメインエンティティの永続化を担当するリポジトリを定義する。

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
