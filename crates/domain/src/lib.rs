//! # dailyDo ドメイン層
//!
//! Todo エンティティと値オブジェクト、およびドメインエラーを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`todo::TodoId`] / [`todo::TodoContent`] は
//!   プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行し、
//!   不正な値がドメインに入り込むことを防ぐ
//! - **インフラ非依存**: このクレートはデータベースや HTTP に依存しない
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//!   ↘     ↓
//!      domain
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
pub use todo::{Todo, TodoContent, TodoId};
