//! # Todo
//!
//! Todo エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`TodoId`] はストアが採番する整数をラップし、
//!   [`TodoContent`] は生成時に文字数制約を検証する
//! - **不変条件の構造的強制**: `TodoContent` を経由しない限り content を
//!   作れないため、永続化される値は常に制約を満たす
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use dailydo_domain::todo::{Todo, TodoContent, TodoId};
//!
//! let todo = Todo::from_db(TodoId::from_i64(1), TodoContent::new("buy milk")?, false);
//! assert_eq!(todo.content().as_str(), "buy milk");
//! assert!(!todo.is_completed());
//! # Ok(())
//! # }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// content の最小文字数
pub const CONTENT_MIN_CHARS: usize = 3;

/// content の最大文字数
pub const CONTENT_MAX_CHARS: usize = 54;

/// Todo ID（一意識別子）
///
/// ストア（`BIGSERIAL`）が採番する整数を Newtype パターンでラップする。
/// アプリケーション側で新規採番することはないため、`new()` は提供しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の整数から Todo ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Todo の内容（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoContent(String);

impl TodoContent {
    /// Todo の内容を作成する
    ///
    /// # バリデーション
    ///
    /// - 文字数（バイト数ではない）が 3 文字以上 54 文字以内であること
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は [`DomainError::Validation`] を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let chars = value.chars().count();

        if chars < CONTENT_MIN_CHARS {
            return Err(DomainError::Validation(format!(
                "content は {CONTENT_MIN_CHARS} 文字以上である必要があります"
            )));
        }

        if chars > CONTENT_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "content は {CONTENT_MAX_CHARS} 文字以内である必要があります"
            )));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo エンティティ
///
/// 短いテキストタスクと完了フラグを持つ単一のドメインエンティティ。
/// 他のエンティティとのリレーションは存在しない。
///
/// 更新は全置換（content と is_completed を payload の値で上書き）であり、
/// 部分更新はサポートしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:           TodoId,
    content:      TodoContent,
    is_completed: bool,
}

impl Todo {
    /// DB から取得した値でエンティティを復元する
    ///
    /// ID はストアが採番済みであることを前提とする。
    pub fn from_db(id: TodoId, content: TodoContent, is_completed: bool) -> Self {
        Self {
            id,
            content,
            is_completed,
        }
    }

    /// ID を取得する
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// 内容を取得する
    pub fn content(&self) -> &TodoContent {
        &self.content
    }

    /// 完了フラグを取得する
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // ===== TodoContent のバリデーション =====

    #[rstest]
    #[case::最小境界の3文字("abc")]
    #[case::最大境界の54文字(&"a".repeat(54))]
    #[case::通常のタスク("buy milk")]
    fn test_todo_content_有効な文字数で作成できる(#[case] value: &str) {
        let content = TodoContent::new(value).unwrap();
        assert_eq!(content.as_str(), value);
    }

    #[rstest]
    #[case::空文字列("")]
    #[case::二文字("ab")]
    fn test_todo_content_短すぎる場合はエラー(#[case] value: &str) {
        let err = TodoContent::new(value).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_todo_content_55文字はエラー() {
        let err = TodoContent::new("a".repeat(55)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_todo_content_バイト数ではなく文字数で判定する() {
        // 3 文字のマルチバイト文字列（バイト数は 9）
        let content = TodoContent::new("牛乳を").unwrap();
        assert_eq!(content.as_str(), "牛乳を");

        // 55 文字のマルチバイト文字列は超過
        let err = TodoContent::new("あ".repeat(55)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    // ===== Todo エンティティ =====

    #[test]
    fn test_todo_from_dbで復元できる() {
        let todo = Todo::from_db(
            TodoId::from_i64(1),
            TodoContent::new("buy milk").unwrap(),
            false,
        );

        assert_eq!(todo.id().as_i64(), 1);
        assert_eq!(todo.content().as_str(), "buy milk");
        assert!(!todo.is_completed());
    }

    #[test]
    fn test_todo_idのdisplayは内部の整数を出力する() {
        assert_eq!(TodoId::from_i64(42).to_string(), "42");
    }
}
