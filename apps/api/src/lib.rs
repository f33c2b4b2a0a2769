//! # dailyDo API ライブラリ
//!
//! dailyDo API サーバーの設定・エラー・ハンドラを公開する。
//! テスト用に内部モジュールへのアクセスを提供する。

pub mod config;
pub mod error;
pub mod handler;
