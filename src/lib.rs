// マッチ棒方程式パズル - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod app;
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use app::{App, Message, StatusKind};
pub use constants::INITIAL_PUZZLE_STRING;
pub use domain::equation::Equation;
pub use domain::eval::{evaluate, Outcome};
pub use domain::move_controller::{MoveController, TouchResult};
