// ヒント取得サービス（アプリケーション層）

use crate::constants::FALLBACK_HINT;
use crate::infrastructure::TextBackend;

/// バックエンドにヒントを要求し、失敗したら固定ヒントを返す。
/// ヒントは表示専用で、パズルの状態には一切影響しない
pub fn fetch_or_fallback(backend: &dyn TextBackend, current_equation: &str) -> String {
    match backend.generate_hint(current_equation) {
        Ok(text) => text,
        Err(e) => {
            crate::vlog!("ヒント取得に失敗、固定ヒントを使用: {e:#}");
            FALLBACK_HINT.to_string()
        }
    }
}
