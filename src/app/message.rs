// ワーカースレッドからのメッセージ定義

use crate::application::GenerationResult;

/// ワーカーから UI へのメッセージ。
/// token は要求時点のパズル世代番号で、受信時に現在値と一致しない
/// 応答（リセット後に届いた古い応答など）は破棄される
pub enum Message {
    /// パズル生成完了
    PuzzleReady { token: u64, result: GenerationResult },
    /// ヒント取得完了
    HintReady { token: u64, text: String },
}
