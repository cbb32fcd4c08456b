// パズル生成サービス（アプリケーション層）

use rand::Rng;

use crate::constants::FALLBACK_PUZZLES;
use crate::infrastructure::{GeneratedPuzzle, TextBackend};

/// 生成結果。フォールバックに落ちたかどうかを持つ
#[derive(Clone, Debug)]
pub struct GenerationResult {
    pub puzzle: GeneratedPuzzle,
    pub from_fallback: bool,
}

/// バックエンドに1問要求し、失敗したら内蔵リストから無作為に選ぶ。
/// プレイヤーには必ず何らかのパズルが渡る（この関数は失敗しない）
pub fn fetch_or_fallback(backend: &dyn TextBackend) -> GenerationResult {
    match backend.generate_puzzle() {
        Ok(puzzle) => GenerationResult {
            puzzle,
            from_fallback: false,
        },
        Err(e) => {
            crate::vlog!("パズル生成に失敗、フォールバックを使用: {e:#}");
            GenerationResult {
                puzzle: random_fallback(),
                from_fallback: true,
            }
        }
    }
}

/// 内蔵フォールバックから1問選ぶ
pub fn random_fallback() -> GeneratedPuzzle {
    let mut rng = rand::thread_rng();
    let (start, solution) = FALLBACK_PUZZLES[rng.gen_range(0..FALLBACK_PUZZLES.len())];
    GeneratedPuzzle {
        start: start.to_string(),
        solution: solution.to_string(),
    }
}
