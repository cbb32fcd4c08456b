// マッチ棒移動の状態機械（ドメイン層）
//
// 「取る」「置く」の2フェーズで、手に持てる棒は常に1本だけ。
// 置き先の制限は「空いていること」のみで、数字と演算子をまたぐ
// 移動も許す（これがパズルの仕掛けそのもの）。

use super::equation::Equation;
use super::eval::{evaluate, Outcome};

/// 手に持っている棒の出所（セル番号とセグメント番号）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeldStick {
    pub cell: usize,
    pub seg: usize,
}

/// コントローラの状態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveState {
    /// 手に何も持っていない
    Idle,
    /// 棒を1本持っている
    Holding(HeldStick),
}

/// タッチ操作の結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchResult {
    /// 棒を取り上げた
    PickedUp,
    /// 元の位置に戻した（移動キャンセル）
    PutBack,
    /// 置いて確定し、評価を実施した
    Committed(Outcome),
    /// 何も起きなかった（消灯位置からの取り上げ、点灯位置への配置など）
    Ignored,
}

/// 移動コントローラ。方程式の状態を所有する明示的な状態オブジェクトで、
/// モジュールレベルの共有状態は持たない
pub struct MoveController {
    equation: Equation,
    state: MoveState,
}

impl MoveController {
    pub fn new(equation: Equation) -> Self {
        Self {
            equation,
            state: MoveState::Idle,
        }
    }

    /// 方程式を丸ごと差し替える（リセット・新パズル・再生成）。
    /// 進行中の移動は破棄される
    pub fn load(&mut self, equation: Equation) {
        self.equation = equation;
        self.state = MoveState::Idle;
    }

    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    pub fn state(&self) -> MoveState {
        self.state
    }

    /// 手に持っている棒（Idle なら None）
    pub fn held(&self) -> Option<HeldStick> {
        match self.state {
            MoveState::Idle => None,
            MoveState::Holding(held) => Some(held),
        }
    }

    /// セグメントへのタッチを処理する。
    /// 勝利後や生成待ちの間の抑止は呼び出し側（アプリ層）が行う
    pub fn touch(&mut self, cell: usize, seg: usize) -> TouchResult {
        let Some(lit) = self.equation.segment(cell, seg) else {
            return TouchResult::Ignored;
        };

        match self.state {
            MoveState::Idle => {
                // 無い棒は取れない
                if !lit {
                    return TouchResult::Ignored;
                }
                self.equation.set_segment(cell, seg, false);
                self.state = MoveState::Holding(HeldStick { cell, seg });
                TouchResult::PickedUp
            }
            MoveState::Holding(src) => {
                if src.cell == cell && src.seg == seg {
                    // 取った場所そのもの → 戻してキャンセル
                    self.equation.set_segment(cell, seg, true);
                    self.state = MoveState::Idle;
                    return TouchResult::PutBack;
                }
                // 既に棒がある位置には置けない
                if lit {
                    return TouchResult::Ignored;
                }
                self.equation.set_segment(cell, seg, true);
                self.state = MoveState::Idle;
                TouchResult::Committed(evaluate(&self.equation))
            }
        }
    }
}
