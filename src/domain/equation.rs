// 方程式のパースと保持（ドメイン層）

use super::cell::EquationCell;

/// 方程式。セル列の順序は左から右の読み順で、全操作を通じて保存される
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Equation {
    cells: Vec<EquationCell>,
}

impl Equation {
    /// リテラル文字列からパースする。
    /// 空白は読み飛ばし、`0-9+-=` 以外の文字は黙って捨てる
    /// （入力は既定パズルか生成器出力に限られるため、ここでは緩く受ける）
    pub fn parse(text: &str) -> Self {
        let mut cells = Vec::new();
        for (i, ch) in text.char_indices() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                '0'..='9' => EquationCell::digit(i, ch),
                '+' | '-' | '=' => EquationCell::operator(i, ch),
                _ => None,
            };
            if let Some(cell) = cell {
                cells.push(cell);
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[EquationCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// セル内セグメントの点灯状態。範囲外は None
    pub fn segment(&self, cell: usize, seg: usize) -> Option<bool> {
        self.cells.get(cell).and_then(|c| c.segments.get(seg)).copied()
    }

    pub(crate) fn set_segment(&mut self, cell: usize, seg: usize, lit: bool) {
        if let Some(s) = self.cells.get_mut(cell).and_then(|c| c.segments.get_mut(seg)) {
            *s = lit;
        }
    }

    /// 点灯中セグメントの総数（マッチ棒カウンタ）。
    /// 移動の前後で保存されることの検証に使う
    pub fn count_lit(&self) -> usize {
        self.cells.iter().map(|c| c.lit_count()).sum()
    }

    /// パース元のリテラル表記。ヒント要求などの外部向けに使う
    pub fn symbol_string(&self) -> String {
        self.cells.iter().map(|c| c.symbol).collect()
    }

    /// 現在の点灯状態を解決した表記。解決できないセルは '?'（ログ用）
    pub fn resolved_string(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.resolve().unwrap_or('?'))
            .collect()
    }
}
