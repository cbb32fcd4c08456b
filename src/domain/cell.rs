// 方程式セルとシンボル解決（ドメイン層）

use super::segment::{digit_pattern, operator_segment_count, SEG_COUNT};

/// セルの種別
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Digit,
    Operator,
}

/// 方程式を構成する1文字分のセル
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquationCell {
    /// パース時の元文字列位置。生成後は不変
    pub id: usize,
    /// 種別。生成後は不変
    pub kind: CellKind,
    /// パース元のリテラル文字。現在の点灯状態が表す文字とは限らない
    pub symbol: char,
    /// 点灯状態。長さは生成時に固定され、以後変わらない
    pub segments: Vec<bool>,
}

impl EquationCell {
    /// 数字セルを正規パターンで生成する
    pub(crate) fn digit(id: usize, symbol: char) -> Option<Self> {
        let pattern = digit_pattern(symbol)?;
        Some(Self {
            id,
            kind: CellKind::Digit,
            symbol,
            segments: pattern.to_vec(),
        })
    }

    /// 演算子セルを全点灯で生成する
    pub(crate) fn operator(id: usize, symbol: char) -> Option<Self> {
        let count = operator_segment_count(symbol)?;
        Some(Self {
            id,
            kind: CellKind::Operator,
            symbol,
            segments: vec![true; count],
        })
    }

    /// 点灯中のセグメント数
    pub fn lit_count(&self) -> usize {
        self.segments.iter().filter(|&&s| s).count()
    }

    /// 現在の点灯パターンが表す正規シンボルを求める。
    /// 移動途中の中途半端な形は None（エラーではなく想定内の状態）
    pub fn resolve(&self) -> Option<char> {
        match self.kind {
            CellKind::Digit => resolve_digit(&self.segments),
            CellKind::Operator => resolve_operator(self.symbol, &self.segments),
        }
    }
}

/// 7セグメントパターンを数字へ解決する。10種の正規パターンとの完全一致のみ
pub fn resolve_digit(segments: &[bool]) -> Option<char> {
    if segments.len() != SEG_COUNT {
        return None;
    }
    ('0'..='9').find(|&d| {
        digit_pattern(d).is_some_and(|pat| segments == &pat[..])
    })
}

/// 演算子セルの点灯パターンをシンボルへ解決する。
/// 配置（どの位置に棒があるか）は元シンボルで決まるが、
/// 解決結果は残っている棒だけで決まる。縦棒を失った '+' は '-' になる
pub fn resolve_operator(symbol_hint: char, segments: &[bool]) -> Option<char> {
    match (symbol_hint, segments) {
        ('+', [vert, horiz]) => match (*vert, *horiz) {
            (true, true) => Some('+'),
            (false, true) => Some('-'),
            // 縦棒のみ、または両方消灯は表示可能な形がない
            _ => None,
        },
        ('-', [horiz]) => horiz.then_some('-'),
        ('=', [top, bottom]) => match (*top, *bottom) {
            (true, true) => Some('='),
            (true, false) | (false, true) => Some('-'),
            (false, false) => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_digit_roundtrips_all_digits() {
        for d in '0'..='9' {
            let pat = digit_pattern(d).unwrap();
            assert_eq!(resolve_digit(&pat), Some(d));
        }
    }

    #[test]
    fn resolve_digit_rejects_wrong_length() {
        assert_eq!(resolve_digit(&[true; 6]), None);
        assert_eq!(resolve_digit(&[true; 8]), None);
    }

    #[test]
    fn resolve_digit_rejects_partial_shape() {
        // '8' から上(A)を1本抜いた形はどの数字でもない
        let mut pat = digit_pattern('8').unwrap().to_vec();
        pat[0] = false;
        assert_eq!(resolve_digit(&pat), None);
    }

    #[test]
    fn plus_missing_vertical_becomes_minus() {
        assert_eq!(resolve_operator('+', &[true, true]), Some('+'));
        assert_eq!(resolve_operator('+', &[false, true]), Some('-'));
        assert_eq!(resolve_operator('+', &[true, false]), None);
        assert_eq!(resolve_operator('+', &[false, false]), None);
    }

    #[test]
    fn minus_requires_its_stick() {
        assert_eq!(resolve_operator('-', &[true]), Some('-'));
        assert_eq!(resolve_operator('-', &[false]), None);
    }

    #[test]
    fn equals_collapses_to_minus_with_one_stick() {
        assert_eq!(resolve_operator('=', &[true, true]), Some('='));
        assert_eq!(resolve_operator('=', &[true, false]), Some('-'));
        assert_eq!(resolve_operator('=', &[false, true]), Some('-'));
        assert_eq!(resolve_operator('=', &[false, false]), None);
    }

    #[test]
    fn cell_resolve_uses_current_segments_not_symbol() {
        let mut cell = EquationCell::operator(1, '+').unwrap();
        assert_eq!(cell.resolve(), Some('+'));
        cell.segments[0] = false;
        assert_eq!(cell.resolve(), Some('-'));
    }

    #[test]
    fn digit_cell_starts_with_canonical_pattern() {
        let cell = EquationCell::digit(0, '9').unwrap();
        assert_eq!(cell.kind, CellKind::Digit);
        assert_eq!(cell.symbol, '9');
        assert_eq!(cell.lit_count(), 6);
        assert_eq!(cell.resolve(), Some('9'));
    }
}
