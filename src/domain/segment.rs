// セグメントパターン表（ドメイン層）
//
// 7セグメントの並び順（全モジュール共通の固定順）:
//   A(0)
// F(5)  B(1)
//   G(6)
// E(4)  C(2)
//   D(3)

/// 数字セルのセグメント数
pub const SEG_COUNT: usize = 7;

/// 数字 0..=9 の7セグメントパターン（A,B,C,D,E,F,G の順）
const DIGIT_SEGMENTS: [[bool; SEG_COUNT]; 10] = [
    [true, true, true, true, true, true, false],    // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],   // 2
    [true, true, true, true, false, false, true],   // 3
    [false, true, true, false, false, true, true],  // 4
    [true, false, true, true, false, true, true],   // 5
    [true, false, true, true, true, true, true],    // 6
    [true, true, true, false, false, false, false], // 7
    [true, true, true, true, true, true, true],     // 8
    [true, true, true, true, false, true, true],    // 9
];

/// 数字の正規パターンを返す。数字以外は None
pub fn digit_pattern(d: char) -> Option<[bool; SEG_COUNT]> {
    d.to_digit(10).map(|i| DIGIT_SEGMENTS[i as usize])
}

/// 演算子のセグメント数を返す。
/// '+' は [縦, 横] の2本、'-' は [横] の1本、'=' は [上, 下] の2本
pub fn operator_segment_count(op: char) -> Option<usize> {
    match op {
        '+' => Some(2),
        '-' => Some(1),
        '=' => Some(2),
        _ => None,
    }
}
