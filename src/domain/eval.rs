// 方程式の評価（ドメイン層）
//
// 動的な式実行系は使わず、数字と +/- だけの小さな文法を
// 左から右へ評価する。想定外の構文は一切受け付けない。

use std::iter::Peekable;

use super::equation::Equation;

/// 評価結果。毎回の確定操作で新しく計算され、セルには保存されない
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// 等式として成立している
    ValidTrue,
    /// 等式の形にはなっているが両辺の値が一致しない
    ValidFalse,
    /// 数字・演算子として解決できない配置、または等式の形になっていない
    Invalid,
}

impl Outcome {
    pub fn is_true(self) -> bool {
        self == Outcome::ValidTrue
    }
}

/// 字句要素
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Digit(u32),
    Plus,
    Minus,
    Equals,
}

/// 方程式全体を評価する。
/// 1. 各セルをシンボルへ解決（1つでも失敗したら Invalid）
/// 2. '=' がちょうど1個であることを確認
/// 3. 両辺を左から右へ整数評価して比較
pub fn evaluate(eq: &Equation) -> Outcome {
    let Some(tokens) = tokenize(eq) else {
        return Outcome::Invalid;
    };

    let equals = tokens.iter().filter(|&&t| t == Token::Equals).count();
    if equals != 1 {
        return Outcome::Invalid;
    }
    let split = tokens
        .iter()
        .position(|&t| t == Token::Equals)
        .unwrap_or(tokens.len());

    match (eval_side(&tokens[..split]), eval_side(&tokens[split + 1..])) {
        (Some(lhs), Some(rhs)) if lhs == rhs => Outcome::ValidTrue,
        (Some(_), Some(_)) => Outcome::ValidFalse,
        _ => Outcome::Invalid,
    }
}

/// 全セルを字句列へ解決する。リゾルバの想定外出力もここで弾く
fn tokenize(eq: &Equation) -> Option<Vec<Token>> {
    let mut tokens = Vec::with_capacity(eq.len());
    for cell in eq.cells() {
        let token = match cell.resolve()? {
            d @ '0'..='9' => Token::Digit(d.to_digit(10)?),
            '+' => Token::Plus,
            '-' => Token::Minus,
            '=' => Token::Equals,
            _ => return None,
        };
        tokens.push(token);
    }
    Some(tokens)
}

/// 片辺を評価する。文法: sign? number (op number)*
/// 演算子の連続、空辺、末尾演算子は None
fn eval_side(tokens: &[Token]) -> Option<i64> {
    let mut iter = tokens.iter().copied().peekable();

    // 先頭の単項符号は1個だけ許す
    let sign = match iter.peek() {
        Some(Token::Plus) => {
            iter.next();
            1
        }
        Some(Token::Minus) => {
            iter.next();
            -1
        }
        _ => 1,
    };

    let mut acc = sign * parse_number(&mut iter)?;
    loop {
        match iter.next() {
            None => return Some(acc),
            Some(Token::Plus) => acc += parse_number(&mut iter)?,
            Some(Token::Minus) => acc -= parse_number(&mut iter)?,
            // '=' は呼び出し前に分割済みなので来ない
            Some(_) => return None,
        }
    }
}

/// 隣接する数字セルの並びを1つの整数として読む。
/// 複数桁の先頭ゼロは不正（"03" など。単独の "0" は正しい）
fn parse_number<I: Iterator<Item = Token>>(iter: &mut Peekable<I>) -> Option<i64> {
    let first = match iter.next()? {
        Token::Digit(d) => d,
        _ => return None,
    };
    let mut value = i64::from(first);
    let mut width = 1usize;
    while let Some(Token::Digit(d)) = iter.peek().copied() {
        iter.next();
        value = value * 10 + i64::from(d);
        width += 1;
    }
    if first == 0 && width > 1 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Outcome {
        evaluate(&Equation::parse(s))
    }

    #[test]
    fn default_puzzle_is_valid_but_false() {
        assert_eq!(eval("9+9=15"), Outcome::ValidFalse);
    }

    #[test]
    fn corrected_puzzle_is_true() {
        assert_eq!(eval("9+9=18"), Outcome::ValidTrue);
    }

    #[test]
    fn subtraction_and_multi_digit() {
        assert_eq!(eval("15-7=8"), Outcome::ValidTrue);
        assert_eq!(eval("15-7=9"), Outcome::ValidFalse);
        assert_eq!(eval("1+2+3=6"), Outcome::ValidTrue);
    }

    #[test]
    fn leading_unary_sign_is_accepted() {
        assert_eq!(eval("-5=1-6"), Outcome::ValidTrue);
        assert_eq!(eval("+5=5"), Outcome::ValidTrue);
    }

    #[test]
    fn zero_or_two_equals_is_invalid() {
        assert_eq!(eval("9+9"), Outcome::Invalid);
        assert_eq!(eval("1=1=1"), Outcome::Invalid);
    }

    #[test]
    fn malformed_sides_are_invalid() {
        assert_eq!(eval("=1"), Outcome::Invalid); // 空辺
        assert_eq!(eval("1+=1"), Outcome::Invalid); // 末尾演算子
        assert_eq!(eval("1+-2=1"), Outcome::Invalid); // 演算子の連続
    }

    #[test]
    fn multi_digit_leading_zero_is_invalid() {
        assert_eq!(eval("03=3"), Outcome::Invalid);
        assert_eq!(eval("0=0"), Outcome::ValidTrue);
        assert_eq!(eval("10=10"), Outcome::ValidTrue);
    }

    #[test]
    fn unresolved_cell_makes_whole_equation_invalid() {
        // '-' の唯一の棒を消すとセルが解決不能になる
        let mut eq = Equation::parse("1-1=0");
        eq.set_segment(1, 0, false);
        assert_eq!(evaluate(&eq), Outcome::Invalid);
    }

    #[test]
    fn operator_cell_resolving_to_minus_is_used() {
        // '+' の縦棒を消すと '-' として評価される
        let mut eq = Equation::parse("9+1=8");
        eq.set_segment(1, 0, false);
        assert_eq!(evaluate(&eq), Outcome::ValidTrue);
    }

    #[test]
    fn empty_equation_is_invalid() {
        assert_eq!(eval(""), Outcome::Invalid);
    }
}
