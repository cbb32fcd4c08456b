// 既定パズルとフォールバックデータ

/// 初期パズル（9 + 9 = 15、偽の等式）
pub const INITIAL_PUZZLE_STRING: &str = "9+9=15";

/// 生成失敗時のフォールバックパズル。
/// start は偽の等式で、1本移動すると solution になる
pub const FALLBACK_PUZZLES: &[(&str, &str)] = &[
    ("6+4=4", "0+4=4"),
    ("5+7=2", "9-7=2"),
    ("3+3=5", "3+2=5"),
];

/// ヒント取得失敗時の固定ヒント
pub const FALLBACK_HINT: &str = "9を6に、5を3に変えられないか試してみてください。";

/// Gemini API のモデル名
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Gemini API のベース URL
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// API キーを読む環境変数名
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
