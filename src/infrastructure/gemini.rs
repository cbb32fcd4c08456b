// Gemini API クライアント（インフラ層）
//
// 呼び出しはワーカースレッド上のブロッキング HTTP（ureq）。
// 失敗はすべて通常のエラーとして返し、フォールバック判断は
// アプリケーション層に任せる。

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::json;

use crate::constants::{API_KEY_ENV, GEMINI_ENDPOINT, GEMINI_MODEL};

/// 生成された1問。start は偽の等式、solution は1本移動後の真の等式。
/// 「1本で解ける」という契約は生成側を信頼し、ここでは検証しない
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub start: String,
    pub solution: String,
}

/// テキスト生成バックエンドの差し替え口
pub trait TextBackend: Send + Sync {
    /// 新しいパズルを1問生成する
    fn generate_puzzle(&self) -> Result<GeneratedPuzzle>;

    /// 現在の等式に対するヒント文を生成する
    fn generate_hint(&self, current_equation: &str) -> Result<String>;
}

/// REST 経由の Gemini クライアント
pub struct GeminiClient {
    agent: ureq::Agent,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// 環境変数から API キーを読んで生成する
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .with_context(|| format!("環境変数 {} が未設定です", API_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(20))
            .build();
        Self {
            agent,
            api_key,
            model: GEMINI_MODEL.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_ENDPOINT, self.model, self.api_key
        )
    }

    fn call(&self, body: serde_json::Value) -> Result<GenerateContentResponse> {
        let response = self
            .agent
            .post(&self.endpoint())
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| anyhow!("Gemini API 呼び出しに失敗: {e}"))?;
        response
            .into_json::<GenerateContentResponse>()
            .context("Gemini API 応答のパースに失敗")
    }
}

impl TextBackend for GeminiClient {
    fn generate_puzzle(&self) -> Result<GeneratedPuzzle> {
        let prompt = "\
新しいマッチ棒方程式パズルを1問生成してください。\n\
制約1: 開始の等式は数学的に偽であること。\n\
制約2: マッチ棒をちょうど1本動かすと真になること。\n\
制約3: 使えるのは数字 0-9 と演算子 + - のみ。\n\
制約4: 結果は整数として成立すること。\n\
JSON 形式で返してください。";

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "start": {
                            "type": "STRING",
                            "description": "偽の開始等式（例: 6+4=4）"
                        },
                        "solution": {
                            "type": "STRING",
                            "description": "1本移動後の真の等式（例: 0+4=4）"
                        }
                    },
                    "required": ["start", "solution"]
                },
                // パズルの論理検証には思考を使わせる
                "thinkingConfig": { "thinkingBudget": 1024 }
            }
        });

        let text = self
            .call(body)?
            .text()
            .ok_or_else(|| anyhow!("Gemini API 応答が空です"))?;
        let puzzle: GeneratedPuzzle =
            serde_json::from_str(&text).context("パズル JSON のパースに失敗")?;
        if puzzle.start.is_empty() || puzzle.solution.is_empty() {
            return Err(anyhow!("パズル応答の形式が不正です"));
        }
        Ok(puzzle)
    }

    fn generate_hint(&self, current_equation: &str) -> Result<String> {
        let prompt = format!(
            "マッチ棒パズルをプレイ中のユーザーへのヒントです。\n\
現在の等式は「{current_equation}」。\n\
目標はマッチ棒をちょうど1本動かして等式を正しくすることです。\n\
答えを明かさず、解法へ誘導する控えめなヒントを短く出してください。"
        );

        let body = json!({
            "systemInstruction": {
                "parts": [{ "text": "あなたは親切なゲームアシスタントです。" }]
            },
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                // 単純なヒントは即答でよい
                "thinkingConfig": { "thinkingBudget": 0 }
            }
        });

        let text = self.call(body)?.text().unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(anyhow!("ヒント応答が空です"));
        }
        Ok(text.to_string())
    }
}

/// API キーが無い環境向けのバックエンド。常にエラーを返し、
/// 呼び出し側のフォールバック動作に委ねる
pub struct OfflineBackend;

impl TextBackend for OfflineBackend {
    fn generate_puzzle(&self) -> Result<GeneratedPuzzle> {
        Err(anyhow!("オフラインのためパズル生成は利用できません"))
    }

    fn generate_hint(&self, _current_equation: &str) -> Result<String> {
        Err(anyhow!("オフラインのためヒント生成は利用できません"))
    }
}

/// generateContent 応答（必要な部分のみ）
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ContentPart>>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// 最初の候補の最初のテキストパートを取り出す
    fn text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
    }
}
