// アプリケーション状態

use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::application::GenerationResult;
use crate::constants::INITIAL_PUZZLE_STRING;
use crate::domain::equation::Equation;
use crate::domain::eval::Outcome;
use crate::domain::move_controller::{MoveController, TouchResult};
use crate::infrastructure::{GeminiClient, OfflineBackend, TextBackend};

use super::message::Message;

/// ステータス表示の種別
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Success,
    Error,
}

/// アプリケーション状態。
/// 方程式はコントローラが所有し、共有のグローバル状態は持たない
pub struct App {
    pub controller: MoveController,
    pub message: String,
    pub status: StatusKind,
    pub won: bool,
    /// 生成・ヒント要求の待ち中フラグ。待ち中は盤面操作を受け付けない
    pub loading: bool,
    /// パズル世代番号。ロードのたびに増え、古い応答の破棄に使う
    pub token: u64,
    pub hint: Option<String>,
    /// 生成器が申告した解答（デバッグログ用、表示はしない）
    pub solution: Option<String>,
    pub rx: Option<Receiver<Message>>,
    pub backend: Arc<dyn TextBackend>,
    pub log_lines: Vec<String>,
}

impl Default for App {
    fn default() -> Self {
        let backend: Arc<dyn TextBackend> = match GeminiClient::from_env() {
            Ok(client) => Arc::new(client),
            Err(e) => {
                eprintln!("Gemini API を使用できません（フォールバック動作）: {e:#}");
                Arc::new(OfflineBackend)
            }
        };

        let mut app = Self {
            controller: MoveController::new(Equation::default()),
            message: String::new(),
            status: StatusKind::Neutral,
            won: false,
            loading: false,
            token: 0,
            hint: None,
            solution: None,
            rx: None,
            backend,
            log_lines: vec!["待機中".into()],
        };
        app.load_puzzle(INITIAL_PUZZLE_STRING, None);
        app
    }
}

impl App {
    /// 初期表示メッセージ
    pub const PROMPT: &'static str = "マッチ棒を1本だけ動かして等式を直してください。";

    /// 新しいパズルをロードする。世代番号を進め、
    /// 進行中の移動・勝利状態・ヒントを破棄する
    pub fn load_puzzle(&mut self, start: &str, solution: Option<String>) {
        self.token += 1;
        self.controller.load(Equation::parse(start));
        self.won = false;
        self.loading = false;
        self.hint = None;
        self.solution = solution;
        self.message = Self::PROMPT.to_string();
        self.status = StatusKind::Neutral;

        let lit = self.controller.equation().count_lit();
        self.push_log(format!("パズルをロード: {} (棒{}本)", start, lit));
        crate::vlog!(
            "load_puzzle: 世代={} start={} solution={:?}",
            self.token,
            start,
            self.solution
        );
    }

    pub fn push_log(&mut self, s: String) {
        self.log_lines.push(s);
        if self.log_lines.len() > 500 {
            let cut = self.log_lines.len() - 500;
            self.log_lines.drain(0..cut);
        }
    }

    /// 盤面操作を受け付けるか（勝利後と要求待ち中は拒否）
    pub fn input_enabled(&self) -> bool {
        !self.won && !self.loading
    }

    /// 盤面のセグメントタッチを処理する
    pub fn on_segment_touched(&mut self, cell: usize, seg: usize) {
        if !self.input_enabled() {
            return;
        }
        match self.controller.touch(cell, seg) {
            TouchResult::PickedUp => {
                self.message = "次の置き場所を選んでください。".to_string();
                self.status = StatusKind::Neutral;
            }
            TouchResult::PutBack => {
                self.message = "移動をキャンセルしました。".to_string();
                self.status = StatusKind::Neutral;
            }
            TouchResult::Committed(outcome) => {
                let resolved = self.controller.equation().resolved_string();
                self.push_log(format!("確定: {} -> {:?}", resolved, outcome));
                crate::vlog!("確定: {} -> {:?}", resolved, outcome);
                if outcome.is_true() {
                    self.won = true;
                    self.message = "正解！等式が成立しました。".to_string();
                    self.status = StatusKind::Success;
                } else {
                    // Invalid と ValidFalse はプレイヤーには同じ「不正解」
                    debug_assert!(matches!(
                        outcome,
                        Outcome::ValidFalse | Outcome::Invalid
                    ));
                    self.message = "まだ正しくないようです。もう一度試してください。".to_string();
                    self.status = StatusKind::Error;
                }
            }
            TouchResult::Ignored => {}
        }
    }

    /// ワーカーからのメッセージを処理する。世代の合わない応答は捨てる
    pub fn handle_message(&mut self, msg: Message) {
        match msg {
            Message::PuzzleReady { token, result } => {
                if token != self.token {
                    self.push_log("古い世代のパズル応答を破棄".into());
                    return;
                }
                let GenerationResult {
                    puzzle,
                    from_fallback,
                } = result;
                if from_fallback {
                    self.push_log("生成に失敗したため内蔵パズルを使用".into());
                }
                self.load_puzzle(&puzzle.start, Some(puzzle.solution));
            }
            Message::HintReady { token, text } => {
                if token != self.token {
                    self.push_log("古い世代のヒント応答を破棄".into());
                    return;
                }
                self.loading = false;
                self.message = Self::PROMPT.to_string();
                self.status = StatusKind::Neutral;
                self.push_log("ヒントを受信".into());
                self.hint = Some(text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::GeneratedPuzzle;

    #[test]
    fn default_app_loads_initial_puzzle() {
        let app = App::default();
        assert_eq!(app.controller.equation().symbol_string(), "9+9=15");
        assert_eq!(app.message, App::PROMPT);
        assert!(!app.won);
        assert!(app.input_enabled());
    }

    #[test]
    fn load_puzzle_bumps_token_and_clears_state() {
        let mut app = App::default();
        let token = app.token;
        app.won = true;
        app.hint = Some("ヒント".into());

        app.load_puzzle("6+4=4", Some("0+4=4".into()));

        assert_eq!(app.token, token + 1);
        assert!(!app.won);
        assert!(app.hint.is_none());
        assert_eq!(app.solution.as_deref(), Some("0+4=4"));
    }

    #[test]
    fn input_disabled_while_loading_or_won() {
        let mut app = App::default();
        app.loading = true;
        assert!(!app.input_enabled());

        app.loading = false;
        app.won = true;
        assert!(!app.input_enabled());
    }

    #[test]
    fn touch_is_rejected_while_disabled() {
        let mut app = App::default();
        app.loading = true;
        let before = app.controller.equation().clone();

        app.on_segment_touched(0, 0);

        assert_eq!(app.controller.equation(), &before);
    }

    #[test]
    fn winning_move_sets_won() {
        let mut app = App::default();
        app.load_puzzle("6+4=4", None);

        app.on_segment_touched(0, 6);
        app.on_segment_touched(0, 1);

        assert!(app.won);
        assert_eq!(app.status, StatusKind::Success);
    }

    #[test]
    fn failing_move_reports_error_status() {
        let mut app = App::default();
        // 9 の上(A)を 9 の左下(E)へ → 解決不能な形
        app.on_segment_touched(0, 0);
        app.on_segment_touched(0, 4);

        assert!(!app.won);
        assert_eq!(app.status, StatusKind::Error);
    }

    #[test]
    fn stale_puzzle_response_is_discarded() {
        let mut app = App::default();
        let stale_token = app.token;
        app.load_puzzle("6+4=4", None); // 世代が進む

        app.handle_message(Message::PuzzleReady {
            token: stale_token,
            result: GenerationResult {
                puzzle: GeneratedPuzzle {
                    start: "5+7=2".into(),
                    solution: "9-7=2".into(),
                },
                from_fallback: false,
            },
        });

        // 古い応答は無視され、盤面はそのまま
        assert_eq!(app.controller.equation().symbol_string(), "6+4=4");
    }

    #[test]
    fn current_puzzle_response_is_applied() {
        let mut app = App::default();
        app.loading = true;

        app.handle_message(Message::PuzzleReady {
            token: app.token,
            result: GenerationResult {
                puzzle: GeneratedPuzzle {
                    start: "5+7=2".into(),
                    solution: "9-7=2".into(),
                },
                from_fallback: true,
            },
        });

        assert_eq!(app.controller.equation().symbol_string(), "5+7=2");
        assert!(!app.loading);
    }

    #[test]
    fn stale_hint_response_is_discarded() {
        let mut app = App::default();
        let stale_token = app.token;
        app.load_puzzle("6+4=4", None);

        app.handle_message(Message::HintReady {
            token: stale_token,
            text: "古いヒント".into(),
        });

        assert!(app.hint.is_none());
    }

    #[test]
    fn current_hint_response_is_shown() {
        let mut app = App::default();
        app.loading = true;

        app.handle_message(Message::HintReady {
            token: app.token,
            text: "演算子に注目。".into(),
        });

        assert!(!app.loading);
        assert_eq!(app.hint.as_deref(), Some("演算子に注目。"));
    }
}
