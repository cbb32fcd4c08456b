// UI 描画（egui）

pub mod board;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::app::message::Message;
use crate::app::state::{App, StatusKind};
use crate::application::{generator, hint};
use crate::constants::INITIAL_PUZZLE_STRING;
use crate::logging;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !INITIALIZED.swap(true, Ordering::SeqCst) {
            if let Err(e) = logging::init_log_file("debug_log.txt") {
                eprintln!("ログファイルを開けません: {e}");
            }
            logging::enable_verbose_logging();
            crate::vlog!("UI 初期化完了");
        }

        // ワーカー応答の受信。同時に飛んでいる要求は高々1つ
        if let Some(rx) = self.rx.take() {
            match rx.try_recv() {
                Ok(msg) => self.handle_message(msg),
                Err(crossbeam_channel::TryRecvError::Empty) => self.rx = Some(rx),
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    // ワーカーが応答せず終了した。待ち状態を解く
                    self.loading = false;
                }
            }
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("マッチ棒方程式パズル — Rust GUI");
            ui.add_space(4.0);
        });

        egui::SidePanel::right("controls")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.group(|ui| {
                    ui.label("操作");
                    ui.separator();
                    if ui.button("リセット").clicked() {
                        self.load_puzzle(INITIAL_PUZZLE_STRING, None);
                    }
                    if ui
                        .add_enabled(!self.loading, egui::Button::new("新しい問題"))
                        .clicked()
                    {
                        self.start_generate();
                    }
                    if ui
                        .add_enabled(!self.loading && !self.won, egui::Button::new("ヒント"))
                        .clicked()
                    {
                        self.start_hint();
                    }
                });

                ui.add_space(8.0);
                let color = match self.status {
                    StatusKind::Neutral => ui.visuals().text_color(),
                    StatusKind::Success => egui::Color32::from_rgb(0x22, 0xc5, 0x5e),
                    StatusKind::Error => egui::Color32::from_rgb(0xef, 0x44, 0x44),
                };
                ui.colored_label(color, &self.message);
                if self.loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("通信中…");
                    });
                }
                if let Some(hint) = &self.hint {
                    ui.add_space(4.0);
                    ui.group(|ui| {
                        ui.label("ヒント");
                        ui.separator();
                        ui.label(hint);
                    });
                }

                ui.add_space(8.0);
                ui.separator();
                ui.label("ログ");
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.log_lines {
                            ui.monospace(line);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            board::draw_board(self, ui);
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

impl App {
    /// パズル生成をワーカースレッドに依頼する
    pub fn start_generate(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.message = "新しい問題を作成中…".to_string();
        self.status = StatusKind::Neutral;
        self.push_log("パズル生成を要求".into());

        let token = self.token;
        let backend = Arc::clone(&self.backend);
        let (tx, rx) = crossbeam_channel::unbounded();
        self.rx = Some(rx);
        thread::spawn(move || {
            let result = generator::fetch_or_fallback(backend.as_ref());
            let _ = tx.send(Message::PuzzleReady { token, result });
        });
    }

    /// ヒント取得をワーカースレッドに依頼する
    pub fn start_hint(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.message = "ヒントを取得中…".to_string();
        self.status = StatusKind::Neutral;
        self.push_log("ヒントを要求".into());

        let token = self.token;
        let backend = Arc::clone(&self.backend);
        let equation = self.controller.equation().symbol_string();
        let (tx, rx) = crossbeam_channel::unbounded();
        self.rx = Some(rx);
        thread::spawn(move || {
            let text = hint::fetch_or_fallback(backend.as_ref(), &equation);
            let _ = tx.send(Message::HintReady { token, text });
        });
    }
}
