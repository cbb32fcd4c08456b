use anyhow::{anyhow, Result};
use eframe::egui;

use matchform::App;

fn install_japanese_fonts(ctx: &egui::Context) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let mut fonts = FontDefinitions::default();

    // Windows フォント候補（存在したものを最初に採用）
    let windir = std::env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_string());
    let fontdir = std::path::Path::new(&windir).join("Fonts");
    let candidates = [
        "meiryo.ttc",   // Meiryo
        "meiryob.ttc",  // Meiryo UI（環境による）
        "YuGothR.ttc",  // 游ゴシック（Regular）
        "YuGothM.ttc",  // 游ゴシック（Medium）
        "YuGothB.ttc",  // 游ゴシック（Bold）
        "YuGothUI.ttc", // 游ゴシック UI
        "msgothic.ttc", // MS ゴシック（最終手段）
        "msmincho.ttc", // MS 明朝（最終手段）
    ];

    let mut loaded = false;
    for name in candidates.iter() {
        let path = fontdir.join(name);
        if let Ok(bytes) = std::fs::read(&path) {
            let key = format!("jp-{}", name.to_lowercase());
            fonts
                .font_data
                .insert(key.clone(), FontData::from_owned(bytes));
            if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
                family.insert(0, key.clone());
            }
            if let Some(family) = fonts.families.get_mut(&FontFamily::Monospace) {
                family.insert(0, key.clone());
            }
            loaded = true;
            break;
        }
    }

    if loaded {
        ctx.set_fonts(fonts);
    } else {
        eprintln!("日本語フォントを見つけられませんでした。システムフォントで代替します。");
    }
}

// ====== eframe エントリ ======
fn main() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(960.0, 560.0)),
        ..Default::default()
    };

    eframe::run_native(
        "マッチ棒方程式パズル — Rust GUI",
        options,
        Box::new(|cc| {
            install_japanese_fonts(&cc.egui_ctx);
            Box::new(App::default())
        }),
    )
    .map_err(|e| anyhow!("GUI起動に失敗: {e}"))
}
