// 盤面描画。セルごとにセグメントの矩形を計算し、マッチ棒として描く

use egui::{Color32, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use crate::app::state::App;
use crate::domain::cell::CellKind;

const DIGIT_SIZE: Vec2 = Vec2::new(96.0, 160.0);
const OPERATOR_SIZE: Vec2 = Vec2::new(80.0, 144.0);
const STICK_THICKNESS: f32 = 12.0;

const LIT_BODY: Color32 = Color32::from_rgb(0xd9, 0x77, 0x06); // 軸の色
const LIT_HEAD: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // 頭薬の色
const GHOST_BODY: Color32 = Color32::from_rgba_premultiplied(60, 60, 70, 40);
const HELD_STROKE: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);

/// 方程式全体を1行に描画し、クリックされたセグメントを状態へ通知する
pub fn draw_board(app: &mut App, ui: &mut egui::Ui) {
    let mut touched: Option<(usize, usize)> = None;

    ui.add_space(24.0);
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        for (cell_idx, cell) in app.controller.equation().cells().iter().enumerate() {
            let size = match cell.kind {
                CellKind::Digit => DIGIT_SIZE,
                CellKind::Operator => OPERATOR_SIZE,
            };
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());

            for (seg_idx, &lit) in cell.segments.iter().enumerate() {
                let seg_rect = match cell.kind {
                    CellKind::Digit => digit_segment_rect(rect, seg_idx),
                    CellKind::Operator => operator_segment_rect(rect, cell.symbol, seg_idx),
                };
                let Some(seg_rect) = seg_rect else { continue };

                let id = ui.id().with((cell.id, seg_idx));
                let response = ui.interact(seg_rect.expand(3.0), id, Sense::click());

                let held_here = app
                    .controller
                    .held()
                    .map_or(false, |h| h.cell == cell_idx && h.seg == seg_idx);
                paint_stick(ui, seg_rect, lit, held_here, response.hovered());

                if response.clicked() {
                    touched = Some((cell_idx, seg_idx));
                }
            }
        }
    });

    if let Some((cell, seg)) = touched {
        app.on_segment_touched(cell, seg);
    }
}

/// 7セグメント（A,B,C,D,E,F,G）の各矩形。横棒は A/D/G、縦棒は B/C/E/F
fn digit_segment_rect(cell: Rect, seg: usize) -> Option<Rect> {
    let w = cell.width();
    let h = cell.height();
    let t = STICK_THICKNESS;
    let horiz_w = w * 0.70;
    let vert_h = h * 0.38;

    let rect = match seg {
        // A: 上
        0 => Rect::from_min_size(
            Pos2::new(cell.left() + w * 0.15, cell.top() + h * 0.05),
            Vec2::new(horiz_w, t),
        ),
        // B: 右上
        1 => Rect::from_min_size(
            Pos2::new(cell.right() - w * 0.05 - t, cell.top() + h * 0.12),
            Vec2::new(t, vert_h),
        ),
        // C: 右下
        2 => Rect::from_min_size(
            Pos2::new(
                cell.right() - w * 0.05 - t,
                cell.bottom() - h * 0.12 - vert_h,
            ),
            Vec2::new(t, vert_h),
        ),
        // D: 下
        3 => Rect::from_min_size(
            Pos2::new(cell.left() + w * 0.15, cell.bottom() - h * 0.05 - t),
            Vec2::new(horiz_w, t),
        ),
        // E: 左下
        4 => Rect::from_min_size(
            Pos2::new(cell.left() + w * 0.05, cell.bottom() - h * 0.12 - vert_h),
            Vec2::new(t, vert_h),
        ),
        // F: 左上
        5 => Rect::from_min_size(
            Pos2::new(cell.left() + w * 0.05, cell.top() + h * 0.12),
            Vec2::new(t, vert_h),
        ),
        // G: 中央
        6 => Rect::from_min_size(
            Pos2::new(cell.left() + w * 0.15, cell.center().y - t / 2.0),
            Vec2::new(horiz_w, t),
        ),
        _ => return None,
    };
    Some(rect)
}

/// 演算子のセグメント矩形。
/// '+' は [縦, 横]、'-' は [横]、'=' は [上横, 下横]
fn operator_segment_rect(cell: Rect, symbol: char, seg: usize) -> Option<Rect> {
    let w = cell.width();
    let h = cell.height();
    let t = STICK_THICKNESS;
    let horiz_w = w * 0.55;
    let vert_h = h * 0.70;

    let horiz_at = |y: f32| {
        Rect::from_min_size(
            Pos2::new(cell.center().x - horiz_w / 2.0, y - t / 2.0),
            Vec2::new(horiz_w, t),
        )
    };

    match (symbol, seg) {
        ('+', 0) => Some(Rect::from_min_size(
            Pos2::new(cell.center().x - t / 2.0, cell.center().y - vert_h / 2.0),
            Vec2::new(t, vert_h),
        )),
        ('+', 1) => Some(horiz_at(cell.center().y)),
        ('-', 0) => Some(horiz_at(cell.center().y)),
        ('=', 0) => Some(horiz_at(cell.top() + h * 0.42)),
        ('=', 1) => Some(horiz_at(cell.top() + h * 0.58)),
        _ => None,
    }
}

/// マッチ棒1本を描く。点灯中は軸＋頭薬、消灯中は置き場所を示す淡い影
fn paint_stick(ui: &mut egui::Ui, rect: Rect, lit: bool, held_source: bool, hovered: bool) {
    let painter = ui.painter();
    let rounding = Rounding::same(STICK_THICKNESS / 2.0);

    if lit {
        let body = if hovered {
            Color32::from_rgb(0xf5, 0x9e, 0x0b)
        } else {
            LIT_BODY
        };
        painter.rect_filled(rect, rounding, body);

        // 頭薬は縦棒なら上端、横棒なら左端
        let head_center = if rect.height() >= rect.width() {
            Pos2::new(rect.center().x, rect.top() + STICK_THICKNESS / 2.0)
        } else {
            Pos2::new(rect.left() + STICK_THICKNESS / 2.0, rect.center().y)
        };
        painter.circle_filled(head_center, STICK_THICKNESS * 0.55, LIT_HEAD);
    } else {
        let body = if hovered {
            Color32::from_rgba_premultiplied(120, 120, 140, 80)
        } else {
            GHOST_BODY
        };
        painter.rect_filled(rect, rounding, body);
    }

    // 持ち上げ元の空き枠を強調する
    if held_source {
        painter.rect_stroke(rect.expand(2.0), rounding, Stroke::new(2.0, HELD_STROKE));
    }
}
