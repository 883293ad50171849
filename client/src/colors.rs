use common::game::CellKind;
use eframe::egui::Color32;

pub const GRASS: Color32 = Color32::from_rgb(1, 70, 52);
pub const WALL: Color32 = Color32::from_rgb(126, 126, 126);
pub const APPLE: Color32 = Color32::from_rgb(0, 220, 0);
pub const CHOCOLATE: Color32 = Color32::from_rgb(121, 85, 58);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(255, 0, 0);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(30, 90, 255);

pub fn cell_color(kind: CellKind) -> Color32 {
    match kind {
        CellKind::Grass => GRASS,
        CellKind::Apple => APPLE,
        CellKind::Chocolate => CHOCOLATE,
        CellKind::Wall => WALL,
    }
}
