//! Dark theme with blue accents

use eframe::egui;
use egui::Color32;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_TOP: Color32 = Color32::from_rgb(17, 24, 39);            // #111827 - gradient start
    pub const BG_BOTTOM: Color32 = Color32::from_rgb(0, 0, 0);            // #000000 - gradient end
    pub const NAV_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 128);
    pub const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);
    pub const INSET_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 128);
    pub const CHIP_FILL: Color32 = Color32::from_rgba_premultiplied(12, 26, 49, 51);

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(209, 213, 219); // gray-300
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);     // gray-400

    // === Accents ===
    pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);          // blue-400
    pub const ACCENT_SOFT: Color32 = Color32::from_rgb(147, 197, 253);    // blue-300
    pub const BUTTON: Color32 = Color32::from_rgb(59, 130, 246);          // blue-500
}

/// Dark egui Visuals with transparent panels so the particle field shows through
pub fn portfolio_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = BG_TOP;
    visuals.extreme_bg_color = INSET_FILL;

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.hyperlink_color = ACCENT;

    visuals.widgets.inactive.weak_bg_fill = BUTTON;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(37, 99, 235); // blue-600
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, ACCENT_SOFT);
    visuals.widgets.active.weak_bg_fill = Color32::from_rgb(29, 78, 216);

    visuals.selection.bg_fill = Color32::from_rgb(37, 99, 235);
    visuals.selection.stroke = egui::Stroke::new(2.0, ACCENT);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
