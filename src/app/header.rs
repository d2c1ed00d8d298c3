//! Navigation bar

use eframe::egui;
use crate::theme::colors;
use super::{PortfolioApp, Section};

/// Below this width the section links collapse into a menu
const NARROW_WIDTH: f32 = 640.0;

impl PortfolioApp {
    pub(crate) fn render_nav(&mut self, ui: &mut egui::Ui) {
        let narrow = ui.available_width() < NARROW_WIDTH;
        if !narrow {
            self.menu_open = false;
        }

        ui.horizontal(|ui| {
            let name = egui::RichText::new(&self.profile.name)
                .size(24.0)
                .strong()
                .color(colors::ACCENT);
            if ui
                .add(egui::Label::new(name).sense(egui::Sense::click()))
                .clicked()
            {
                self.go_to(Section::Home);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if narrow {
                    let toggle = if self.menu_open { "Close" } else { "Menu" };
                    if ui.button(toggle).clicked() {
                        self.menu_open = !self.menu_open;
                    }
                } else {
                    // Right-to-left: last section first
                    for &section in Section::ALL.iter().rev() {
                        self.nav_link(ui, section);
                        ui.add_space(16.0);
                    }
                }

                if self.show_fps {
                    ui.label(
                        egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                            .color(colors::TEXT_MUTED)
                            .monospace(),
                    );
                }
            });
        });

        if narrow && self.menu_open {
            ui.add_space(8.0);
            ui.vertical(|ui| {
                for &section in Section::ALL {
                    self.nav_link(ui, section);
                }
            });
        }
    }

    fn nav_link(&mut self, ui: &mut egui::Ui, section: Section) {
        let link = egui::Button::new(egui::RichText::new(section.label()).color(colors::TEXT_PRIMARY))
            .frame(false);
        if ui.add(link).clicked() {
            self.go_to(section);
        }
    }

    fn go_to(&mut self, section: Section) {
        self.scroll_target = Some(section);
        self.menu_open = false;
    }
}

/// FPS counter over the last 60 frames
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    /// Record a frame at `now` seconds
    pub fn tick(&mut self, now: f64) {
        self.frames.push(now);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
