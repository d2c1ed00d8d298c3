//! Page sections: hero, about, projects, contact and footer

use eframe::egui;
use tracing::debug;

use crate::config::Profile;
use crate::theme::colors;
use super::PortfolioApp;

/// Two-column layouts from this width up
const WIDE_WIDTH: f32 = 768.0;
/// Three project cards per row from this width up
const WIDEST_WIDTH: f32 = 1024.0;
/// Content column width cap
const MAX_CONTENT_WIDTH: f32 = 1100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: &'static [Section] = &[
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

fn card<R>(ui: &mut egui::Ui, fill: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(12.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

fn chips(ui: &mut egui::Ui, items: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            egui::Frame::new()
                .fill(colors::CHIP_FILL)
                .corner_radius(12.0)
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(item).color(colors::ACCENT_SOFT));
                });
        }
    });
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).size(36.0).strong());
    });
    ui.add_space(32.0);
}

impl PortfolioApp {
    pub(crate) fn render_sections(&mut self, ui: &mut egui::Ui) {
        let page_height = ui.available_height();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            // Drags on empty space belong to the particle field
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let width = ui.available_width().min(MAX_CONTENT_WIDTH);
                let margin = (ui.available_width() - width) * 0.5;

                for &section in Section::ALL {
                    let response = ui
                        .horizontal(|ui| {
                            ui.add_space(margin);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                ui.set_min_height(page_height);
                                match section {
                                    Section::Home => render_hero(ui, &self.profile, page_height),
                                    Section::About => render_about(ui, &self.profile, width),
                                    Section::Projects => render_projects(ui, &self.profile, width),
                                    Section::Contact => self.render_contact(ui, width),
                                }
                            });
                        })
                        .response;

                    if self.scroll_target == Some(section) {
                        response.scroll_to_me(Some(egui::Align::TOP));
                        self.scroll_target = None;
                    }
                }

                render_footer(ui, &self.profile);
            });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui, width: f32) {
        ui.add_space(80.0);
        section_title(ui, "Get In Touch");

        let profile = &self.profile;
        let form = &mut self.contact;
        card(ui, colors::CARD_FILL, |ui| {
            let info = |ui: &mut egui::Ui| {
                ui.label(egui::RichText::new("Contact Info").size(24.0).strong());
                ui.add_space(12.0);
                ui.hyperlink_to(
                    egui::RichText::new(&profile.email).color(colors::TEXT_SECONDARY),
                    format!("mailto:{}", profile.email),
                );
                ui.hyperlink_to(
                    egui::RichText::new("LinkedIn").color(colors::TEXT_SECONDARY),
                    &profile.linkedin,
                );
                ui.hyperlink_to(
                    egui::RichText::new("GitHub").color(colors::TEXT_SECONDARY),
                    &profile.github,
                );
            };
            let mut form_ui = |ui: &mut egui::Ui| {
                let field_width = ui.available_width();
                ui.add(
                    egui::TextEdit::singleline(&mut form.name)
                        .hint_text("Your Name")
                        .desired_width(field_width),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut form.email)
                        .hint_text("Your Email")
                        .desired_width(field_width),
                );
                ui.add(
                    egui::TextEdit::multiline(&mut form.message)
                        .hint_text("Your Message")
                        .desired_rows(4)
                        .desired_width(field_width),
                );
                let send = egui::Button::new("Send Message")
                    .min_size(egui::vec2(field_width, 32.0));
                if ui.add(send).clicked() {
                    debug!(
                        message_len = form.message.len(),
                        "contact form has no submission handler"
                    );
                }
            };

            if width >= WIDE_WIDTH {
                ui.columns(2, |columns| {
                    info(&mut columns[0]);
                    form_ui(&mut columns[1]);
                });
            } else {
                info(ui);
                ui.add_space(24.0);
                form_ui(ui);
            }
        });
    }
}

fn render_hero(ui: &mut egui::Ui, profile: &Profile, page_height: f32) {
    ui.vertical_centered(|ui| {
        ui.add_space(page_height * 0.3);
        ui.label(
            egui::RichText::new(&profile.name)
                .size(64.0)
                .strong()
                .color(colors::ACCENT),
        );
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new(&profile.title)
                .size(24.0)
                .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(32.0);
        ui.label(egui::RichText::new(&profile.bio).color(colors::TEXT_MUTED));
        ui.add_space(48.0);
        ui.hyperlink_to("GitHub", &profile.github);
        ui.hyperlink_to("LinkedIn", &profile.linkedin);
        ui.hyperlink_to("Mail", format!("mailto:{}", profile.email));
    });
}

fn render_about(ui: &mut egui::Ui, profile: &Profile, width: f32) {
    ui.add_space(80.0);
    section_title(ui, "About Me");

    card(ui, colors::CARD_FILL, |ui| {
        ui.label(egui::RichText::new(&profile.about).color(colors::TEXT_SECONDARY));
        ui.add_space(24.0);

        let skills = |ui: &mut egui::Ui| {
            card(ui, colors::INSET_FILL, |ui| {
                ui.label(egui::RichText::new("Skills").size(20.0).strong());
                ui.add_space(16.0);
                chips(ui, &profile.skills);
            });
        };
        let education = |ui: &mut egui::Ui| {
            card(ui, colors::INSET_FILL, |ui| {
                ui.label(egui::RichText::new("Education").size(20.0).strong());
                ui.add_space(16.0);
                let education = &profile.education;
                for line in [&education.institution, &education.degree, &education.years] {
                    ui.label(egui::RichText::new(line).color(colors::TEXT_SECONDARY));
                }
            });
        };

        if width >= WIDE_WIDTH {
            ui.columns(2, |columns| {
                skills(&mut columns[0]);
                education(&mut columns[1]);
            });
        } else {
            skills(ui);
            ui.add_space(24.0);
            education(ui);
        }
    });
}

fn render_projects(ui: &mut egui::Ui, profile: &Profile, width: f32) {
    ui.add_space(80.0);
    section_title(ui, "Projects");

    let per_row = if width >= WIDEST_WIDTH {
        3
    } else if width >= WIDE_WIDTH {
        2
    } else {
        1
    };

    for row in profile.projects.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (column, project) in columns.iter_mut().zip(row) {
                card(column, colors::CARD_FILL, |ui| {
                    ui.label(egui::RichText::new(&project.title).size(20.0).strong());
                    ui.add_space(16.0);
                    ui.label(egui::RichText::new(&project.description).color(colors::TEXT_SECONDARY));
                    ui.add_space(16.0);
                    chips(ui, &project.tech);
                    ui.add_space(16.0);
                    ui.hyperlink_to("View Project →", &project.link);
                });
            }
        });
        ui.add_space(32.0);
    }
}

fn render_footer(ui: &mut egui::Ui, profile: &Profile) {
    let text = match footer_year(profile) {
        Some(year) => format!("© {year} {}. All rights reserved.", profile.name),
        None => format!("© {}. All rights reserved.", profile.name),
    };
    egui::Frame::new()
        .fill(colors::NAV_FILL)
        .inner_margin(32.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(text).color(colors::TEXT_MUTED));
            });
        });
}

fn footer_year(profile: &Profile) -> Option<u32> {
    #[cfg(target_arch = "wasm32")]
    {
        profile
            .copyright_year
            .or_else(|| Some(js_sys::Date::new_0().get_full_year()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        profile.copyright_year
    }
}
