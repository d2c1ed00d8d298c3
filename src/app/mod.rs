//! Portfolio page app
//!
//! This module contains the egui app that runs on both native and WASM
//! platforms. Each frame paints the particle field on the background layer,
//! then the navigation bar and the scrolling page sections on top of it.

mod header;
mod sections;

use eframe::egui;
use tracing::info;

use crate::config::Profile;
use crate::field::Mount;
use crate::render::{paint_backdrop, paint_points};
use crate::theme::{colors, portfolio_visuals};

pub use sections::Section;

/// Host the particle field is mounted into on this platform
#[cfg(target_arch = "wasm32")]
pub type PlatformHost = crate::web::WebHost;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHost = crate::window::WindowHost;

/// Contact form fields. The page has no submission handler.
#[derive(Default)]
pub(crate) struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Portfolio page - runs on both native and WASM
pub struct PortfolioApp {
    /// Particle field; torn down when the app is dropped
    mount: Mount<PlatformHost>,
    /// Page content
    pub(crate) profile: Profile,
    /// FPS counter
    pub(crate) fps_counter: header::FpsCounter,
    /// FPS readout in the nav bar (F3)
    pub(crate) show_fps: bool,
    /// Collapsed navigation menu open (narrow layouts)
    pub(crate) menu_open: bool,
    /// Section to scroll to on the next frame
    pub(crate) scroll_target: Option<Section>,
    pub(crate) contact: ContactForm,
}

impl PortfolioApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mount: Mount<PlatformHost>,
        profile: Profile,
    ) -> Self {
        cc.egui_ctx.set_visuals(portfolio_visuals());
        info!(name = %profile.name, projects = profile.projects.len(), "portfolio app created");

        Self {
            mount,
            profile,
            fps_counter: header::FpsCounter::new(),
            show_fps: false,
            menu_open: false,
            scroll_target: None,
            contact: ContactForm::default(),
        }
    }

    /// Advance the field one frame and paint it under everything else
    fn paint_field(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::background());
        paint_backdrop(&painter, screen);
        if let Some(points) = self.mount.frame() {
            paint_points(&painter, screen.min, points);
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Continuous repaint drives the render loop
        ctx.request_repaint();

        self.fps_counter.tick(ctx.input(|i| i.time));
        if ctx.input(|i| i.key_pressed(egui::Key::F3)) {
            self.show_fps = !self.show_fps;
        }

        // The browser host gets resize events from the window listener instead
        #[cfg(not(target_arch = "wasm32"))]
        {
            let size = ctx.screen_rect().size();
            self.mount
                .host_mut()
                .observe(crate::field::Viewport::new(size.x, size.y));
        }

        self.paint_field(ctx);

        egui::TopBottomPanel::top("nav")
            .frame(egui::Frame::new().fill(colors::NAV_FILL).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_nav(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                // Empty page space orbits the camera
                let orbit = ui.interact(
                    ui.max_rect(),
                    ui.id().with("orbit_drag"),
                    egui::Sense::drag(),
                );
                if orbit.dragged() {
                    let delta = orbit.drag_delta();
                    self.mount.drag(delta.x, delta.y);
                }
                if orbit.hovered() {
                    let scroll = ctx.input(|i| i.raw_scroll_delta.y);
                    if scroll != 0.0 {
                        self.mount.scroll(scroll);
                    }
                }

                self.render_sections(ui);
            });
    }
}
