//! Native portfolio window
//!
//! Run with: cargo run --features native --bin particle-folio
//! Set PORTFOLIO_CONFIG to a JSON file to override the built-in content.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use eframe::egui;
    use particle_folio::app::PortfolioApp;
    use particle_folio::config::PortfolioConfig;
    use particle_folio::field::{Mount, Viewport};
    use particle_folio::window::WindowHost;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use tracing::info;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,particle_folio=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::var("PORTFOLIO_CONFIG") {
        Ok(path) => {
            info!(path = %path, "loading config");
            PortfolioConfig::load(&path)?
        }
        Err(_) => PortfolioConfig::default(),
    };

    let initial = Viewport::new(1280.0, 720.0);
    let mount = Mount::new(
        WindowHost::new(initial),
        &config.field,
        &mut SmallRng::from_entropy(),
    )?;

    let profile = config.profile;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([initial.width, initial.height])
            .with_min_inner_size([320.0, 240.0])
            .with_title(format!("{} - Portfolio", profile.name)),
        ..Default::default()
    };

    eframe::run_native(
        "particle-folio",
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, mount, profile)))),
    )?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
