//! Ta-Te-Ti GUI
//!
//! Play 5x5 K-in-a-row against the engine or another player.

use tateti::ui::TatetiApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 480.0])
            .with_title("Ta-Te-Ti 5x5"),
        ..Default::default()
    };

    eframe::run_native(
        "Ta-Te-Ti",
        options,
        Box::new(|cc| Ok(Box::new(TatetiApp::new(cc)))),
    )
}
