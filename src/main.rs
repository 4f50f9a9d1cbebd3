//! Slideways GUI
//!
//! A graphical interface for playing Slideways against the AI or another player.

use std::path::Path;
use std::process::ExitCode;

use log::error;
use slideways::ui::SlidewaysApp;
use slideways::GameConfig;

const CONFIG_PATH: &str = "slideways.toml";

fn main() -> ExitCode {
    if let Err(e) = simple_logger::init_with_level(log::Level::Info) {
        eprintln!("failed to initialize logger: {e}");
    }

    let config = match GameConfig::load_or_default(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("Slideways"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Slideways",
        options,
        Box::new(|cc| Ok(Box::new(SlidewaysApp::new(cc, config)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
