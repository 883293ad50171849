mod app;
mod colors;
mod config;
mod game_ui;

use clap::Parser;
use common::game::GameRng;
use eframe::egui;

use app::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_client", about = "Single-player snake with editable walls")]
struct Args {
    /// Path to the YAML config file. Defaults to a file next to the
    /// executable, created on first save.
    #[arg(long)]
    config: Option<String>,
    /// Seed for food placement. Random when omitted; the chosen seed is
    /// logged so a round can be replayed.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::logger::init_logger(None);

    let config_manager = match args.config.as_deref() {
        Some(path) => config::config_manager_at(path),
        None => config::get_config_manager(),
    };
    let config = config_manager.get_config()?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    common::log!("Food placement seed: {}", rng.seed());

    let canvas_size = config.window.canvas_size as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_size + 20.0, canvas_size + 80.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(config, rng)))),
    )?;

    Ok(())
}
