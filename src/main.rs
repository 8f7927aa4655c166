//! Tic-Tac-Toe GUI
//!
//! A graphical interface for playing Tic-Tac-Toe against the AI or another player.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::cli::Cli;
use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = cli.config();
    info!(?config, "starting Tic-Tac-Toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([150.0, 150.0])
            .with_resizable(true)
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )
}
