//! Pentago: terminal game by default, egui board with `--gui`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pentago::cli::{self, Players};
use pentago::ui::PentagoApp;
use pentago::{AIEngine, Args, Game};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.engine_config();

    if args.gui {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 700.0])
                .with_min_inner_size([720.0, 560.0])
                .with_title("Pentago"),
            ..Default::default()
        };
        let players = Players::new(args.white, args.black);
        return match eframe::run_native(
            "Pentago",
            options,
            Box::new(move |cc| Ok(Box::new(PentagoApp::new(cc, players, config)))),
        ) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(%err, "GUI failed");
                ExitCode::FAILURE
            }
        };
    }

    let engine = AIEngine::with_config(config);
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    match cli::play(&mut game, Players::new(args.white, args.black), &engine, &mut input, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "terminal game aborted");
            ExitCode::FAILURE
        }
    }
}
