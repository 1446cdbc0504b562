mod app;
mod broadcaster;
mod colors;
mod config;
mod game_ui;
mod state;

use clap::Parser;
use eframe::egui;
use snake_common::config::Validate;
use snake_common::games::snake::{FileScoreStore, MemoryScoreStore, ScoreStore, SnakeSession, SnakeSettings};
use snake_common::{log, logger};
use std::sync::Arc;
use tokio::sync::mpsc;

use app::SnakeApp;
use broadcaster::LocalBroadcaster;
use config::{get_config_manager, get_config_path, Config};
use state::SharedState;

#[derive(Parser)]
#[command(name = "snake_client", about = "Classic Snake on a square grid")]
struct Args {
    /// YAML config file. Defaults to snake_client_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    high_score_file: Option<String>,

    #[arg(long)]
    tick_interval_ms: Option<u64>,

    #[arg(long)]
    board_size: Option<i32>,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the high score in memory only.
    #[arg(long)]
    no_persist: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(args: &Args) -> Result<Config, String> {
    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let mut config = get_config_manager(&config_path).get_config()?;

    if let Some(high_score_file) = &args.high_score_file {
        config.high_score_file = high_score_file.clone();
    }
    if let Some(tick_interval_ms) = args.tick_interval_ms {
        config.snake.tick_interval_ms = tick_interval_ms;
    }
    if let Some(board_size) = args.board_size {
        config.snake.board_size = board_size;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args)?;
    let settings = SnakeSettings {
        seed: args.seed,
        ..SnakeSettings::from(&config.snake)
    };

    let store: Arc<dyn ScoreStore> = if args.no_persist {
        Arc::new(MemoryScoreStore::default())
    } else {
        log!("High score file: {}", config.high_score_file);
        Arc::new(FileScoreStore::from_yaml_file(&config.high_score_file))
    };

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let shared_state = SharedState::new(command_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 860.0])
            .with_title("Snake"),
        ..Default::default()
    };

    let shared_state_for_app = shared_state.clone();
    eframe::run_native(
        "Snake",
        options,
        Box::new(move |cc| {
            let broadcaster = LocalBroadcaster::new(shared_state.clone(), Some(cc.egui_ctx.clone()));

            std::thread::spawn(move || {
                let rt = match tokio::runtime::Runtime::new() {
                    Ok(rt) => rt,
                    Err(e) => {
                        log!("Failed to start game runtime: {}", e);
                        return;
                    }
                };
                rt.block_on(SnakeSession::run(settings, store, broadcaster, command_rx));
            });

            Ok(Box::new(SnakeApp::new(shared_state_for_app)))
        }),
    )?;

    Ok(())
}
