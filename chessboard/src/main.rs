use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chessboard::app::AppState;
use chessboard::config::{Settings, LOG_FILE_PREFIX};
use chessboard::ui;

/// Two-player chess board for the terminal.
///
/// Moves are checked for piece movement and turn order only; there is no
/// check, castling, en passant or promotion.
#[derive(Parser)]
#[command(name = "chessboard", version)]
struct Cli {
    /// Start from a piece placement (first field of a FEN string).
    #[arg(long, value_name = "PLACEMENT")]
    position: Option<String>,

    /// Reject a pawn double step when the square it passes over is occupied.
    #[arg(long)]
    strict_pawn_path: bool,

    /// Draw the board from black's side.
    #[arg(long)]
    flipped: bool,

    /// Directory for the daily log file.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// Flags win over the environment.
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(position) = self.position {
            settings.start_position = Some(position);
        }
        if self.strict_pawn_path {
            settings.strict_pawn_path = true;
        }
        if self.flipped {
            settings.flipped = true;
        }
        if let Some(log_dir) = self.log_dir {
            settings.log_dir = log_dir;
        }
        settings
    }
}

fn main() -> anyhow::Result<()> {
    let settings = Cli::parse().apply(Settings::from_env());

    // Set up tracing with file output; the terminal belongs to the UI
    std::fs::create_dir_all(&settings.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&settings.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(
        strict_pawn_path = settings.strict_pawn_path,
        custom_position = settings.start_position.is_some(),
        "Chessboard starting up"
    );

    let app_state = AppState::from_settings(&settings).context("invalid start position")?;

    println!("Chessboard - Terminal Chess");
    println!(
        "Debug logs: {}/{}.YYYY-MM-DD",
        settings.log_dir.display(),
        LOG_FILE_PREFIX
    );
    ui::run_app(app_state)?;

    tracing::info!("Chessboard shutting down");
    Ok(())
}
