#![warn(clippy::all)]

use anyhow::{ensure, Context, Result};
use clap::Parser;
use conway_life::{AsciiRenderer, Config, Dimensions, Life, Scheduler};
use std::{path::PathBuf, sync::PoisonError, time::Duration};

#[derive(Parser, Debug)]
#[command(
    name = "conway_life",
    version,
    about = "Auto-plays Conway's Game of Life on a bounded board"
)]
struct Cli {
    /// Rows of a randomly filled board.
    #[arg(long, default_value_t = Config::DEFAULT_ROWS)]
    rows: usize,

    /// Columns of a randomly filled board.
    #[arg(long, default_value_t = Config::DEFAULT_COLUMNS)]
    columns: usize,

    /// Milliseconds between generations.
    #[arg(long, default_value_t = Config::TICK_PERIOD.as_millis() as u64)]
    period_ms: u64,

    /// Seed for the random board.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations (runs until Ctrl-C otherwise).
    #[arg(long)]
    generations: Option<u64>,

    /// Square starting board: a `.rle` pattern or a JSON array of boolean rows.
    #[arg(long)]
    board: Option<PathBuf>,

    #[arg(long, default_value_t = log::Level::Warn)]
    log_level: log::Level,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::init_with_level(cli.log_level).context("failed to initialize logger")?;
    ensure!(
        cli.rows >= 1 && cli.columns >= 1,
        "board dimensions must be positive"
    );

    let config = Config::default()
        .with_dimensions(Dimensions::new(cli.rows, cli.columns))
        .with_period(Duration::from_millis(cli.period_ms))
        .with_seed(cli.seed);
    let mut life = Life::from_config(config);
    life.set_renderer(Box::new(AsciiRenderer::stdout()));

    if let Some(path) = &cli.board {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let is_rle = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("rle"));
        let loaded = if is_rle {
            life.load_rle(&text)
        } else {
            life.load_json(&text)
        };
        loaded.with_context(|| format!("invalid board in {}", path.display()))?;
    }

    let mut scheduler = Scheduler::new(life);
    scheduler.start();
    match cli.generations {
        Some(target) => wait_for_generation(&scheduler, target).await,
        None => tokio::signal::ctrl_c()
            .await
            .context("failed to listen for Ctrl-C")?,
    }
    scheduler.pause();
    Ok(())
}

async fn wait_for_generation(scheduler: &Scheduler, target: u64) {
    let poll = (scheduler.period() / 4).max(Duration::from_millis(1));
    let mut ticker = tokio::time::interval(poll);
    loop {
        ticker.tick().await;
        let generation = scheduler
            .life()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generation();
        if generation >= target {
            break;
        }
    }
}
