use clap::{Parser, Subcommand};
use crate::cli::output::{is_tty, Renderer};
use crate::cli::repl::{run_loop, spawn_reader, App, AppEvent};
use crate::config::{ColorMode, Config};
use crate::game::scoring::ScoreReport;
use crate::game::{Controller, SystemClock};
use crate::utils::parse_duration;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufReader};
use std::sync::{mpsc, Arc, Mutex};

/// Clock tick period
const TICK_PERIOD: std::time::Duration = std::time::Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "pipequiz")]
#[command(about = "Pipeline Quiz - Put the stages of an IoT data pipeline in order")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Seed for the component shuffle (random if omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,
    /// Print the game clock every second
    #[arg(long, global = true)]
    pub ticks: bool,
    /// Print activity log entries as they are recorded
    #[arg(long, global = true)]
    pub echo_log: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play an interactive game (default)
    Play,
    /// Compute the score for a given result without playing
    Score {
        /// Number of components in their correct step (0-7)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=7))]
        correct: u8,
        /// Elapsed time (e.g., "45s", "2m30s", "04:10")
        #[arg(long)]
        elapsed: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Settings for one interactive game, after merging rc file and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub color: bool,
    pub ticks: bool,
    pub echo_log: bool,
    pub message_timeout_secs: i64,
}

impl PlayOptions {
    pub fn resolve(cli: &Cli, config: &Config, is_tty: bool) -> Self {
        let color_mode = cli.color.unwrap_or(config.color);
        Self {
            seed: cli.seed,
            color: color_mode.enabled(is_tty),
            ticks: cli.ticks || config.ticks,
            echo_log: cli.echo_log || config.echo_log,
            message_timeout_secs: config.message_timeout_secs,
        }
    }
}

pub fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init()
        .ok();

    let cli = Cli::parse();
    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Play) => {
            let config = Config::load()?;
            // Windows consoles need ANSI processing switched on explicitly
            let ansi_ok = enable_ansi_support::enable_ansi_support().is_ok();
            let mut options = PlayOptions::resolve(&cli, &config, is_tty());
            options.color &= ansi_ok;
            handle_play(options)
        }
        Some(Commands::Score { correct, elapsed, json }) => handle_score(*correct, elapsed, *json),
    }
}

/// Run an interactive game on stdin/stdout
pub fn handle_play(options: PlayOptions) -> Result<()> {
    log::debug!("Starting game with {:?}", options);

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let message_timeout = chrono::Duration::try_seconds(options.message_timeout_secs)
        .with_context(|| format!("Message timeout out of range: {}s", options.message_timeout_secs))?;

    let (tx, rx) = mpsc::channel();
    let tick_tx = Mutex::new(tx.clone());
    let controller = Controller::new(Arc::new(SystemClock), rng)
        .with_message_timeout(message_timeout)
        .with_ticker(
            TICK_PERIOD,
            Arc::new(move || {
                tick_tx
                    .lock()
                    .map(|tx| tx.send(AppEvent::Tick).is_ok())
                    .unwrap_or(false)
            }),
        );
    let renderer = Renderer::new(options.color)
        .with_ticks(options.ticks)
        .with_echo_log(options.echo_log);

    spawn_reader(BufReader::new(io::stdin()), tx);

    let app = App::new(controller, renderer, io::stdout());
    run_loop(app, rx).context("Game loop failed")?;
    Ok(())
}

/// Print the score for a hypothetical result
pub fn handle_score(correct: u8, elapsed: &str, json: bool) -> Result<()> {
    let secs = parse_duration(elapsed)
        .with_context(|| format!("Invalid elapsed time '{}'", elapsed))?;
    let elapsed = chrono::Duration::try_seconds(secs)
        .with_context(|| format!("Elapsed time out of range: {}", elapsed))?;
    let report = ScoreReport::new(correct as usize, elapsed);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format_score_report(&report));
    Ok(())
}

pub fn format_score_report(report: &ScoreReport) -> String {
    let tier = match report.tier {
        crate::game::AccuracyTier::Perfect => "perfect",
        crate::game::AccuracyTier::Good => "good",
        crate::game::AccuracyTier::NeedsImprovement => "needs improvement",
    };
    format!(
        "Correct:     {}/7\nBase score:  {}\nTime bonus:  {}\nTotal score: {}\nAccuracy:    {}% ({})\n\n{}",
        report.correct_count,
        report.base_score,
        report.time_bonus,
        report.total_score,
        report.accuracy,
        tier,
        report.message()
    )
}
