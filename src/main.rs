//! CLI entry point for the Yardage Book tool.
//!
//! Provides subcommands for labelling a shot log, summarizing it per club,
//! analyzing a directory of bags, and inspecting the reference limits.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use yardage_book::analyzers::analyzer::{analyze_bags, analyze_log};
use yardage_book::analyzers::classify::classify_all;
use yardage_book::club::Club;
use yardage_book::limits::ShotLimits;
use yardage_book::output::{print_json, print_pretty, write_classified, write_json};
use yardage_book::parser::read_shot_log;

#[derive(Parser)]
#[command(name = "yardage_book")]
#[command(about = "Classify driving-range shots and summarize them per club", long_about = None)]
struct Cli {
    /// JSON file overriding the built-in reference limits
    #[arg(long, global = true, env = "YARDAGE_LIMITS")]
    limits: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Label every shot in a shot log
    Classify {
        /// Shot log CSV
        #[arg(value_name = "LOG")]
        source: String,

        /// CSV file to write the labelled shots to
        #[arg(short, long, default_value = "classified.csv")]
        output: String,
    },
    /// Summarize a shot log per club and shot shape
    Summarize {
        /// Shot log CSV
        #[arg(value_name = "LOG")]
        source: String,

        /// Only show this club (e.g. "Driver", "8", "PW")
        #[arg(short, long)]
        club: Option<Club>,

        /// Bag name recorded in the report (defaults to the file stem)
        #[arg(short, long)]
        bag: Option<String>,

        /// Optional: write the bag report to this JSON file
        #[arg(long)]
        json: Option<String>,
    },
    /// Analyze every shot log in a directory, one bag per CSV
    Bags {
        /// Directory containing shot log CSVs
        #[arg(short = 'd', long, default_value = "bags")]
        input_dir: String,

        /// Directory to write reports, summary.csv and bags.json to
        #[arg(short, long, default_value = "reports")]
        output_dir: String,
    },
    /// Show the active reference limits
    Limits,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/yardage_book.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("yardage_book.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let limits = match &cli.limits {
        Some(path) => {
            info!(path = %path, "Using limits file");
            ShotLimits::load(path)?
        }
        None => ShotLimits::default(),
    };

    for club in limits.unreachable_shape_bands() {
        warn!(club = %club, "Straight limit is not below curve limit; Draw and Fade cannot occur");
    }

    match cli.command {
        Commands::Classify { source, output } => {
            let shots = read_shot_log(&source)?;
            let classified = classify_all(&shots, &limits)?;
            write_classified(&output, &classified)?;

            info!(shots = classified.len(), output = %output, "Shot log classified");
        }
        Commands::Summarize {
            source,
            club,
            bag,
            json,
        } => {
            let bag = bag.unwrap_or_else(|| bag_name(&source));
            let report = analyze_log(&bag, &source, &limits)?;

            for summary in &report.clubs {
                if club.is_some_and(|c| c != summary.club) {
                    continue;
                }

                info!(
                    club = %summary.club,
                    total = summary.total,
                    baseline_carry = summary.baseline_carry,
                    good_or_soft = summary.good_or_soft_fraction(),
                    "Club"
                );
                for (shape, aggregate) in &summary.shapes {
                    info!(
                        club = %summary.club,
                        shape = %shape,
                        count = aggregate.count,
                        fraction = aggregate.fraction,
                        median_carry = aggregate.median_carry,
                        mean_offline = aggregate.mean_offline,
                        offline_stddev = aggregate.offline_stddev,
                        "Shape"
                    );
                }
                print_pretty(summary);
            }

            if let Some(club) = club {
                if report.club(club).is_none() {
                    warn!(club = %club, "No shots for club");
                }
            }

            if let Some(json) = json {
                write_json(Path::new(&json), &report)?;
                info!(path = %json, "Bag report written");
            }
        }
        Commands::Bags {
            input_dir,
            output_dir,
        } => {
            let index = analyze_bags(&input_dir, &output_dir, &limits)?;
            print_json(&index)?;
        }
        Commands::Limits => {
            for (club, club_limits) in limits.iter() {
                info!(
                    club = %club,
                    ball_speed = club_limits.ball_speed,
                    launch_angle_min = club_limits.launch_angle.min,
                    launch_angle_max = club_limits.launch_angle.max,
                    height_min = club_limits.height.min,
                    height_max = club_limits.height.max,
                    straight = club_limits.straight,
                    curve = club_limits.curve,
                    offset = club_limits.offset,
                    offline = club_limits.offline,
                    "Limits"
                );
            }
        }
    }

    Ok(())
}

/// Bag name for a shot log: its file stem, or the whole source if it has none.
fn bag_name(source: &str) -> String {
    Path::new(source)
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or(source)
        .to_string()
}
