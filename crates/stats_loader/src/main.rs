//! Club Stats CLI
//!
//! Match export CSV → answers to the club's analytical questions

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use club_stats::{Dataset, QuestionId};
#[cfg(feature = "cli")]
use stats_loader::ConfigOverrides;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "club-stats")]
#[command(about = "Answer analytical questions about per-match player statistics", long_about = None)]
struct Cli {
    /// YAML analysis config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the strict preset (99% intervals, alpha 0.01)
    #[arg(long, global = true, conflicts_with = "config")]
    strict: bool,

    /// Confidence level for intervals, overrides the config
    #[arg(long, global = true)]
    confidence: Option<f64>,

    /// Significance level for tests, overrides the config
    #[arg(long, global = true)]
    alpha: Option<f64>,

    /// Ranking length, overrides the config
    #[arg(long, global = true)]
    top: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct DataArgs {
    /// Match export CSV file path
    #[arg(long)]
    csv: PathBuf,

    /// Only use appearances in this position (e.g. "F")
    #[arg(long)]
    position: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the question catalogue
    Questions,

    /// Answer one question
    Ask {
        /// Question id (see `questions`)
        id: QuestionId,

        #[command(flatten)]
        data: DataArgs,

        /// Print JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Answer every question
    Report {
        #[command(flatten)]
        data: DataArgs,

        /// Print JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Per-player season totals, most goals first
    Players {
        #[command(flatten)]
        data: DataArgs,

        /// Show only the first N players (0 shows everyone)
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.overrides().resolve()?;

    match cli.command {
        Commands::Questions => {
            for id in QuestionId::ALL {
                println!("{:<26} {}", id.slug(), id.title());
                println!("{:<26} {}", "", id.prompt());
            }
        }

        Commands::Ask { id, data, json } => {
            let dataset = load(&data)?;
            let report =
                stats_loader::build_report(&dataset, data.position.as_deref(), &[id], &config);
            emit(&report, json)?;
        }

        Commands::Report { data, json } => {
            let dataset = load(&data)?;
            let report = stats_loader::build_report(
                &dataset,
                data.position.as_deref(),
                &QuestionId::ALL,
                &config,
            );
            emit(&report, json)?;
        }

        Commands::Players { data, limit } => {
            let dataset = load(&data)?;
            let selection = match &data.position {
                Some(pos) => dataset.in_position(pos),
                None => dataset,
            };
            let table = selection.group_by_player();
            print!("{}", stats_loader::render::render_players(&table, limit));
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(feature = "cli")]
impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            strict: self.strict,
            confidence_level: self.confidence,
            significance_level: self.alpha,
            top_n: self.top,
        }
    }
}

#[cfg(feature = "cli")]
fn load(data: &DataArgs) -> Result<Dataset> {
    let (dataset, stats) = stats_loader::load_dataset(&data.csv)?;
    if stats.failed > 0 {
        eprintln!(
            "⚠️  {} of {} rows could not be parsed and were skipped",
            stats.failed, stats.total_rows
        );
    }
    Ok(dataset)
}

#[cfg(feature = "cli")]
fn emit(report: &stats_loader::Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", stats_loader::render::render_report(report));
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("club-stats CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
