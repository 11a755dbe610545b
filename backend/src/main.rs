use std::path::PathBuf;

use anyhow::{Context, anyhow};
use artistly_core::services::ReviewDecision;
use artistly_lib::config::{ApplicationDto, ArtistQueryDto, DashboardQueryDto};
use artistly_lib::{AppState, load_profile_image};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "artistly", version, about = "Artistly booking marketplace")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Browse the catalog with optional filters ("All" disables a filter).
  Artists {
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long = "price")]
    price_range: Option<String>,
  },
  /// Top-rated artists and per-category counts.
  Featured,
  /// Submit an artist application read from a TOML file.
  Onboard {
    #[arg(long)]
    file: PathBuf,
    #[arg(long)]
    image: Option<PathBuf>,
  },
  /// Manager dashboard.
  Dashboard {
    #[arg(long)]
    search: Option<String>,
    /// pending | approved | rejected | all
    #[arg(long, default_value = "all")]
    status: String,
  },
  /// Approve or reject a pending submission.
  Review {
    id: String,
    #[arg(value_enum)]
    decision: DecisionArg,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum DecisionArg {
  Approve,
  Reject,
}

impl From<DecisionArg> for ReviewDecision {
  fn from(arg: DecisionArg) -> Self {
    match arg {
      DecisionArg::Approve => ReviewDecision::Approve,
      DecisionArg::Reject => ReviewDecision::Reject,
    }
  }
}

fn init_tracing() {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "artistly=info,artistly_lib=info,artistly_core=info,artistly_storage=info".into()),
    )
    .with(fmt::layer().with_writer(std::io::stderr))
    .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  init_tracing();
  let cli = Cli::parse();

  let mut state = AppState::from_config().context("failed to initialize application state")?;

  match cli.command {
    Command::Artists { search, category, location, price_range } => {
      let list = artistly_lib::artists_filter(&mut state, ArtistQueryDto { search, category, location, price_range });
      print_json(&list)
    }
    Command::Featured => print_json(&artistly_lib::artists_featured(&state)),
    Command::Onboard { file, image } => {
      let raw = tokio::fs::read_to_string(&file).await.with_context(|| format!("reading {}", file.display()))?;
      let input: ApplicationDto = toml::from_str(&raw).with_context(|| format!("parsing {}", file.display()))?;
      let image = match image {
        Some(path) => {
          Some(load_profile_image(&path).await.with_context(|| format!("reading image {}", path.display()))?)
        }
        None => None,
      };

      let outcome = artistly_lib::onboard_submit(&state, input, image).await.map_err(|e| anyhow!(e))?;
      print_json(&outcome)
    }
    Command::Dashboard { search, status } => {
      let overview = artistly_lib::dashboard_overview(&state, DashboardQueryDto { search, status: Some(status) })
        .map_err(|e| anyhow!(e))?;
      print_json(&overview)
    }
    Command::Review { id, decision } => {
      let reviewed = artistly_lib::dashboard_review(&state, &id, decision.into()).map_err(|e| anyhow!(e))?;
      print_json(&reviewed)
    }
  }
}
