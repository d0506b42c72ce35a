pub mod analysis;
pub mod commands;
pub mod error;
pub mod models;

use clap::Parser;
use commands::{
    galaxy::{build_galaxy_report, compute_galaxy, compute_prediction, rank_by_score},
    provider::{ConfiguredProvider, JsonFileProvider, MockSignalProvider},
    settings::{load_effective_settings, EffectiveSettings, OutputOrder},
};
use error::RiskError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "riskgalaxy", version, about = "Score per-file fragility from churn, ownership and complexity")]
pub struct Cli {
    /// Workspace holding .riskgalaxy/settings.json
    #[arg(default_value = ".")]
    pub workspace: PathBuf,

    /// Print the prediction view for one file id instead of the full galaxy
    #[arg(long, value_name = "FILE_ID")]
    pub predict: Option<String>,

    /// Seed for the trend jitter; overrides trendSeed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Order files by descending score
    #[arg(long)]
    pub ranked: bool,
}

pub async fn run() -> Result<(), RiskError> {
    let cli = Cli::parse();
    let settings = load_effective_settings(&cli.workspace)?;

    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .try_init()
        .ok();

    let output = execute(&cli, &settings).await?;
    println!("{output}");
    Ok(())
}

/// Run one pipeline pass for `cli` and return the pretty JSON to print.
pub async fn execute(cli: &Cli, settings: &EffectiveSettings) -> Result<String, RiskError> {
    let provider = match &settings.signals_file {
        Some(path) => ConfiguredProvider::File(JsonFileProvider::new(path)),
        None => ConfiguredProvider::Mock(MockSignalProvider::default()),
    };

    let mut rng = match cli.seed.or(settings.trend_seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let rendered = if let Some(file_id) = &cli.predict {
        let prediction = compute_prediction(&provider, file_id, &mut rng).await?;
        serde_json::to_string_pretty(&prediction)
    } else {
        let mut files = compute_galaxy(&provider, &mut rng).await?;
        if cli.ranked || settings.output_order == OutputOrder::Score {
            files = rank_by_score(&files);
        }
        let report = build_galaxy_report(
            files,
            uuid::Uuid::new_v4().to_string(),
            chrono::Utc::now().timestamp(),
        );
        log::info!(
            "run {}: {} files, average {:.2}, {} high risk",
            report.run_id,
            report.file_count,
            report.average_score,
            report.high_risk_count
        );
        serde_json::to_string_pretty(&report)
    };

    rendered.map_err(|e| RiskError::Output(format!("Failed to serialize output: {e}")))
}
