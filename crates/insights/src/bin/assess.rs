use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use health::dto::HealthSnapshot;
use health::services::risk_scoring;
use insights::{GatewayConfig, InsightAggregator};

#[derive(Parser)]
#[command(name = "assess")]
#[command(about = "Kavach health risk assessment", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the deterministic risk scorer over a snapshot file, offline.
    Score {
        /// Path to a JSON file with { vitals, environment, parents }.
        file: PathBuf,
    },
    /// Request AI-generated insights for a snapshot via the gateway.
    Insights {
        /// Path to a JSON file with { vitals, environment, parents }.
        file: PathBuf,

        #[arg(long, env = "AI_GATEWAY_API_KEY", hide_env_values = true)]
        api_key: String,

        #[arg(long, env = "AI_GATEWAY_URL")]
        gateway_url: Option<String>,

        #[arg(long, env = "AI_GATEWAY_MODEL")]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("assess={},insights={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Score { file } => {
            let snapshot = load_snapshot(&file).await?;
            let assessment = risk_scoring::score_snapshot(&snapshot);
            tracing::info!(
                "Risk level: {} (score {})",
                assessment.level.as_str(),
                assessment.score
            );
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Commands::Insights {
            file,
            api_key,
            gateway_url,
            model,
        } => {
            let snapshot = load_snapshot(&file).await?;

            let mut config = GatewayConfig::new(api_key);
            if let Some(url) = gateway_url {
                config.base_url = url;
            }
            if let Some(model) = model {
                config.model = model;
            }

            let aggregator = InsightAggregator::from_gateway(config)?;
            let insights = aggregator.health_insights(&snapshot).await?;
            tracing::info!("Risk level: {}", insights.risk_level.as_str());
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
    }

    Ok(())
}

async fn load_snapshot(file: &PathBuf) -> Result<HealthSnapshot, Box<dyn std::error::Error>> {
    tracing::info!("Loading health snapshot from: {}", file.display());
    let json_content = tokio::fs::read_to_string(file).await?;
    let snapshot: HealthSnapshot = serde_json::from_str(&json_content)?;
    Ok(snapshot)
}
