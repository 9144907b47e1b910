use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use insights::{GatewayConfig, InsightAggregator};

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::insights::handlers::generate_health_insights,
        features::insights::handlers::generate_wearable_summary,
        features::assessments::handlers::compute_risk_score,
    ),
    components(
        schemas(
            health::dto::HealthSnapshot,
            health::dto::WearableMetrics,
            health::models::VitalsReading,
            health::models::EnvironmentReading,
            health::models::HereditaryRecord,
            health::models::RiskAssessment,
            health::models::RiskFactor,
            health::models::Recommendation,
            health::models::RiskLevel,
            health::models::FactorStatus,
            health::models::Priority,
            insights::HealthInsights,
            insights::HealthInsightsResponse,
            insights::AiSummary,
            insights::AiSummaryResponse,
        )
    ),
    tags(
        (name = "insights", description = "AI-generated health insights"),
        (name = "assessments", description = "Deterministic risk assessments"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Kavach health API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let aggregator = if config.gateway_api_key.trim().is_empty() {
        tracing::warn!(
            "AI_GATEWAY_API_KEY is not set; insight endpoints will report a configuration error"
        );
        None
    } else {
        let gateway = GatewayConfig {
            base_url: config.gateway_url.clone(),
            api_key: config.gateway_api_key.clone(),
            model: config.gateway_model.clone(),
        };
        tracing::info!(
            "AI gateway configured (model: {}, url: {})",
            config.gateway_model,
            config.gateway_url
        );
        Some(Arc::new(
            InsightAggregator::from_gateway(gateway)
                .context("Failed to initialize AI gateway client")?,
        ))
    };

    let state = AppState::new(aggregator);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest("/api/insights", features::insights::routes())
        .nest("/api/assessments", features::assessments::routes())
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
