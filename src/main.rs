use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use mefa_engine::assessment::{
    assess_performance, assessment_router, briefing, optimize_resources, report, score_compliance,
    validation::validate_with_assessment, ProjectRecord,
};
use mefa_engine::config::AppConfig;
use mefa_engine::error::AppError;
use mefa_engine::telemetry;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: Arc<PrometheusHandle>,
}

#[derive(Parser, Debug)]
#[command(
    name = "MEFA Assessment Engine",
    about = "Score municipal EU grant drafts against IPA III policy rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a project draft from a JSON file and print the results
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Path to a project record JSON file
    project: PathBuf,
    /// Municipality to optimize for (defaults to the record's own field)
    #[arg(long)]
    municipality: Option<String>,
    /// Print human-readable reports instead of JSON
    #[arg(long)]
    text: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = assessment_router()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        project,
        municipality,
        text,
    } = args;

    let raw = std::fs::read_to_string(&project)?;
    let record: ProjectRecord = serde_json::from_str(&raw)?;
    let municipality = municipality.unwrap_or_else(|| record.municipality.clone());

    let compliance = score_compliance(&record);
    let assessment = assess_performance(&record);
    let validation = validate_with_assessment(&record, &assessment);
    let optimization = optimize_resources(&record, &municipality);
    let local_briefing = briefing(&municipality, &record);

    if text {
        println!("{}", report::performance_report(&assessment, &record));
        println!("{}", report::validation_report(&validation, &record));
        println!("Compliance score: {}/100 ({})", compliance.total_score, compliance.window_label);
        println!(
            "Recommended budget: \u{20ac}{:.0} over {} months (confidence {:.0}%)",
            optimization.budget.recommended_total,
            optimization.timeline.recommended_duration_months,
            optimization.confidence * 100.0
        );
    } else {
        let output = json!({
            "compliance": compliance,
            "performance": assessment,
            "validation": validation,
            "optimization": optimization,
            "briefing": local_briefing,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
