use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{ArgGroup, Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use skill_board::board::{
    board_router, cards_from_csv, cards_from_json, cards_from_markup, to_html, ApplicationStore,
    SkillFilter, EMPTY_PLACEHOLDER,
};
use skill_board::config::AppConfig;
use skill_board::error::AppError;
use skill_board::telemetry;
use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Application Skill Board",
    about = "Run the application skill board service and filtration tools from the command line",
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
    /// Work with the application board offline
    Board {
        #[command(subcommand)]
        command: BoardCommand,
    },
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

#[derive(Subcommand, Debug)]
enum BoardCommand {
    /// Filter application cards by requested skills and print the result
    Filter(BoardFilterArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["markup", "csv", "json"])))]
struct BoardFilterArgs {
    /// Board markup file to scrape cards from
    #[arg(long)]
    markup: Option<PathBuf>,
    /// CSV export to read cards from
    #[arg(long)]
    csv: Option<PathBuf>,
    /// JSON payload to read cards from
    #[arg(long)]
    json: Option<PathBuf>,
    /// Comma-separated skill query (blank shows every card)
    #[arg(long)]
    skills: Option<String>,
    /// Print the rendered list HTML after the summary
    #[arg(long)]
    html: bool,
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
        Command::Board {
            command: BoardCommand::Filter(args),
        } => run_board_filter(args),
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
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(board_router())
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "application skill board ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_board_filter(args: BoardFilterArgs) -> Result<(), AppError> {
    let BoardFilterArgs {
        markup,
        csv,
        json,
        skills,
        html,
    } = args;

    let cards = match (markup, csv, json) {
        (Some(path), _, _) => cards_from_markup(&fs::read_to_string(path)?)?,
        (None, Some(path), _) => cards_from_csv(File::open(path)?)?,
        (None, None, Some(path)) => cards_from_json(&fs::read_to_string(path)?)?,
        // clap's source group guarantees one of the three is present
        (None, None, None) => Vec::new(),
    };

    let filter_text = skills.unwrap_or_default();
    let filter = SkillFilter::parse(&filter_text);

    let mut store = ApplicationStore::new(cards);
    let view = store.apply_filter(&filter_text).clone();

    println!("Application skill board");
    println!("Cards loaded: {}", store.cards().len());
    if filter.is_empty() {
        println!("Filter: none (showing every card)");
    } else {
        println!("Filter: {}", filter.tokens().join(", "));
    }

    println!("\nMatched {} of {}", view.card_count(), store.cards().len());
    if view.card_count() == 0 {
        println!("{EMPTY_PLACEHOLDER}");
    } else {
        for card in view.cards() {
            println!(
                "- Application # {} | {} | {} | skills: {}",
                card.id.0, card.organization_name, card.solution_name, card.skills_text
            );
        }
    }

    if html {
        println!("\n{}", to_html(&view));
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
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

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
