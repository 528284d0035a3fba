//! `kochflake` — hexagonal Koch snowflake viewer.
//!
//! ```text
//! kochflake                              # serve the viewer on 127.0.0.1:3000
//! kochflake serve --port 8080 --default-level 3
//! kochflake points --level 2 --pretty    # snowflake points + stats as JSON
//! kochflake figure --level 4             # chart description as JSON
//! ```
//!
//! Logging defaults to WARN, INFO for this crate; override with `RUST_LOG`.

use std::io::Write;

use clap::{Args, Parser, Subcommand};
use kochflake::operations::fractal::{build_snowflake, RecursionLevel};
use kochflake::plot::{Figure, PlotConfig};
use kochflake::server::{self, AppState, SnowflakeResponse};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Koch(#[from] kochflake::KochError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "kochflake",
    about = "Hexagonal Koch snowflake viewer",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Serve settings used when no subcommand is given.
    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the interactive viewer.
    Serve(ServeArgs),
    /// Print the snowflake polyline and its measurements as JSON.
    Points(OutputArgs),
    /// Print the chart description as JSON.
    Figure(OutputArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, env = "KOCH_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "KOCH_PORT", default_value_t = 3000)]
    port: u16,

    /// Level shown before the slider is moved (0-4).
    #[arg(long, env = "KOCH_DEFAULT_LEVEL", default_value = "1")]
    default_level: RecursionLevel,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Recursion level (0-4).
    #[arg(long, default_value = "1")]
    level: RecursionLevel,

    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        None => run_serve(cli.serve).await,
        Some(Command::Serve(args)) => run_serve(args).await,
        Some(Command::Points(args)) => run_points(&args),
        Some(Command::Figure(args)) => run_figure(&args),
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "kochflake failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Default: WARN for everything, INFO for kochflake and request traces.
const DEFAULT_LOG_FILTER: &str = "warn,kochflake=info,tower_http=info";

/// Uses `RUST_LOG` verbatim when set and valid, the defaults otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

async fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| CliError::Bind { addr, source })?;
    server::serve(listener, AppState::new(args.default_level))
        .await
        .map_err(CliError::Serve)
}

fn run_points(args: &OutputArgs) -> Result<(), CliError> {
    let response = SnowflakeResponse::generate(args.level)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    write_line(&json)
}

fn run_figure(args: &OutputArgs) -> Result<(), CliError> {
    let polyline = build_snowflake(args.level.get());
    let json = Figure::snowflake(args.level.get(), &polyline)
        .with_config(PlotConfig::default())
        .to_json(args.pretty)?;
    write_line(&json)
}

fn write_line(text: &str) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}
