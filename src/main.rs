use std::time::Duration;

use clap::Parser;
use qfan::config::DemoConfig;
use qfan::driver;

#[derive(Parser)]
#[command(name = "qfan", about = "Query Fan-out — sequential vs concurrent retrieval latency")]
struct Cli {
    /// Query string sent to every retrieval call.
    #[arg(long, default_value = "that")]
    query: String,

    /// Result bound per call (the scan may return up to k + 1 hits).
    #[arg(long, default_value_t = 3)]
    k: usize,

    /// Simulated per-call I/O latency, in milliseconds.
    #[arg(long, default_value_t = 3000)]
    latency_ms: u64,

    /// Number of calls in the sequential and parallel batches.
    #[arg(long, default_value_t = 5)]
    requests: usize,

    /// Print the timing report as JSON on stdout after the run.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = DemoConfig {
        query: cli.query,
        k: cli.k,
        latency: Duration::from_millis(cli.latency_ms),
        requests: cli.requests,
    };

    let report = driver::run(&cfg).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
