/// wlm-demo - Splunk Workload Management on Kubernetes
///
/// A Rust-based tool for demonstrating Splunk workload management against a
/// cluster manager pod: enables the feature, provisions prioritized pools and
/// routing rules, fires sample searches, samples resource usage, and tears
/// everything down again.
mod config;
mod error;
mod k8s;
mod splunk;
mod utils;
mod wlm;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::RunConfig;
use crate::k8s::KubernetesClient;
use crate::splunk::SplunkCtl;
use crate::wlm::WorkloadDemo;

#[derive(Parser, Debug)]
#[command(name = "wlm-demo")]
#[command(about = "Demonstrate Splunk workload management on Kubernetes", long_about = None)]
struct Cli {
    /// Splunk cluster manager pod name
    #[arg(short, long)]
    pod: String,

    /// Kubernetes namespace of the Splunk deployment
    #[arg(short, long, default_value = "default")]
    namespace: String,

    /// CPU limit accepted for future pool sizing (not applied to any resource)
    #[arg(short, long, default_value = "500m")]
    cpu_limit: String,

    /// Memory limit accepted for future pool sizing (not applied to any resource)
    #[arg(short, long, default_value = "1Gi")]
    memory_limit: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    // Usage errors exit with status 1; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("wlm_demo={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run_demo(cli).await {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Run the workload management demo sequence
async fn run_demo(cli: Cli) -> Result<()> {
    // Check prerequisites
    KubernetesClient::check_kubectl_installed()
        .await
        .context("kubectl is required")?;
    SplunkCtl::check_kubectl_splunk_installed()
        .await
        .context("kubectl-splunk is required")?;

    let config = RunConfig::new(cli.pod, cli.namespace, cli.cpu_limit, cli.memory_limit);
    config.validate()?;

    info!(
        "Target pod: {} (namespace: {}, selector: {})",
        config.pod, config.namespace, config.selector
    );
    debug!(
        "Requested limits (accepted, not applied to any resource): cpu={}, memory={}",
        config.cpu_limit, config.memory_limit
    );

    let ctl = SplunkCtl::new(config);
    let demo = WorkloadDemo::new(&ctl);
    demo.run().await
}
