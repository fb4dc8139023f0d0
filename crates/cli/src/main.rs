//! `cleaver` — headless admin client for the shop backend.
//!
//! Drives the same operations the dashboard UI offers, one command per
//! invocation: platform status, connect/disconnect, batch sync, catalog
//! import, and the sync history feed.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cleaver_api::{ApiClient, ApiConfig, PlatformsApi, Session, SyncApi};
use cleaver_core::{Notification, PlatformId, Severity};
use cleaver_sync::{HttpPlatformGateway, SyncOrchestrator};

#[derive(Parser)]
#[command(name = "cleaver", version, about = "Butcher-shop admin client")]
struct Cli {
    /// Backend origin, e.g. https://shop.example.com/api
    #[arg(long, env = "CLEAVER_API_URL")]
    api_url: Option<String>,

    /// Bearer token for authenticated endpoints
    #[arg(long, env = "CLEAVER_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show connection state and last sync time for every platform
    Status {
        /// Print the backend's aggregate sync feed instead of the platform table
        #[arg(long)]
        feed: bool,
    },
    /// Connect one platform, or every disconnected one with --all
    Connect {
        platform: Option<PlatformId>,
        #[arg(long, conflicts_with = "platform")]
        all: bool,
    },
    /// Disconnect one platform
    Disconnect { platform: PlatformId },
    /// Sync all connected platforms, or push the catalog with --catalog
    Sync {
        #[arg(long)]
        catalog: bool,
    },
    /// Import catalog data from one platform
    Import { platform: PlatformId },
    /// Show the sync/import history feed
    History,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    cleaver_observability::init();
    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config = config.with_base_url(api_url.trim_end_matches('/'));
    }
    let session = match cli.token {
        Some(token) => Session::with_token(token),
        None => Session::anonymous(),
    };

    tracing::debug!(base_url = %config.base_url, "using backend");
    let client = ApiClient::new(&config, session).context("failed to build API client")?;
    let platforms = PlatformsApi::new(client.clone());
    let sync = SyncApi::new(client);
    let gateway = HttpPlatformGateway::new(platforms, sync.clone());
    let mut orchestrator = SyncOrchestrator::new(gateway);

    match cli.command {
        Command::Status { feed: true } => {
            let value = sync
                .status()
                .await
                .context("sync status request failed")?;
            println!("{value:#}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Status { feed: false } => {
            orchestrator.refresh_status().await;
            if let Some(code) = report(orchestrator.take_notification()) {
                return Ok(code);
            }
            print_status(&orchestrator);
            Ok(ExitCode::SUCCESS)
        }
        Command::Connect { platform: None, all: true } => {
            orchestrator.refresh_status().await;
            orchestrator.take_notification();
            orchestrator.connect_all().await;
            Ok(report(orchestrator.take_notification()).unwrap_or(ExitCode::SUCCESS))
        }
        Command::Connect { platform: Some(platform), .. } => {
            toggle(&mut orchestrator, platform, false).await
        }
        Command::Connect { platform: None, all: false } => {
            anyhow::bail!("specify a platform or --all");
        }
        Command::Disconnect { platform } => toggle(&mut orchestrator, platform, true).await,
        Command::Sync { catalog: true } => {
            let response = sync
                .sync_products()
                .await
                .context("catalog sync request failed")?;
            if response.is_success() {
                println!("Catalog sync started");
                Ok(ExitCode::SUCCESS)
            } else {
                let reason = response
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string());
                eprintln!("Catalog sync failed: {reason}");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Sync { catalog: false } => {
            orchestrator.refresh_status().await;
            orchestrator.take_notification();
            orchestrator.sync_all().await;
            Ok(report(orchestrator.take_notification()).unwrap_or(ExitCode::SUCCESS))
        }
        Command::Import { platform } => {
            orchestrator.import_from(platform).await;
            Ok(report(orchestrator.take_notification()).unwrap_or(ExitCode::SUCCESS))
        }
        Command::History => {
            orchestrator.refresh_history().await;
            if let Some(code) = report(orchestrator.take_notification()) {
                return Ok(code);
            }
            print_history(&orchestrator);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Connect or disconnect one platform. The orchestrator toggles, so the
/// current state is refreshed first and no-ops are caught here.
async fn toggle(
    orchestrator: &mut SyncOrchestrator<HttpPlatformGateway>,
    platform: PlatformId,
    disconnect: bool,
) -> anyhow::Result<ExitCode> {
    orchestrator.refresh_status().await;
    if let Some(code) = report(orchestrator.take_notification()) {
        return Ok(code);
    }

    let connected = orchestrator
        .platform(platform)
        .map(|p| p.connected)
        .unwrap_or(false);
    if connected != disconnect {
        let state = if connected { "connected" } else { "disconnected" };
        println!("{} is already {state}", platform.display_name());
        return Ok(ExitCode::SUCCESS);
    }

    orchestrator.toggle_connection(platform).await;
    Ok(report(orchestrator.take_notification()).unwrap_or(ExitCode::SUCCESS))
}

/// Print the pending notification, if any. Returns an exit code only when
/// the run should stop (an error was reported).
fn report(notification: Option<Notification>) -> Option<ExitCode> {
    let notification = notification?;
    match notification.severity {
        Severity::Error => {
            eprintln!("{}", notification.message);
            Some(ExitCode::FAILURE)
        }
        _ => {
            println!("{}", notification.message);
            None
        }
    }
}

fn print_status(orchestrator: &SyncOrchestrator<HttpPlatformGateway>) {
    println!("{:<14} {:<12} {}", "PLATFORM", "CONNECTED", "LAST SYNC");
    for platform in orchestrator.platforms() {
        println!(
            "{:<14} {:<12} {}",
            platform.name(),
            if platform.connected { "yes" } else { "no" },
            platform.last_sync
        );
    }
}

fn print_history(orchestrator: &SyncOrchestrator<HttpPlatformGateway>) {
    if orchestrator.history().is_empty() {
        println!("No sync history");
        return;
    }
    for entry in orchestrator.history() {
        let outcome = if entry.success { "ok" } else { "failed" };
        let platform = entry.platform.as_deref().unwrap_or("-");
        let message = entry.message.as_deref().unwrap_or("");
        println!(
            "{} {:<8} {:<12} {:<6} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.kind,
            platform,
            outcome,
            message
        );
    }
}
