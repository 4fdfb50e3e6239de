use anyhow::{Context, Result};
use clap::Parser;

mod cli;

use cli::Cli;
use digitalarkivet_mcp::archive::ArchiveClient;
use digitalarkivet_mcp::stdio::ArchiveServer;
use digitalarkivet_mcp::tools::{ToolRegistry, available_tools};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the MCP transport
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_tools {
        println!("Available tools:");
        for tool in available_tools() {
            println!("  - {tool}");
        }
        return Ok(());
    }

    let enabled_tools = cli.enabled_tools();

    if let Some(ref tools) = enabled_tools {
        let available = available_tools();
        let invalid: Vec<_> = tools
            .iter()
            .filter(|tool| !available.contains(&tool.as_str()))
            .collect();

        if !invalid.is_empty() {
            eprintln!("Error: Invalid tool names specified:");
            for tool in &invalid {
                eprintln!("  - {tool}");
            }
            eprintln!();
            eprintln!("Available tools:");
            for tool in available {
                eprintln!("  - {tool}");
            }
            eprintln!();
            eprintln!("Tip: Use --list-tools to see all available tools");
            return Err(anyhow::anyhow!("Invalid tool names specified"));
        }
    }

    let client = ArchiveClient::new(cli.api_base.as_str())
        .context("Failed to build HTTP client")?;
    log::info!("Using archive API at {}", client.api_base());

    let mut registry = ToolRegistry::new(client);
    if let Some(ref tools) = enabled_tools {
        registry.retain_enabled(tools);
    }

    let shutdown_token = tokio_util::sync::CancellationToken::new();

    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        wait_for_interrupt().await;
        log::debug!("Received interrupt signal, shutting down");
        signal_token.cancel();
    });

    ArchiveServer::new(registry)
        .serve_stdio(shutdown_token)
        .await
}

/// Wait for SIGINT or SIGTERM from the host runtime
#[cfg(unix)]
async fn wait_for_interrupt() {
    use tokio::signal::unix::{SignalKind, signal};

    let (Ok(mut sigterm), Ok(mut sigint)) =
        (signal(SignalKind::terminate()), signal(SignalKind::interrupt()))
    else {
        log::warn!("Failed to install signal handlers, only Ctrl-C will stop the server");
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
        return;
    };

    tokio::select! {
        _ = sigterm.recv() => log::debug!("SIGTERM"),
        _ = sigint.recv() => log::debug!("SIGINT"),
    }
}

/// Wait for Ctrl-C (Windows has no SIGTERM)
#[cfg(windows)]
async fn wait_for_interrupt() {
    match tokio::signal::windows::ctrl_c() {
        Ok(mut ctrl_c) => {
            let _ = ctrl_c.recv().await;
        }
        Err(_) => {
            let () = std::future::pending().await;
        }
    }
}
