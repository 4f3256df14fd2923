//! Promptform CLI and form server entry point.
//!
//! Binary name: `pform`
//!
//! Parses CLI arguments, initializes the backend client and presets, then
//! dispatches to the appropriate command handler or starts the form server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use promptform_core::presets::PresetRegistry;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,promptform=debug",
        _ => "trace",
    };
    promptform_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    match cli.command {
        // Completions and local rendering don't need a credential.
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "pform", &mut std::io::stdout());
        }

        Commands::Presets => {
            cli::presets::list_presets(&PresetRegistry::builtin(), cli.json)?;
        }

        Commands::Render { preset, fields } => {
            cli::render::render_preset(&PresetRegistry::builtin(), &preset, &fields, cli.json)?;
        }

        Commands::Serve { port, host } => {
            let state = AppState::init(&cli.config).await?;

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Promptform serving {} presets on {}",
                console::style("⚡").bold(),
                state.dispatchers.len(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {} model: {}",
                console::style("·").dim(),
                console::style(&state.model_id).dim()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    promptform_observe::tracing_setup::shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
