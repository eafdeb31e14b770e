//! CLI entrypoint for atelier-contact
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use contact_application::{FormSession, RelayConfig, RelayContactUseCase};
use contact_domain::SubmissionStatus;
use contact_infrastructure::{ConfigLoader, FileConfig, HttpInquiryTransport, ResendEmailSender};
use contact_presentation::{
    AppState, Cli, Command, ExitLinks, FormRepl, ReedlineInput, ServerOptions, create_app,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    config.validate()?;

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => serve(config, bind).await,
        Command::Form { endpoint, quiet } => run_form(config, endpoint, quiet).await,
    }
}

async fn serve(config: FileConfig, bind: Option<String>) -> Result<()> {
    info!("Starting atelier-contact server");

    // Secrets are resolved once; a missing one stops startup
    let api_key = config.mail.resolve_api_key()?;
    let to = config.mail.resolve_to()?;

    // === Dependency Injection ===
    let sender = ResendEmailSender::new(api_key, &config.mail.base_url, config.mail.timeout())?;
    let relay_config = RelayConfig::new(to)
        .with_from(&config.mail.from)
        .with_schema(config.contact.schema);
    let relay = RelayContactUseCase::new(Arc::new(sender), relay_config);

    let options = ServerOptions {
        request_timeout: config.server.request_timeout(),
        cors_enabled: config.server.cors_enabled,
    };
    let app = create_app(AppState::new(relay), &options);

    let addr = bind.unwrap_or(config.server.bind_address);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(
        "Listening on {} (schema: {})",
        listener.local_addr()?,
        config.contact.schema
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn run_form(config: FileConfig, endpoint: Option<String>, quiet: bool) -> Result<()> {
    let client = config.client;
    let endpoint = client.endpoint_or(endpoint);
    info!("Submitting to {}", endpoint);

    let links = ExitLinks {
        portfolio: client.portfolio_url_for(&endpoint),
        instagram: client.instagram_url.clone(),
    };
    let transport = Arc::new(HttpInquiryTransport::new(endpoint, client.timeout())?);
    let mut repl = FormRepl::new(FormSession::new(transport))
        .with_progress(!quiet)
        .with_links(links);
    let mut input = ReedlineInput::new();

    match repl.run(&mut input).await? {
        SubmissionStatus::Submitted => info!("Inquiry sent"),
        status => info!("Form closed while {}", status.as_str()),
    }
    Ok(())
}
