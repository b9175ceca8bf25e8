//! Yoga Booking API server.
//!
//! Serves the booking REST API from an in-memory store seeded with an
//! administrator account and the studio's teachers.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use yoga_booking::adapters::{
    api_router, ApiDependencies, InMemoryAccounts, InMemorySessionRepository,
    InMemoryTeacherDirectory,
};
use yoga_booking::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let accounts = InMemoryAccounts::new();
    let admin_id = accounts.add_account(
        &config.seed.admin_email,
        "Admin",
        "Admin",
        config.seed.admin_password.expose_secret().clone(),
        true,
    );
    tracing::info!(user_id = %admin_id, email = %config.seed.admin_email, "seeded administrator");

    let teachers = if config.seed.teachers {
        InMemoryTeacherDirectory::seeded()
    } else {
        InMemoryTeacherDirectory::new(std::iter::empty())
    };

    let accounts = Arc::new(accounts);
    let sessions = Arc::new(InMemorySessionRepository::new(accounts.clone()));

    let app = api_router(
        ApiDependencies {
            sessions: sessions.clone(),
            participation: sessions,
            teachers: Arc::new(teachers),
            users: accounts.clone(),
            auth: accounts.clone(),
            tokens: accounts,
        },
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
