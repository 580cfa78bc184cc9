//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::application::services::{JwtTokenService, TokenService};
use crate::config::{Settings, StoreDriver};
use crate::domain::{BookingRepository, ServiceRepository};
use crate::infrastructure::database::MongoStore;
use crate::infrastructure::repositories::{
    InMemoryBookingRepository, InMemoryServiceRepository, MongoBookingRepository,
    MongoServiceRepository,
};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer, log_request};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub tokens: Arc<dyn TokenService>,
    /// Present when backed by MongoDB; used for readiness pings
    pub store: Option<MongoStore>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by the given MongoDB store
    pub fn with_store(settings: Settings, store: MongoStore) -> Self {
        Self {
            services: Arc::new(MongoServiceRepository::new(store.clone())),
            bookings: Arc::new(MongoBookingRepository::new(store.clone())),
            tokens: Arc::new(JwtTokenService::new(&settings.jwt)),
            store: Some(store),
            settings: Arc::new(settings),
        }
    }

    /// State backed by process-local collections
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            services: Arc::new(InMemoryServiceRepository::new()),
            bookings: Arc::new(InMemoryBookingRepository::new()),
            tokens: Arc::new(JwtTokenService::new(&settings.jwt)),
            store: None,
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(middleware::from_fn(log_request))
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    store: Option<MongoStore>,
}

impl Application {
    /// Build the application from settings
    ///
    /// Never waits on MongoDB: the client is created on first use and the
    /// startup ping runs in the background once the listener is bound.
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let store = match settings.database.driver {
            StoreDriver::Mongodb => Some(MongoStore::new(settings.database.clone())),
            StoreDriver::Memory => {
                tracing::warn!("Using in-memory store; data is lost on shutdown");
                None
            }
        };

        let state = match &store {
            Some(store) => AppState::with_store(settings.clone(), store.clone()),
            None => AppState::in_memory(settings.clone()),
        };
        let router = build_router(state);

        // Bind to address
        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        if let Some(store) = &store {
            tokio::spawn(check_connection(store.clone()));
        }

        Ok(Self {
            listener,
            router,
            store,
        })
    }

    /// Run the server until a shutdown signal arrives, then close the store client
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        if let Some(store) = self.store {
            store.shutdown().await;
        }

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Log whether MongoDB answers; a failure is not fatal
async fn check_connection(store: MongoStore) {
    match store.ping().await {
        Ok(latency) => tracing::info!(
            database = %store.name(),
            latency_ms = latency.as_millis() as u64,
            "Connected to MongoDB"
        ),
        Err(e) => tracing::error!(
            database = %store.name(),
            error = %e,
            "MongoDB unreachable; store requests fail until it answers"
        ),
    }
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down gracefully..."),
    }
}
