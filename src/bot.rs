use std::error::Error;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::apis::telegram::Update;
use crate::utilities::bot_state::BotState;
use crate::utilities::command_dispatcher;
use crate::utilities::config::Config;

pub struct Bot {
    state: Arc<BotState>,
}

impl Bot {
    pub fn new(config: Config) -> Self {
        Self { state: Arc::new(BotState::new(config)) }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let me = self.state.telegram.get_me().await?;

        if let Some(username) = me.username {
            log::info!("running as @{username}");
            self.state.set_bot_username(username);
        } else {
            log::info!("running as {}", me.first_name);
        }

        let listener = TcpListener::bind(self.state.config.bind_addr).await?;
        log::info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, router(self.state.clone()))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log::info!("shutting down");

        Ok(())
    }
}

pub fn router(state: Arc<BotState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhook", post(receive_update))
        .with_state(state)
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.unwrap();
    log::warn!("Ctrl+C received");
}

/// Telegram redelivers updates answered with an error status, so the handler
/// always returns 200 once the pipeline has run to completion.
async fn receive_update(
    State(state): State<Arc<BotState>>,
    Json(update): Json<Update>,
) -> StatusCode {
    log::debug!("received update {}", update.update_id);

    if let Some(message) = update.message {
        command_dispatcher::dispatch_message(state, message).await;
    }

    StatusCode::OK
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}
