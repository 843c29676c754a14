use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub mod command;
pub mod config;
pub mod db;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod lastfm;
pub mod models;

use config::Config;
use db::SqliteStore;
use dispatch::Dispatcher;
use lastfm::LastfmClient;

pub const MODULE_NAME: &str = "lastfm";
pub const MODULE_HELP: &str = "show last listened tracks on last.fm";

const LOOKUP_FAILED: &str = "{red}Error when looking up last.fm data{clear}";

/// Message envelope exchanged with the gowon chat router.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Message {
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub dest: String,
    #[serde(default)]
    pub args: String,
    #[serde(default)]
    pub command: String,
}

#[derive(Clone)]
struct AppState {
    dispatcher: Dispatcher,
}

#[axum::debug_handler]
async fn post_message(
    State(state): State<AppState>,
    Json(mut message): Json<Message>,
) -> (StatusCode, Json<Message>) {
    tracing::debug!("{} sent {:?}", message.nick, message.args);

    match state.dispatcher.dispatch(&message.args, &message.nick).await {
        Ok(out) => {
            message.msg = out;
            (StatusCode::OK, Json(message))
        }
        Err(e) => {
            tracing::error!(
                "failed to handle {:?} from {}: {}",
                message.args,
                message.nick,
                e
            );
            message.msg = LOOKUP_FAILED.to_string();
            (StatusCode::INTERNAL_SERVER_ERROR, Json(message))
        }
    }
}

async fn get_help() -> Json<Message> {
    Json(Message {
        module: MODULE_NAME.to_string(),
        msg: MODULE_HELP.to_string(),
        ..Default::default()
    })
}

async fn health_check() -> &'static str {
    "ok"
}

pub fn router(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/help", get(get_help))
        .route("/message", post(post_message))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { dispatcher })
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gowon_lastfm=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("{} starting", MODULE_NAME);

    let store = SqliteStore::open(&config.kv_path)
        .await
        .with_context(|| format!("failed to open kv db at {}", config.kv_path.display()))?;
    tracing::info!("kv db opened at {}", config.kv_path.display());

    let lastfm = LastfmClient::with_base_url(&config.api_url, &config.api_key);
    let dispatcher = Dispatcher::new(Arc::new(store.clone()), Arc::new(lastfm));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("listening on {}", config.addr);

    axum::serve(listener, router(dispatcher))
        .await
        .context("server error")?;

    store.close().await;
    Ok(())
}
