//! HTTP transport: `POST /suggest`.
//!
//! The corpus is shared read-only; every request builds its own indices.

use crate::config::ServerConfig;
use crate::corpus::WordCorpus;
use crate::error::RequestError;
use crate::wire::{self, SuggestOutcome, NO_WORDS, SCHEMA_HELP};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AppState {
    pub corpus: Arc<WordCorpus>,
}

pub fn router(corpus: Arc<WordCorpus>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/suggest", post(suggest))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { corpus })
}

async fn suggest(State(state): State<AppState>, body: Bytes) -> Response {
    match wire::answer(&state.corpus, &body) {
        Ok(SuggestOutcome::Words(words)) => {
            debug!(words = words.len(), "suggestions found");
            Json(words).into_response()
        }
        Ok(SuggestOutcome::NoWords) => plain_text(StatusCode::OK, NO_WORDS.to_string()),
        Err(err @ RequestError::Malformed(_)) => {
            plain_text(StatusCode::BAD_REQUEST, format!("{SCHEMA_HELP} {err}"))
        }
        Err(err) => {
            debug!(error = %err, "rejected constraints");
            plain_text(StatusCode::BAD_REQUEST, err.to_string())
        }
    }
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        )],
        body,
    )
        .into_response()
}

/// Load the corpus and serve until the listener fails.
pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = Arc::new(config.load_corpus()?);
    let addr = config.addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, words = corpus.len(), "starting server");

    axum::serve(listener, router(corpus)).await?;
    Ok(())
}
