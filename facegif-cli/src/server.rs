use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use facegif::{
    AnimationRequest, ComponentCatalog, FaceError, GIF_CONTENT_TYPE, map_all, parse_duration,
    parse_seed_list, render_request,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Seed list used when the query omits `seeds`.
const DEFAULT_SEEDS: &str = "default";

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<ComponentCatalog>,
}

pub fn router(catalog: Arc<ComponentCatalog>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/face.gif", get(face_gif))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { catalog })
}

pub async fn serve(addr: SocketAddr, catalog: Arc<ComponentCatalog>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(
        %addr,
        combinations = catalog.combination_count(),
        "facegif server listening"
    );

    axum::serve(listener, router(catalog))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("serve http")
}

#[derive(Debug, Default, Deserialize)]
struct FaceQuery {
    seeds: Option<String>,
    duration: Option<String>,
}

async fn face_gif(
    State(state): State<AppState>,
    Query(q): Query<FaceQuery>,
) -> Result<Response, ApiError> {
    let seeds = parse_seed_list(q.seeds.as_deref().unwrap_or(DEFAULT_SEEDS))?;
    let duration = parse_duration(q.duration.as_deref())?;
    tracing::debug!(seeds = seeds.len(), duration_ms = duration.as_millis(), "face.gif");

    let catalog = state.catalog.clone();
    let bytes = tokio::task::spawn_blocking(move || {
        let req = AnimationRequest::new(
            map_all(&seeds, &catalog),
            i64::from(duration.as_millis()),
        )?;
        render_request(&req, &catalog)
    })
    .await
    .map_err(|e| ApiError::Join(e.to_string()))??;

    Ok(([(header::CONTENT_TYPE, GIF_CONTENT_TYPE)], bytes).into_response())
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: "facegif",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let canvas = state.catalog.canvas();
    let combinations = state.catalog.combination_count();
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>facegif</title>
  <style>
    body {{ font-family: sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; }}
    code {{ background: #f0f0f0; padding: 4px 8px; border-radius: 4px; }}
    img {{ border: 2px solid #ddd; margin: 10px 0; }}
  </style>
</head>
<body>
  <h1>facegif</h1>
  <p>Animated GIF faces generated from seed values.</p>
  <h2>Usage</h2>
  <p><code>/face.gif?seeds=SEED1,SEED2,SEED3</code></p>
  <h2>Examples</h2>
  <p><img src="/face.gif?seeds=rocket,sunset,ocean" width="150"><br>
     <code>/face.gif?seeds=rocket,sunset,ocean</code></p>
  <p><img src="/face.gif?seeds=red,blue&amp;duration=500" width="150"><br>
     <code>/face.gif?seeds=red,blue&amp;duration=500</code></p>
  <h2>API</h2>
  <p><strong>GET /face.gif</strong></p>
  <ul>
    <li><code>seeds</code>: comma-separated strings</li>
    <li><code>duration</code>: milliseconds per frame (optional, default 1000)</li>
    <li>Returns: <code>image/gif</code>, {width}x{height}, loops forever</li>
  </ul>
  <p>Same seeds, same GIF. {combinations} possible faces per frame.</p>
</body>
</html>
"#,
        width = canvas.width,
        height = canvas.height,
    ))
}

#[derive(Debug)]
enum ApiError {
    Face(FaceError),
    Join(String),
}

impl From<FaceError> for ApiError {
    fn from(err: FaceError) -> Self {
        Self::Face(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Face(err) if err.is_request_error() => {
                tracing::debug!(error = %err, "rejected face.gif request");
                (StatusCode::BAD_REQUEST, format!("Error: {err}"))
            }
            ApiError::Face(err) => {
                tracing::error!(error = %err, "face.gif render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating GIF: {err}"),
                )
            }
            ApiError::Join(msg) => {
                tracing::error!(error = %msg, "render task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating GIF: {msg}"),
                )
            }
        };
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
