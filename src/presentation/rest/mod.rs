use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use middleware::append_global_middlewares;
use state::ArcAppState;
use tokio::net::TcpListener;
use tokio::signal;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::infra::state::AppState;
use crate::utils::Pipe;

mod extract;
mod middleware;
mod song;
pub mod state;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Songbook",
        description = "Song library with lyrics, filtering and pagination",
        license(
            name = "MIT",
            url  = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(health_check)
)]
struct ApiDoc;

pub async fn listen(
    listener: TcpListener,
    state: Arc<AppState>,
) -> std::io::Result<()> {
    let state = ArcAppState::new(state);

    let app = router(state);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutting down"),
            Err(err) => {
                tracing::error!("Unable to listen for shutdown signal: {err}");
            }
        }
    })
    .await
}

pub fn router(state: ArcAppState) -> Router {
    let mut api_doc = ApiDoc::openapi();
    api_doc.merge(song::SongApi::openapi());

    let doc_router = Router::new()
        .merge(Scalar::with_url("/docs", api_doc.clone()))
        .route("/openapi.json", get(move || async move { Json(api_doc) }));

    Router::new()
        .merge(song::router())
        .route("/health_check", get(health_check))
        .merge(doc_router)
        .pipe(append_global_middlewares)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health_check",
    responses(
        (status = 200)
    ),
)]
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
