use anyhow::Context as _;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{
    foundation::error::CanvasResult,
    grid::parse::parse_tokens,
    render::png::{PngImage, reconstruct, render_png},
    server::{error::ApiError, form::ApiForm, state::AppState},
    store::payload::{PayloadId, StoredPayload},
    ticker::TickerSymbol,
};

type ApiResult<T> = Result<T, ApiError>;

/// Build the service router for `state`, mounting only the enabled route groups.
pub fn router(state: AppState) -> Router {
    let mut app: Router<AppState> = Router::new();

    if state.routes.canvas {
        // A full grid is longer than the http crate's URI limit, so
        // `/plot/{imgdata}` only reports errors; clients post to `/plot`.
        app = app
            .route("/plot", post(plot_form))
            .route("/plot/{imgdata}", get(plot_path))
            .route("/postmethod", post(post_canvas))
            .route("/results", get(list_results))
            .route("/results/", get(list_results))
            .route("/results/{unique_id}", get(get_result))
            .route("/results/{unique_id}/plot", get(plot_result));
    }
    if state.routes.ticker {
        app = app.route("/postticker", post(post_ticker));
    }

    app.layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct CanvasForm {
    canvas_data: String,
}

#[derive(Debug, Deserialize)]
struct TickerForm {
    ticker_name: String,
}

#[derive(Debug, Serialize)]
struct UniqueIdBody {
    unique_id: PayloadId,
}

#[derive(Debug, Serialize)]
struct ResultsBody {
    results: Vec<StoredPayload>,
}

#[derive(Debug, Serialize)]
struct StockBody {
    stock: TickerSymbol,
}

async fn blocking<T, F>(f: F) -> CanvasResult<T>
where
    F: FnOnce() -> CanvasResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .context("blocking task failed")?
}

fn png_response(png: PngImage) -> Response {
    ([(header::CONTENT_TYPE, PngImage::CONTENT_TYPE)], png.bytes).into_response()
}

async fn render_text(state: &AppState, text: String) -> ApiResult<Response> {
    let settings = state.render;
    let png = blocking(move || reconstruct(&text, &settings)).await?;
    Ok(png_response(png))
}

async fn plot_path(
    State(state): State<AppState>,
    Path(imgdata): Path<String>,
) -> ApiResult<Response> {
    render_text(&state, imgdata).await
}

async fn plot_form(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<CanvasForm>,
) -> ApiResult<Response> {
    render_text(&state, form.canvas_data).await
}

async fn post_canvas(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<CanvasForm>,
) -> ApiResult<Json<UniqueIdBody>> {
    let store = state.store.clone();
    let unique_id = blocking(move || store.put(&form.canvas_data)).await?;
    Ok(Json(UniqueIdBody { unique_id }))
}

async fn list_results(State(state): State<AppState>) -> ApiResult<Json<ResultsBody>> {
    let store = state.store.clone();
    let results = blocking(move || store.list()).await?;
    Ok(Json(ResultsBody { results }))
}

async fn get_result(
    State(state): State<AppState>,
    Path(unique_id): Path<String>,
) -> ApiResult<Json<StoredPayload>> {
    let unique_id = PayloadId::parse(&unique_id)?;
    let store = state.store.clone();
    let id = unique_id.clone();
    let data = blocking(move || store.get(&id)).await?;
    Ok(Json(StoredPayload { unique_id, data }))
}

async fn plot_result(
    State(state): State<AppState>,
    Path(unique_id): Path<String>,
) -> ApiResult<Response> {
    let unique_id = PayloadId::parse(&unique_id)?;
    let store = state.store.clone();
    let settings = state.render;
    // The stored line already had its brackets stripped on the way in.
    let png = blocking(move || {
        let data = store.get(&unique_id)?;
        render_png(&parse_tokens(&data)?, &settings)
    })
    .await?;
    Ok(png_response(png))
}

async fn post_ticker(ApiForm(form): ApiForm<TickerForm>) -> ApiResult<Json<StockBody>> {
    let stock = TickerSymbol::parse(&form.ticker_name)?;
    tracing::info!(%stock, "ticker submitted");
    Ok(Json(StockBody { stock }))
}
