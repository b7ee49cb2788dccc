//! HTTP routes over one design session.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    browse, BrowsePage, BrowseQuery, CategoryInfo, CuratedCatalog, QuoteCatalog, CATEGORIES,
};
use crate::config::Config;
use crate::design::{Design, DesignPatch, Quote};
use crate::generate::{GenerateRequest, GenerateResponse, GenerationSession, MockImageGenerator};
use crate::server::error::ApiError;
use crate::server::health::health;
use crate::session::{
    configure_route, design_route, DesignStore, LifecycleController, LifecyclePhase, PrintHandoff,
    Selection,
};
use crate::ui::preview::{render_preview, render_room_preview, PreviewSpec, RoomPreviewSpec};

/// Shared handler state. Cloning shares the same session.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CuratedCatalog,
    pub controller: LifecycleController,
    pub generation: Arc<GenerationSession>,
    pub generator: Arc<MockImageGenerator>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let catalog = CuratedCatalog::new();
        Self {
            catalog,
            controller: LifecycleController::new(DesignStore::new(), Arc::new(catalog)),
            generation: Arc::new(GenerationSession::new()),
            generator: Arc::new(MockImageGenerator::from_config(&config.generation)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/inspire/categories", get(list_categories))
        .route("/api/inspire/quotes", get(browse_quotes))
        .route("/api/inspire/quotes/featured", get(featured_quotes))
        .route("/api/inspire/quotes/{id}", get(get_quote))
        .route("/api/inspire/session", get(get_session).delete(abandon_session))
        .route("/api/inspire/session/select", post(select_quote))
        .route("/api/inspire/session/custom", post(write_own_quote))
        .route("/api/inspire/session/design", patch(change_style))
        .route("/api/inspire/session/text", put(edit_text))
        .route("/api/inspire/session/configure", post(proceed_to_configure))
        .route("/api/inspire/configure/{design_id}", get(resume_configure))
        .route("/api/generate", post(generate))
        .route("/api/generate/latest", get(latest_generation))
        .with_state(state)
}

/// Current phase plus the design and its derived previews.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(flatten)]
    pub phase: LifecyclePhase,
    pub quote: Option<Quote>,
    pub design: Option<Design>,
    pub preview: Option<PreviewSpec>,
    pub room_preview: Option<RoomPreviewSpec>,
}

impl SessionView {
    fn capture(controller: &LifecycleController) -> Self {
        let snapshot = controller.store().snapshot();
        let design = snapshot.design().cloned();
        Self {
            phase: LifecyclePhase::from(&snapshot),
            quote: snapshot.quote().cloned(),
            preview: design.as_ref().map(render_preview),
            room_preview: design.as_ref().map(render_room_preview),
            design,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    /// False when the store ignored the mutation.
    pub applied: bool,
    #[serde(flatten)]
    pub session: SessionView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    /// `"initialized"` or `"retained"`.
    pub outcome: &'static str,
    pub route: String,
    #[serde(flatten)]
    pub session: SessionView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectBody {
    pub quote_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomQuoteBody {
    pub text: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub text: String,
}

async fn list_categories() -> Json<&'static [CategoryInfo]> {
    Json(CATEGORIES)
}

async fn browse_quotes(
    State(state): State<AppState>,
    query: Result<Query<BrowseQuery>, QueryRejection>,
) -> Result<Json<BrowsePage>, ApiError> {
    let Query(query) = query?;
    Ok(Json(browse(&state.catalog, &query)))
}

async fn featured_quotes(State(state): State<AppState>) -> Json<Vec<Quote>> {
    Json(state.catalog.featured())
}

async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Quote>, ApiError> {
    state
        .catalog
        .lookup(&id)
        .map(Json)
        .ok_or(ApiError::QuoteNotFound { quote_id: id })
}

async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(SessionView::capture(&state.controller))
}

async fn select_quote(
    State(state): State<AppState>,
    body: Result<Json<SelectBody>, JsonRejection>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let Json(body) = body?;
    let selection = state.controller.select(&body.quote_id)?;
    let outcome = match selection {
        Selection::Initialized(_) => "initialized",
        Selection::Retained(_) => "retained",
    };
    Ok(Json(SelectionResponse {
        outcome,
        route: design_route(&selection.design().quote.id),
        session: SessionView::capture(&state.controller),
    }))
}

async fn write_own_quote(
    State(state): State<AppState>,
    body: Result<Json<CustomQuoteBody>, JsonRejection>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let Json(body) = body?;
    let design = state.controller.write_own(&body.text, &body.author)?;
    Ok(Json(SelectionResponse {
        outcome: "initialized",
        route: design_route(&design.quote.id),
        session: SessionView::capture(&state.controller),
    }))
}

async fn change_style(
    State(state): State<AppState>,
    body: Result<Json<DesignPatch>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Json(design_patch) = body?;
    let applied = state.controller.change_style(design_patch).is_some();
    Ok(Json(MutationResponse {
        applied,
        session: SessionView::capture(&state.controller),
    }))
}

async fn edit_text(
    State(state): State<AppState>,
    body: Result<Json<TextBody>, JsonRejection>,
) -> Result<Json<MutationResponse>, ApiError> {
    let Json(body) = body?;
    let applied = state.controller.edit_text(&body.text).is_some();
    Ok(Json(MutationResponse {
        applied,
        session: SessionView::capture(&state.controller),
    }))
}

async fn proceed_to_configure(
    State(state): State<AppState>,
) -> Result<Json<PrintHandoff>, ApiError> {
    Ok(Json(state.controller.proceed_to_configure()?))
}

async fn resume_configure(
    State(state): State<AppState>,
    Path(design_id): Path<String>,
) -> Result<Json<PrintHandoff>, ApiError> {
    let design = state.controller.resume_configure(&design_id)?;
    Ok(Json(PrintHandoff {
        route: configure_route(design.id.as_str()),
        design,
    }))
}

async fn abandon_session(State(state): State<AppState>) -> Json<SessionView> {
    state.controller.abandon();
    state.generation.reset();
    Json(SessionView::capture(&state.controller))
}

async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = body?;
    state
        .generation
        .run(&state.generator, &request)
        .await
        .map(Json)
        .ok_or(ApiError::GenerationDiscarded)
}

/// Most recent accepted batch; empty after a reset or before any generation.
async fn latest_generation(State(state): State<AppState>) -> Json<GenerateResponse> {
    Json(GenerateResponse {
        images: state.generation.latest().unwrap_or_default(),
    })
}
