use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::json;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

use crate::article::{ArticleStore, ArticleUpdate, NewArticle};
use crate::error::RestError;

#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<ArticleStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(ArticleStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/api/v1/articles/",
            get(list_articles).post(create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(get_article).put(update_article).delete(delete_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(json!({"message": "Welcome to the Article API"}))
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn create_article(
    State(state): State<AppState>,
    Json(body): Json<NewArticle>,
) -> Result<impl IntoResponse, RestError> {
    let article = state.store.lock().await.create(body)?;
    info!("Created article {}", article.id);
    Ok(Json(article))
}

async fn list_articles(State(state): State<AppState>) -> impl IntoResponse {
    let articles = state.store.lock().await.list();
    Json(articles)
}

async fn get_article(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RestError> {
    let article = state.store.lock().await.get(&id)?;
    Ok(Json(article))
}

async fn update_article(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(body): Json<ArticleUpdate>,
) -> Result<impl IntoResponse, RestError> {
    let article = state.store.lock().await.update(&id, body)?;
    info!("Updated article {}", article.id);
    Ok(Json(article))
}

async fn delete_article(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RestError> {
    state.store.lock().await.remove(&id)?;
    info!("Deleted article {id}");
    Ok(Json(json!({"message": "Article deleted successfully"})))
}
