use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use austrolate::{AustrolateError, Dictionaries, Direction, TranslatorConfig, load_dictionaries};

/// Longest phrase length a request may ask for
const MAX_REQUEST_PHRASE_LENGTH: usize = 32;

/// Service settings, read from `AUSTROLATE_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub dictionary_path: PathBuf,
    pub bind: String,
    /// Fixed phrase length; `None` fits it to each dictionary
    pub max_phrase_length: Option<usize>,
}

impl WebConfig {
    pub fn from_env() -> austrolate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> austrolate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_phrase_length = match lookup("AUSTROLATE_MAX_PHRASE_LENGTH") {
            Some(raw) => Some(raw.trim().parse::<usize>().map_err(|e| {
                AustrolateError::InvalidConfig {
                    key: "AUSTROLATE_MAX_PHRASE_LENGTH".to_string(),
                    message: format!("'{}': {}", raw, e),
                }
            })?),
            None => None,
        };

        Ok(Self {
            dictionary_path: lookup("AUSTROLATE_DICTIONARY")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/dictionary.json")),
            bind: lookup("AUSTROLATE_BIND").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            max_phrase_length,
        })
    }

    fn translator_config(
        &self,
        dictionaries: &Dictionaries,
        direction: Direction,
    ) -> TranslatorConfig {
        match self.max_phrase_length {
            Some(n) => TranslatorConfig::default().with_max_phrase_length(n),
            None => TranslatorConfig::fitted(dictionaries.get(direction)),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub max_phrase_length: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated: String,
    pub source: String,
    pub direction: Direction,
    pub truncated: bool,
}

#[derive(Deserialize)]
pub struct DictionaryQuery {
    pub direction: Option<Direction>,
    pub limit: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub phrase: String,
    pub translation: String,
}

#[derive(Serialize, Deserialize)]
pub struct DictionaryResponse {
    pub direction: Direction,
    pub total: usize,
    pub entries: Vec<DictionaryEntry>,
}

#[derive(Serialize, Deserialize)]
pub struct ReloadResponse {
    pub phrases: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: String) -> ApiError {
    (status, Json(ErrorResponse { error }))
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<WebConfig>,
    dictionaries: Arc<RwLock<Arc<Dictionaries>>>,
}

impl AppState {
    pub fn new(config: WebConfig, dictionaries: Dictionaries) -> Self {
        Self {
            config: Arc::new(config),
            dictionaries: Arc::new(RwLock::new(Arc::new(dictionaries))),
        }
    }

    /// Snapshot of the loaded dictionaries
    fn dictionaries(&self) -> Arc<Dictionaries> {
        let guard = self.dictionaries.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    fn replace_dictionaries(&self, dictionaries: Dictionaries) {
        let mut guard = self.dictionaries.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(dictionaries);
    }
}

fn load_or_empty(path: &std::path::Path) -> Dictionaries {
    match load_dictionaries(path) {
        Ok(dictionaries) => dictionaries,
        Err(e) => {
            warn!("Could not load dictionary, serving without one: {}", e);
            Dictionaries::empty()
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/translate", post(translate_text))
        .route("/api/dictionary", get(list_dictionary))
        .route("/api/reload", post(reload_dictionary))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = WebConfig::from_env()?;
    let dictionaries = load_or_empty(&config.dictionary_path);
    info!(
        "Loaded {} phrases from {}",
        dictionaries.get(Direction::StandardToViennese).len(),
        config.dictionary_path.display()
    );

    let bind = config.bind.clone();
    let app = router(AppState::new(config, dictionaries));

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Server running at http://{}", bind);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let direction = request.direction.unwrap_or(Direction::StandardToViennese);
    let dictionaries = state.dictionaries();

    let config = match request.max_phrase_length {
        Some(n) if n > MAX_REQUEST_PHRASE_LENGTH => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                format!(
                    "max_phrase_length must be at most {}",
                    MAX_REQUEST_PHRASE_LENGTH
                ),
            ));
        }
        Some(n) => TranslatorConfig::default().with_max_phrase_length(n),
        None => state.config.translator_config(&dictionaries, direction),
    };

    let translation = dictionaries.translate(&request.text, direction, config);
    if translation.is_truncated() {
        warn!(
            "Truncated translation: {} of {} tokens",
            translation.consumed, translation.total
        );
    }
    debug!(
        "Translated {} chars ({}) into {} chars",
        request.text.chars().count(),
        direction,
        translation.text.chars().count()
    );

    Ok(Json(TranslateResponse {
        truncated: translation.is_truncated(),
        translated: translation.text,
        source: request.text,
        direction,
    }))
}

async fn list_dictionary(
    State(state): State<AppState>,
    Query(query): Query<DictionaryQuery>,
) -> Json<DictionaryResponse> {
    let direction = query.direction.unwrap_or(Direction::StandardToViennese);
    let dictionaries = state.dictionaries();
    let dictionary = dictionaries.get(direction);

    let entries = dictionary
        .iter()
        .take(query.limit.unwrap_or(usize::MAX))
        .map(|(phrase, translation)| DictionaryEntry {
            phrase: phrase.to_string(),
            translation: translation.to_string(),
        })
        .collect();

    Json(DictionaryResponse {
        direction,
        total: dictionary.len(),
        entries,
    })
}

async fn reload_dictionary(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let path = state.config.dictionary_path.clone();
    let loaded = tokio::task::spawn_blocking(move || load_dictionaries(&path))
        .await
        .map_err(|e| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Reload task failed: {}", e),
            )
        })?
        .map_err(|e| {
            warn!("Reload failed, keeping current dictionaries: {}", e);
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to reload dictionary: {}", e),
            )
        })?;

    let phrases = loaded.get(Direction::StandardToViennese).len();
    state.replace_dictionaries(loaded);
    info!("Reloaded {} phrases", phrases);

    Ok(Json(ReloadResponse { phrases }))
}
