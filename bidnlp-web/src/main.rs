//! Servidor web Axum para demonstração do stemmer persa

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use bidnlp_core::{
    normalize,
    stemmer::PersianStemmer,
    tokenizer::{stem_tokens_with, tokenize_with_mode, StemmedToken, TokenizerMode},
    trace::StemTrace,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Palavras de demonstração exibidas na página inicial
const DEMO_WORDS: &[&str] = &[
    "کتاب‌ها",
    "خانه‌ام",
    "سبزیجات",
    "میوه‌جات",
    "کتاب‌هایمان",
    "بزرگترین",
    "دوستانه",
    "دانشمندان",
];

/// Estado compartilhado da aplicação
struct AppState {
    stemmer: PersianStemmer,
}

/// Erros expostos pela API (sempre como `{"error": "..."}`)
#[derive(Debug, Error)]
enum ApiError {
    #[error("Texto vazio")]
    EmptyText,
    #[error("Configuração inválida: {0}")]
    Config(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyText => StatusCode::BAD_REQUEST,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Configuração do servidor, lida do ambiente
#[derive(Debug, Clone, PartialEq)]
struct WebConfig {
    host: String,
    port: u16,
}

impl WebConfig {
    fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `BIDNLP_HOST` (padrão 0.0.0.0) e `BIDNLP_PORT` (padrão 3000)
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let host = lookup("BIDNLP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("BIDNLP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("BIDNLP_PORT não é uma porta: {}", raw)))?,
            None => 3000,
        };
        Ok(Self { host, port })
    }

    fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize)]
struct StemRequest {
    text: String,
    #[serde(default)]
    tokenizer_mode: Option<TokenizerMode>,
    /// Inclui o rastro dos passos de cada token
    #[serde(default)]
    trace: bool,
}

#[derive(Serialize)]
struct StemResponse {
    tokens: Vec<StemmedToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    traces: Option<Vec<StemTrace>>,
    total_tokens: usize,
    processing_ms: u64,
}

#[derive(Deserialize)]
struct NormalizeRequest {
    text: String,
}

#[derive(Serialize)]
struct NormalizeResponse {
    normalized: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = WebConfig::from_env()?;
    let state = Arc::new(AppState {
        stemmer: PersianStemmer::new(),
    });
    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Servidor bidnlp iniciado em http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/stem", post(stem_handler))
        .route("/normalize", post(normalize_handler))
        .route("/demo-words", get(demo_words_handler))
        .layer(cors)
        .with_state(state)
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Tokeniza e reduz o texto; com `trace: true`, inclui o rastro de cada token
async fn stem_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StemRequest>,
) -> Result<Json<StemResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }

    let start = std::time::Instant::now();
    let mode = req.tokenizer_mode.unwrap_or_default();
    let (tokens, traces) = if req.trace {
        // O radical de cada token sai do próprio rastro: uma execução por palavra
        let (tokens, traces): (Vec<StemmedToken>, Vec<StemTrace>) =
            tokenize_with_mode(&req.text, mode)
                .into_iter()
                .map(|token| {
                    let trace = state.stemmer.stem_with_trace(&token.text);
                    let stem = trace.stem.clone();
                    (StemmedToken { token, stem }, trace)
                })
                .unzip();
        (tokens, Some(traces))
    } else {
        (stem_tokens_with(&req.text, mode, &state.stemmer), None)
    };
    let total_tokens = tokens.len();

    info!("Stemming [{:?}]: {} tokens", mode, total_tokens);

    Ok(Json(StemResponse {
        tokens,
        traces,
        total_tokens,
        processing_ms: start.elapsed().as_millis() as u64,
    }))
}

/// Apenas normaliza o texto, sem stemming
async fn normalize_handler(Json(req): Json<NormalizeRequest>) -> impl IntoResponse {
    Json(NormalizeResponse {
        normalized: normalize(&req.text),
    })
}

/// Retorna as palavras de demonstração com seus radicais
async fn demo_words_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let words: Vec<serde_json::Value> = DEMO_WORDS
        .iter()
        .map(|word| {
            serde_json::json!({
                "word": word,
                "stem": state.stemmer.stem(word),
            })
        })
        .collect();
    Json(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(AppState {
            stemmer: PersianStemmer::new(),
        }))
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_stem_endpoint() {
        let (status, json) = send(post_json(
            "/stem",
            serde_json::json!({ "text": "کتاب‌ها خانه‌ام" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_tokens"], 2);
        assert_eq!(json["tokens"][0]["stem"], "کتاب");
        assert_eq!(json["tokens"][1]["stem"], "خان");
        assert!(json.get("traces").is_none());
    }

    #[tokio::test]
    async fn test_stem_endpoint_with_trace_and_words_mode() {
        let (status, json) = send(post_json(
            "/stem",
            serde_json::json!({ "text": "سبزیجات!", "tokenizer_mode": "words", "trace": true }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tokens"][0]["text"], "سبزیجات");
        assert_eq!(json["traces"][0]["stem"], "سبزی");
        assert_eq!(json["traces"][0]["flags"]["broken_plural_applied"], true);
        assert_eq!(json["traces"][0]["skipped"][0], "personal_ending");
    }

    #[tokio::test]
    async fn test_stem_endpoint_traces_align_with_tokens() {
        let (status, json) = send(post_json(
            "/stem",
            serde_json::json!({ "text": "کتاب‌ها خانه‌ام، میوه‌جات", "trace": true }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let tokens = json["tokens"].as_array().unwrap();
        let traces = json["traces"].as_array().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(traces.len(), tokens.len());
        for (token, trace) in tokens.iter().zip(traces) {
            assert_eq!(token["text"], trace["input"]);
            assert_eq!(token["stem"], trace["stem"]);
        }
        assert_eq!(tokens[1]["text"], "خانه\u{200C}ام،");
        assert_eq!(tokens[2]["stem"], "میوه");
    }

    #[tokio::test]
    async fn test_stem_endpoint_rejects_empty_text() {
        let (status, json) = send(post_json("/stem", serde_json::json!({ "text": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Texto vazio");
    }

    #[tokio::test]
    async fn test_normalize_endpoint() {
        let (status, json) = send(post_json(
            "/normalize",
            serde_json::json!({ "text": " كتاب\u{200C}ها " }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["normalized"], "کتابها");
    }

    #[tokio::test]
    async fn test_demo_words_endpoint() {
        let request = Request::builder().uri("/demo-words").body(Body::empty()).unwrap();
        let (status, json) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        let words = json.as_array().unwrap();
        assert_eq!(words.len(), DEMO_WORDS.len());
        assert_eq!(words[2]["stem"], "سبزی");
    }

    #[test]
    fn test_config_defaults() {
        let config = WebConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_config_from_lookup() {
        let config = WebConfig::from_lookup(|key| match key {
            "BIDNLP_HOST" => Some("127.0.0.1".to_string()),
            "BIDNLP_PORT" => Some("8080".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config, WebConfig { host: "127.0.0.1".to_string(), port: 8080 });
    }

    #[test]
    fn test_config_rejects_bad_port() {
        let err = WebConfig::from_lookup(|key| (key == "BIDNLP_PORT").then(|| "abc".to_string()))
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
