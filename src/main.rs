//! Security Mentor - role-personalized security-awareness training backend.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use security_mentor::adapters::http::{tutor_routes, TutorHandlers};
use security_mentor::adapters::{InMemoryRetriever, OpenAiConfig, OpenAiGenerator};
use security_mentor::application::handlers::{
    DispatchHandler, ListModulesForRoleHandler, OnboardHandler, SelectModuleHandler,
};
use security_mentor::config::AppConfig;
use security_mentor::domain::curriculum::CurriculumStore;
use security_mentor::domain::roles::RoleProfileRegistry;
use security_mentor::ports::{Generator, Retriever};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A tutor without a corpus or generator would answer ungrounded; refuse
    // to start instead.
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let retriever = match build_retriever(&config) {
        Ok(retriever) => retriever,
        Err(e) => {
            error!("Failed to load policy corpus: {}", e);
            std::process::exit(1);
        }
    };

    let generator = match build_generator(&config) {
        Ok(generator) => generator,
        Err(e) => {
            error!("Failed to initialize generator: {}", e);
            std::process::exit(1);
        }
    };

    let curriculum = Arc::new(CurriculumStore::builtin());
    let registry = Arc::new(RoleProfileRegistry::builtin());

    let handlers = TutorHandlers::new(
        Arc::new(OnboardHandler::new(registry)),
        Arc::new(SelectModuleHandler::new(curriculum.clone())),
        Arc::new(ListModulesForRoleHandler::new(curriculum.clone())),
        Arc::new(DispatchHandler::new(curriculum, retriever, generator)),
    );

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", tutor_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(build_cors_layer(&config));

    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid listen address: {}", e);
            std::process::exit(1);
        }
    };

    info!(model = %config.ai.model, "starting security mentor on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}

fn build_retriever(config: &AppConfig) -> Result<Arc<dyn Retriever>, std::io::Error> {
    // validate() already checked the path exists.
    let path = config
        .retrieval
        .corpus_path
        .as_ref()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "corpus path unset"))?;
    let text = std::fs::read_to_string(path)?;
    let retriever = InMemoryRetriever::from_text(&text, config.retrieval.top_k);
    info!(
        passages = retriever.len(),
        corpus = %path.display(),
        "policy corpus loaded"
    );
    Ok(Arc::new(retriever))
}

fn build_generator(
    config: &AppConfig,
) -> Result<Arc<dyn Generator>, security_mentor::ports::GeneratorError> {
    let api_key = config.ai.api_key.clone().unwrap_or_default();
    let generator = OpenAiGenerator::new(
        OpenAiConfig::new(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?;
    Ok(Arc::new(generator))
}
