//! Switchboard server entry point.
//!
//! Loads configuration, wires the adapters into the application handlers,
//! and serves the HTTP API.

use std::sync::Arc;

use axum::{http::HeaderValue, middleware, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use switchboard::adapters::auth::BearerIdentityValidator;
use switchboard::adapters::backends::{
    GeminiClient, GeminiConfig, NewsApiClient, NewsApiConfig, OpenWeatherClient,
    OpenWeatherConfig,
};
use switchboard::adapters::http::middleware::{auth_middleware, AuthState};
use switchboard::adapters::http::{chat_routes, news_routes, ChatHandlers, NewsHandlers};
use switchboard::adapters::postgres::PostgresChatRepository;
use switchboard::application::handlers::chat::{
    CreateChatHandler, DeleteChatHandler, ListChatsHandler, LoadChatHandler, SendMessageHandler,
};
use switchboard::application::handlers::news::LatestNewsHandler;
use switchboard::application::responders::{GeneralResponder, NewsResponder, WeatherResponder};
use switchboard::config::AppConfig;
use switchboard::ports::ChatRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let repository: Arc<dyn ChatRepository> = Arc::new(PostgresChatRepository::new(pool));

    // Backend gateways behind their responders.
    let timeout = config.backends.timeout();
    let general = Arc::new(GeneralResponder::new(Arc::new(GeminiClient::new(
        GeminiConfig::new(config.backends.gemini.api_key.clone())
            .with_model(config.backends.gemini.model.clone())
            .with_base_url(config.backends.gemini.base_url.clone())
            .with_timeout(timeout),
    ))));
    let news = Arc::new(NewsResponder::new(Arc::new(NewsApiClient::new(
        NewsApiConfig::new(config.backends.news.api_key.clone())
            .with_base_url(config.backends.news.base_url.clone())
            .with_timeout(timeout),
    ))));
    let weather = Arc::new(WeatherResponder::new(Arc::new(OpenWeatherClient::new(
        OpenWeatherConfig::new(config.backends.weather.api_key.clone())
            .with_geocode_base_url(config.backends.weather.geocode_base_url.clone())
            .with_weather_base_url(config.backends.weather.weather_base_url.clone())
            .with_timeout(timeout),
    ))));

    let chat_handlers = ChatHandlers::new(
        Arc::new(SendMessageHandler::new(
            repository.clone(),
            general,
            news.clone(),
            weather,
        )),
        Arc::new(CreateChatHandler::new(repository.clone())),
        Arc::new(LoadChatHandler::new(repository.clone())),
        Arc::new(DeleteChatHandler::new(repository.clone())),
        Arc::new(ListChatsHandler::new(repository)),
    );
    let news_handlers = NewsHandlers::new(Arc::new(LatestNewsHandler::new(news)));

    let auth_state: AuthState = Arc::new(BearerIdentityValidator::new());

    let app = Router::new()
        .nest("/api/chats", chat_routes(chat_handlers))
        .nest("/api/news", news_routes(news_handlers))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "starting switchboard server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
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
            .allow_origin(origins)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}
