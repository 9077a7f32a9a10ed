mod config;
mod content;
mod routes;
mod sequencer;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        phrases = config.hero.phrases.len(),
        typing = ?config.hero.typing_interval,
        erasing = ?config.hero.erasing_interval,
        hold = ?config.hero.hold,
        cursor_blink = ?config.hero.cursor_blink,
        fix_articles = config.hero.fix_articles,
        "hero sequencer configured"
    );

    let port = config.port;
    let state = state::AppState::new(config.hero);
    let app = routes::app(state, &config.website_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind");

    tracing::info!(%port, website_dir = %config.website_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
