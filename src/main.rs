use actix_web::{App, HttpServer, middleware, web};

use deckhand::config::AppConfig;
use deckhand::models::template::Catalog;
use deckhand::routes;
use deckhand::session::DeckStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Environment from .env, if present, before the logger reads RUST_LOG
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config = AppConfig::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).map_err(|e| {
            log::error!("{e}");
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => Catalog::builtin().clone(),
    };
    log::info!("Serving {} templates", catalog.len());

    let secret_key = config.cookie_key();
    let store = web::Data::new(DeckStore::new(config.deck_ttl, config.max_decks));
    let catalog = web::Data::new(catalog);
    let bind = config.bind.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind}");

    HttpServer::new(move || {
        let static_dir = config.static_dir.clone();
        App::new()
            .wrap(routes::session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(catalog.clone())
            .app_data(store.clone())
            .configure(|cfg| routes::configure(cfg, &static_dir))
    })
    .bind(bind)?
    .run()
    .await
}
