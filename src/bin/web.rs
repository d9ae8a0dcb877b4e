//! Single binary web server: schedule page at /, roster API, static from /static.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Settings come from the environment or a `.env`
//! file: HOST, PORT, DATABASE_URL, DB_MAX_CONNECTIONS, ROSTER_DEFAULT_SESSION,
//! ROSTER_EXPECTED_COUNT, ROSTER_FETCH_TIMEOUT_MS.

use actix_files::Files;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use americano_web::{
    web::{configure, AppState},
    Config, RosterFetcher, RosterSource,
};
use sqlx::mysql::MySqlPoolOptions;

/// Roster source for the configured database; the pool connects on first query.
fn roster_source(config: &Config) -> std::io::Result<RosterSource> {
    let Some(url) = config.database_url.as_deref() else {
        log::warn!("DATABASE_URL not set; every roster request will get the fallback list");
        return Ok(RosterSource::Unconfigured);
    };
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.fetch_timeout)
        .connect_lazy(url)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    Ok(RosterSource::MySql(pool))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let source = roster_source(&config)?;
    let pool = match &source {
        RosterSource::MySql(pool) => Some(pool.clone()),
        RosterSource::Fixed(_) | RosterSource::Unconfigured => None,
    };

    let state = Data::new(AppState {
        roster: RosterFetcher::new(source, config.fetch_timeout)
            .with_expected_count(config.expected_count),
        default_session: config.default_session.clone(),
    });

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await?;

    if let Some(pool) = pool {
        pool.close().await;
        log::info!("Database pool closed");
    }
    Ok(())
}
