use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anilist_client::{AniListClient, StaffDirectory};
use seiyuu_service::config::{Config, LogFormat, StorageBackend};
use seiyuu_service::db::{InMemoryPostStore, PgPostStore, PostStore};
use seiyuu_service::openapi::ApiDoc;
use seiyuu_service::{router, Gateway, GatewaySettings, MIGRATOR};
use sqlx::postgres::PgPoolOptions;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&*doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

async fn build_store(config: &Config) -> io::Result<Arc<dyn PostStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory post store; data is lost on restart");
            Ok(Arc::new(InMemoryPostStore::new()))
        }
        StorageBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.storage.max_connections)
                .acquire_timeout(Duration::from_secs(5))
                .connect(&config.storage.url)
                .await
                .map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::Other,
                        format!("Failed to connect to database: {e}"),
                    )
                })?;

            if config.storage.run_migrations {
                MIGRATOR.run(&pool).await.map_err(|e| {
                    io::Error::new(io::ErrorKind::Other, format!("Migrations failed: {e}"))
                })?;
                tracing::info!("Database migrations applied");
            }

            Ok(Arc::new(PgPostStore::new(pool)))
        }
    }
}

/// Seiyuu Service
///
/// HTTP backend for SeiyuuHub.
///
/// # Routes
///
/// - `/api/v1/posts/*` - posts, comments, upvotes, two-step delete
/// - `/api/v1/seiyuu/*` - AniList roster, profiles, id verification
/// - `/api/v1/screens/*` - one view payload per client route
/// - `/api/anilist` - AniList pass-through (development)
/// - `/metrics`, `/api/v1/health*`, `/swagger-ui/`
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Support container healthchecks via CLI subcommand
    {
        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "healthcheck" {
                let port = std::env::var("SEIYUU_SERVICE_PORT").unwrap_or_else(|_| "8082".into());
                let url = format!("http://127.0.0.1:{}/api/v1/health", port);
                match reqwest::Client::new().get(&url).send().await {
                    Ok(resp) if resp.status().is_success() => return Ok(()),
                    Ok(resp) => {
                        eprintln!("healthcheck HTTP status: {}", resp.status());
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"));
                    }
                    Err(e) => {
                        eprintln!("healthcheck HTTP error: {}", e);
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"));
                    }
                }
            }
        }
    }

    let _ = dotenvy::dotenv();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    tracing::info!("Starting seiyuu-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = build_store(&config).await?;

    let anilist = AniListClient::new(&config.anilist.client_config()).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to build AniList client: {e}"),
        )
    })?;
    tracing::info!(endpoint = anilist.endpoint(), "AniList client ready");

    let staff: Arc<dyn StaffDirectory> = Arc::new(anilist.clone());
    let gateway = Gateway::new(
        store,
        staff,
        GatewaySettings {
            roster_page_size: config.views.roster_page_size,
            name_lookup_concurrency: config.views.name_lookup_concurrency,
        },
    );

    let gateway_data = web::Data::new(gateway);
    let anilist_data = web::Data::new(anilist);
    let proxy_enabled = config.anilist.proxy_enabled;
    if proxy_enabled {
        tracing::info!("AniList proxy mounted at /api/anilist");
    }

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server on {}", bind_address);

    let allowed_origins = config.cors.allowed_origins.clone();
    let server = HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        let mut app = App::new()
            .app_data(web::Data::new(openapi_doc.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url(ApiDoc::openapi_json_path(), openapi_doc.clone()),
            )
            .route(ApiDoc::openapi_json_path(), web::get().to(openapi_json))
            .app_data(gateway_data.clone())
            .app_data(anilist_data.clone())
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .route(
                "/metrics",
                web::get().to(seiyuu_service::metrics::serve_metrics),
            )
            .configure(router::configure);

        if proxy_enabled {
            app = app.configure(router::configure_proxy);
        }
        app
    })
    .bind(&bind_address)?
    .shutdown_timeout(10)
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let outcome = tokio::select! {
        result = &mut server_task => match result {
            Ok(result) => result,
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        },
        _ = &mut shutdown => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            Ok(())
        }
    };

    if let Err(e) = &outcome {
        tracing::error!("HTTP server failed: {}", e);
    }

    tracing::info!("Seiyuu-service shutting down");
    outcome
}
