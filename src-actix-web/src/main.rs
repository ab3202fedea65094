//! bunny.net DNS-01 webhook
//!
//! 基于 Actix-web 的 cert-manager webhook 求解器服务

mod adapters;
mod config;
mod error;
mod handlers;
mod state;
mod tls;

use std::path::Path;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bunny_solver_core::{BunnyClientFactory, BunnySolver, Solver};

use adapters::KubeSecretStore;
use config::AppConfig;
use error::ApiError;
use state::AppState;

/// 初始化求解器：创建 bunny.net 客户端工厂并注入 Kubernetes secret 存储
async fn init_solver(config: &config::BunnyConfig) -> anyhow::Result<BunnySolver> {
    let clients = BunnyClientFactory::new(&config.api_base, config.request_timeout())?;
    let solver = BunnySolver::new(Arc::new(clients));

    let secret_store = KubeSecretStore::connect().await?;
    solver.initialize(Arc::new(secret_store))?;

    Ok(solver)
}

/// 配置路由
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .route("/healthz", web::get().to(handlers::health::healthz))
    .route("/livez", web::get().to(handlers::health::healthz))
    .route("/readyz", web::get().to(handlers::health::healthz))
    .service(
        web::scope("/apis")
            .route("", web::get().to(handlers::discovery::list_groups))
            .route("/{group}", web::get().to(handlers::discovery::get_group))
            .route(
                "/{group}/v1alpha1",
                web::get().to(handlers::discovery::list_resources),
            )
            .route(
                "/{group}/v1alpha1/{solver}",
                web::post().to(handlers::challenge::solve),
            )
            .route(
                "/{group}/v1alpha1/namespaces/{namespace}/{solver}",
                web::post().to(handlers::challenge::solve_namespaced),
            ),
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,bunny_solver_webhook=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // kube 客户端和 webhook 服务端共用 ring
    let _ = rustls::crypto::ring::default_provider().install_default();

    tracing::info!("bunny DNS-01 webhook 启动中...");

    // 加载配置，缺少 GROUP_NAME 时直接退出
    let config = AppConfig::load()?;
    tracing::info!("配置加载完成, group: {}", config.group_name);

    let solver = init_solver(&config.bunny).await?;
    tracing::info!("求解器 {} 初始化完成", solver.name());

    let state = AppState::new(Arc::new(solver), &config.group_name);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let workers = if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    };

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .workers(workers);

    let server = match (&config.server.tls_cert_file, &config.server.tls_key_file) {
        (Some(cert), Some(key)) => {
            let tls_config = tls::load_server_config(Path::new(cert), Path::new(key))?;
            tracing::info!("服务器启动于 https://{} (workers: {})", bind_addr, workers);
            server.bind_rustls_0_23(&bind_addr, tls_config)?
        }
        _ => {
            tracing::warn!("未配置 TLS 证书，使用明文 HTTP");
            tracing::info!("服务器启动于 http://{} (workers: {})", bind_addr, workers);
            server.bind(&bind_addr)?
        }
    };

    server.run().await?;

    Ok(())
}
