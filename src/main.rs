use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use credential_auth_service::config::{CorsConfig, ServerConfig, StoreBackend};
use credential_auth_service::core::AppServices;
use credential_auth_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => error!("환경 파일 로드 실패: {}", e),
    }

    info!("🚀 인증 서비스 시작중...");

    let store = AppServices::init_user_store(StoreBackend::current())
        .await
        .map_err(|e| {
            error!("사용자 저장소 초기화 실패: {:?}", e);
            std::io::Error::other(e)
        })?;

    let services = AppServices::from_config(store);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(services).await
}

async fn start_http_server(services: AppServices) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .configure(|cfg| configure_all_routes(cfg, &services))
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// `PROFILE`에 따라 `.env.prod` / `.env.dev` 파일을 로드합니다.
///
/// 로거 초기화 전에 호출되므로 결과는 반환하여 초기화 이후에 기록합니다.
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv()?;
            return Ok(".env".to_string());
        }
    };

    dotenv::from_filename(file)?;
    Ok(format!("{} ({})", file, profile))
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin(&CorsConfig::allowed_origin())

        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        .max_age(CorsConfig::max_age())
}
