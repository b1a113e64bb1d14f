use actix_web::{HttpServer, web};
use weather_forecast_api::{AppConfig, AppMetrics, ServerConfig, create_app_with, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing(telemetry::LogFormat::from_env());

    let config = ServerConfig::from_env();
    let app_config = AppConfig::from_env();

    // One registry for the whole process; every worker gets a handle to it
    let metrics = web::Data::new(AppMetrics::new().map_err(std::io::Error::other)?);

    tracing::info!(
        host = %config.host,
        port = config.port,
        version = env!("CARGO_PKG_VERSION"),
        metrics_path = %app_config.metrics.path,
        "Weather Forecast API listening"
    );

    HttpServer::new(move || create_app_with(app_config.clone(), Some(metrics.clone())))
        .bind(config.bind_address())?
        .run()
        .await
}
