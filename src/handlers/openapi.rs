//! OpenAPI specification generation and app factory.

use crate::{
    config::AppConfig,
    error::ApiError,
    handlers::{
        create_forecast_request, docs, get_current_weather, get_detailed_forecast,
        get_detailed_forecasts, get_forecast, get_forecast_by_city, get_metrics,
        get_weather_alerts, get_weather_statistics, health, root, version,
    },
    middleware::{RequestIdMiddleware, track_http_metrics},
    services::AppMetrics,
};
use actix_web::{
    App, HttpRequest,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::from_fn,
};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Path where the generated OpenAPI document is served
pub const OPENAPI_SPEC_PATH: &str = "/api/spec/v2";

/// Creates the OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather Forecast API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Synthetic weather data service. Every value is generated at random within \
                documented bounds; there is no external data source.\n\n\
                ## Features\n\
                - **No Authentication Required**: all endpoints are publicly accessible\n\
                - **Forecasts**: basic and detailed forecasts for 1-30 days\n\
                - **Weather Alerts**: active alerts with severity levels\n\
                - **Statistics**: averages and extremes over 1-365 days\n\
                \n\
                ## Validation\n\
                Out-of-range parameters, blank city names, past dates, and malformed input \
                are rejected with `400 Bad Request` and a body of the form \
                `{\"detail\": \"<message>\"}`.\n\
                \n\
                ## Tags\n\
                - **Weather Forecast**: basic weather forecast operations\n\
                - **Detailed Forecast**: forecasts with cloud cover, UV index, visibility, and alerts\n\
                - **Weather Alerts**: weather alert operations\n\
                - **Statistics**: weather statistics and aggregations\n\
                - **Health**: API health monitoring"
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bad_request(message: String, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), %message, "Malformed request");
    ApiError::BadRequest(message).into()
}

/// Creates the application from environment configuration with its own registry
///
/// Convenient for a single app instance such as an integration test. A
/// multi-worker server should build the registry once and call
/// [`create_app_with`] from its factory closure instead.
pub fn create_base_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let metrics = match AppMetrics::new() {
        Ok(metrics) => Some(web::Data::new(metrics)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create metrics registry; metrics disabled");
            None
        }
    };

    create_app_with(AppConfig::from_env(), metrics)
}

/// Creates the application with all routes, middleware, and shared state
///
/// Every app built from clones of the same `metrics` handle reports into
/// one registry, so a scrape on any worker sees the whole process.
pub fn create_app_with(
    config: AppConfig,
    metrics: Option<web::Data<AppMetrics>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let metrics_path = config.metrics.path.clone();

    let app = App::new()
        .wrap(from_fn(track_http_metrics))
        .wrap(config.cors.to_cors())
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(actix_web::web::QueryConfig::default().error_handler(|err, req| {
            bad_request(err.to_string(), req)
        }))
        .app_data(actix_web::web::PathConfig::default().error_handler(|err, req| {
            bad_request(err.to_string(), req)
        }))
        .app_data(actix_web::web::JsonConfig::default().error_handler(|err, req| {
            bad_request(err.to_string(), req)
        }))
        .app_data(web::Data::new(config.metrics));

    let app = match metrics {
        Some(metrics) => app.app_data(metrics),
        None => app,
    };

    app.service(web::resource("/").route(web::get().to(root)))
        .service(web::resource("/docs").route(web::get().to(docs)))
        .service(web::resource("/api/forecast").route(web::get().to(get_forecast)))
        .service(web::resource("/api/forecast/current").route(web::get().to(get_current_weather)))
        .service(
            web::resource("/api/forecast/city/{city}").route(web::get().to(get_forecast_by_city)),
        )
        .service(web::resource("/api/forecast/detailed").route(web::get().to(get_detailed_forecast)))
        .service(
            web::resource("/api/forecast/detailed/multi")
                .route(web::get().to(get_detailed_forecasts)),
        )
        .service(web::resource("/api/forecast/alerts").route(web::get().to(get_weather_alerts)))
        .service(
            web::resource("/api/forecast/statistics").route(web::get().to(get_weather_statistics)),
        )
        .service(
            web::resource("/api/forecast/request").route(web::post().to(create_forecast_request)),
        )
        .service(web::resource("/api/forecast/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource(&metrics_path).route(web::get().to(get_metrics)))
        .with_json_spec_at(OPENAPI_SPEC_PATH)
        .build()
}
