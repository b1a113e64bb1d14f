//! Landing and documentation endpoints.
//!
//! `/docs` is a minimal page, not Swagger UI: it fetches the generated
//! document at `/api/spec/v2` and pretty-prints the JSON. It cannot send
//! requests or render schemas.

use crate::{handlers::openapi::OPENAPI_SPEC_PATH, models::RootResponse};
use actix_web::{Error, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

pub const DOCS_PATH: &str = "/docs";

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Weather Forecast API - OpenAPI Spec</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background: #eef3f8;
            color: #223;
        }
        .container {
            max-width: 900px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }
        h1 {
            text-align: center;
        }
        pre {
            background: #f4f4f4;
            padding: 20px;
            border-radius: 4px;
            overflow-x: auto;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Weather Forecast API</h1>
        <p>Synthetic forecasts, alerts, and statistics. Raw document: <a href="/api/spec/v2">/api/spec/v2</a></p>
        <pre id="openapi">Loading...</pre>
    </div>
    <script>
        fetch('/api/spec/v2')
            .then(response => response.json())
            .then(data => {
                document.getElementById('openapi').textContent = JSON.stringify(data, null, 2);
            })
            .catch(error => {
                document.getElementById('openapi').textContent = 'Error loading spec: ' + error;
            });
    </script>
</body>
</html>"#;

#[api_v2_operation(
    summary = "API landing document",
    description = "Welcome message with the locations of the API documentation.",
    tags("Health")
)]
pub async fn root() -> Result<web::Json<RootResponse>, Error> {
    Ok(web::Json(RootResponse {
        message: "Welcome to Weather Forecast API".to_string(),
        documentation: DOCS_PATH.to_string(),
        alternative_docs: OPENAPI_SPEC_PATH.to_string(),
    }))
}

/// HTML viewer for the OpenAPI document
#[api_v2_operation(
    summary = "API documentation viewer",
    description = "Renders the OpenAPI document in a browser.",
    tags("Health")
)]
pub async fn docs() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DOCS_HTML)
}
