//! OpenAPI document for the products API and the Swagger UI page that renders it.

use crate::error::{ErrorBody, ViolationsBody};
use crate::handlers::product;
use crate::model::{NewProduct, Product, ProductChanges};
use crate::validation::{Location, Violation};
use axum::{response::Html, routing::get, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

pub const DOCS_PATH: &str = "/docs";
const SWAGGER_VERSION: &str = "5.18.2";

#[derive(Serialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(Serialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "Producto eliminado")]
    pub data: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Rust / Axum / PostgreSQL",
        description = "API Docs for Products",
        version = "1.0.0"
    ),
    paths(
        product::list,
        product::read,
        product::create,
        product::replace,
        product::toggle_availability,
        product::delete
    ),
    components(schemas(
        Product,
        NewProduct,
        ProductChanges,
        ProductResponse,
        ProductListResponse,
        DeletedResponse,
        ErrorBody,
        ViolationsBody,
        Violation,
        Location
    )),
    tags((name = "Products", description = "API operations related to products"))
)]
pub struct ApiDoc;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Swagger UI page loading its assets from a CDN and pointing at the served document.
pub fn swagger_html(title: &str, spec_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui.css" />
    <style>
        body {{ margin: 0; background: #fafafa; }}
        .topbar {{ background-color: #2b3b45 !important; }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {{
            window.ui = SwaggerUIBundle({{
                url: "{spec_url}",
                dom_id: '#swagger-ui',
                deepLinking: true,
                docExpansion: 'list',
                displayRequestDuration: true
            }});
        }};
    </script>
</body>
</html>"##,
        title = html_escape(title),
        version = SWAGGER_VERSION,
        spec_url = html_escape(spec_url),
    )
}

fn spec_path() -> String {
    format!("{}/openapi.json", DOCS_PATH)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_page() -> Html<String> {
    let title = format!("{} - Swagger UI", ApiDoc::openapi().info.title);
    Html(swagger_html(&title, &spec_path()))
}

/// GET /docs and GET /docs/openapi.json.
pub fn docs_routes() -> Router {
    Router::new()
        .route(DOCS_PATH, get(swagger_page))
        .route(&spec_path(), get(openapi_json))
}
