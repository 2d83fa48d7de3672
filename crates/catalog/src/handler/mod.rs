mod api;
mod pages;

use crate::state::AppState;
use anyhow::Result;
use axum::{response::Redirect, routing::get};
use shared::utils::shutdown_signal;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::api::{
    create_product, delete_product, get_product, get_products, product_api_routes, update_product,
};
pub use self::pages::product_page_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::get_products,
        api::get_product,
        api::create_product,
        api::update_product,
        api::delete_product,
    ),
    tags(
        (name = "Product", description = "Product catalog endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let repository = app_state.di_container.product_repository.clone();

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(product_api_routes(repository.clone()));

        let (app_router, api) = api_router.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
            .merge(product_page_routes(repository))
            .route("/", get(|| async { Redirect::to("/products") }))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
