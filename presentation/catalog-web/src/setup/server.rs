use poem::{
    EndpointExt, Route, Server as PoemServer, get, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::page::routes::{index, script};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let base_url = config.server.base_url();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.dialog_api,
            ),
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}/api", base_url));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at("/", get(index))
            .at("/static/catalog.js", get(script))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(container.page_state)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Catalog page at {}", base_url);
        tracing::info!("Swagger UI at {}/docs", base_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", base_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
