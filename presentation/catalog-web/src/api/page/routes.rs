use std::sync::Arc;

use poem::{
    handler,
    http::StatusCode,
    web::{Data, Html},
};

use business::domain::catalog::use_cases::get_active_dialog::GetActiveDialogUseCase;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::page::view::render_page;

const CATALOG_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/catalog.js"));

/// What the server-rendered page reads on every request.
#[derive(Clone)]
pub struct PageState {
    pub get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    pub get_active_use_case: Arc<dyn GetActiveDialogUseCase>,
}

#[handler]
pub async fn index(Data(state): Data<&PageState>) -> poem::Result<Html<String>> {
    let products = state.get_all_use_case.execute().await.map_err(|err| {
        tracing::error!("Failed to load catalog page: {}", err);
        poem::Error::from_status(StatusCode::INTERNAL_SERVER_ERROR)
    })?;
    let dialog = state.get_active_use_case.execute().await;

    Ok(Html(render_page(&products, &dialog)))
}

#[handler]
pub async fn script() -> poem::Response {
    poem::Response::builder()
        .content_type("application/javascript; charset=utf-8")
        .body(CATALOG_JS)
}
