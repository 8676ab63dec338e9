use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
}

impl ProductApi {
    pub fn new(get_all_use_case: Arc<dyn GetAllProductsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl ProductApi {
    /// List the catalog
    ///
    /// Returns every product in display order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
