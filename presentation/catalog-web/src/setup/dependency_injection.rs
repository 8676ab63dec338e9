use std::sync::Arc;

use logger::TracingLogger;
use media::image_reader::ImageReaderBase64;
use persistence::fixtures;
use persistence::product::repository::ProductRepositoryInMemory;

use business::application::catalog::add_product_dialog::AddProductDialogUseCaseImpl;
use business::application::catalog::delete_product_dialog::DeleteProductDialogUseCaseImpl;
use business::application::catalog::edit_product_dialog::EditProductDialogUseCaseImpl;
use business::application::catalog::get_active_dialog::GetActiveDialogUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::catalog::dialog::DialogState;

use crate::api::dialog::routes::DialogApi;
use crate::api::health::routes::HealthApi;
use crate::api::page::routes::PageState;
use crate::api::product::routes::ProductApi;
use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub dialog_api: DialogApi,
    pub page_state: PageState,
}

impl DependencyContainer {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let product_repository = if config.seed_fixtures {
            let products = fixtures::load_default()?;
            tracing::info!("Seeding catalog with {} products", products.len());
            Arc::new(ProductRepositoryInMemory::with_products(products))
        } else {
            Arc::new(ProductRepositoryInMemory::new())
        };
        let image_reader = Arc::new(ImageReaderBase64::new());
        let dialog_state = DialogState::shared();

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Dialog use cases
        let add_dialog_use_case = Arc::new(AddProductDialogUseCaseImpl {
            state: dialog_state.clone(),
            create_use_case,
            image_reader,
            logger: logger.clone(),
        });
        let edit_dialog_use_case = Arc::new(EditProductDialogUseCaseImpl {
            state: dialog_state.clone(),
            get_by_id_use_case: get_by_id_use_case.clone(),
            update_use_case,
            logger: logger.clone(),
        });
        let delete_dialog_use_case = Arc::new(DeleteProductDialogUseCaseImpl {
            state: dialog_state.clone(),
            get_by_id_use_case,
            delete_use_case,
            logger,
        });
        let get_active_dialog_use_case = Arc::new(GetActiveDialogUseCaseImpl {
            state: dialog_state,
        });

        let product_api = ProductApi::new(get_all_use_case.clone());
        let dialog_api = DialogApi::new(
            add_dialog_use_case,
            edit_dialog_use_case,
            delete_dialog_use_case,
            get_active_dialog_use_case.clone(),
        );
        let page_state = PageState {
            get_all_use_case,
            get_active_use_case: get_active_dialog_use_case,
        };

        Ok(Self {
            health_api,
            product_api,
            dialog_api,
            page_state,
        })
    }
}
