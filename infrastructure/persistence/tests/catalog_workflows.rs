use std::sync::Arc;

use async_trait::async_trait;

use business::application::catalog::add_product_dialog::AddProductDialogUseCaseImpl;
use business::application::catalog::delete_product_dialog::DeleteProductDialogUseCaseImpl;
use business::application::catalog::edit_product_dialog::EditProductDialogUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::catalog::dialog::{
    ActiveDialog, AddDraftEdit, DialogState, EditDraftEdit, ImageReadOutcome,
    REQUIRED_FIELDS_MESSAGE,
};
use business::domain::catalog::errors::DialogError;
use business::domain::catalog::services::{ImageFile, ImageReadError, ImageReaderService};
use business::domain::catalog::use_cases::add_product_dialog::AddProductDialogUseCase;
use business::domain::catalog::use_cases::delete_product_dialog::{
    DeleteProductDialogUseCase, OpenDeleteDialogParams,
};
use business::domain::catalog::use_cases::edit_product_dialog::{
    EditProductDialogUseCase, OpenEditDialogParams,
};
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductCode, ProductId, ProductImage};
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;

const PNG_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

struct InstantReader;

#[async_trait]
impl ImageReaderService for InstantReader {
    async fn read_as_data_uri(&self, _file: ImageFile) -> Result<ProductImage, ImageReadError> {
        Ok(ProductImage::new(PNG_DATA_URI))
    }
}

struct Catalog {
    repository: Arc<ProductRepositoryInMemory>,
    add: AddProductDialogUseCaseImpl,
    edit: EditProductDialogUseCaseImpl,
    delete: DeleteProductDialogUseCaseImpl,
}

impl Catalog {
    fn seeded_with(products: Vec<Product>) -> Self {
        let repository = Arc::new(ProductRepositoryInMemory::with_products(products));
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let state = DialogState::shared();
        let get_by_id = Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        Self {
            add: AddProductDialogUseCaseImpl {
                state: state.clone(),
                create_use_case: Arc::new(CreateProductUseCaseImpl {
                    repository: repository.clone(),
                    logger: logger.clone(),
                }),
                image_reader: Arc::new(InstantReader),
                logger: logger.clone(),
            },
            edit: EditProductDialogUseCaseImpl {
                state: state.clone(),
                get_by_id_use_case: get_by_id.clone(),
                update_use_case: Arc::new(UpdateProductUseCaseImpl {
                    repository: repository.clone(),
                    logger: logger.clone(),
                }),
                logger: logger.clone(),
            },
            delete: DeleteProductDialogUseCaseImpl {
                state,
                get_by_id_use_case: get_by_id,
                delete_use_case: Arc::new(DeleteProductUseCaseImpl {
                    repository: repository.clone(),
                    logger: logger.clone(),
                }),
                logger,
            },
            repository,
        }
    }

    async fn products(&self) -> Vec<Product> {
        self.repository.get_all().await.unwrap()
    }

    async fn add_product(&self, name: &str, code: &str, date: &str) {
        self.add.open().await.unwrap();
        self.add
            .edit(AddDraftEdit {
                name: Some(name.to_string()),
                product_code: Some(code.to_string()),
                date: Some(date.to_string()),
            })
            .await
            .unwrap();
        let pending = self
            .add
            .select_image(ImageFile {
                file_name: "photo.png".to_string(),
                bytes: vec![1, 2, 3],
            })
            .await
            .unwrap();
        assert_eq!(pending.finished().await, ImageReadOutcome::Applied);
        assert_eq!(self.add.confirm().await.unwrap(), ActiveDialog::Closed);
    }
}

fn product_a() -> Product {
    Product::from_repository(
        ProductId::new(1),
        "A".to_string(),
        ProductCode::new(100),
        "01.01.2024".parse().unwrap(),
        ProductImage::new("https://picsum.photos/id/228/200/300"),
    )
}

#[tokio::test]
async fn should_append_new_product_with_fresh_id() {
    let catalog = Catalog::seeded_with(vec![product_a()]);

    catalog.add_product("B", "200", "02.02.2024").await;

    let products = catalog.products().await;
    assert_eq!(products.len(), 2);
    assert_eq!(products[0], product_a());
    assert_eq!(products[1].name, "B");
    assert_eq!(products[1].product_code.value(), 200);
    assert_eq!(products[1].date.to_string(), "02.02.2024");
    assert_eq!(products[1].image.as_str(), PNG_DATA_URI);
    assert_ne!(products[1].id, products[0].id);
}

#[tokio::test]
async fn should_keep_list_and_dialog_when_field_missing() {
    let catalog = Catalog::seeded_with(vec![product_a()]);
    catalog.add.open().await.unwrap();
    catalog
        .add
        .edit(AddDraftEdit {
            name: Some("B".to_string()),
            product_code: Some("200".to_string()),
            date: Some("02.02.2024".to_string()),
        })
        .await
        .unwrap();

    let active = catalog.add.confirm().await.unwrap();

    let ActiveDialog::Add(dialog) = active else {
        panic!("add dialog expected");
    };
    assert_eq!(dialog.error.as_deref(), Some(REQUIRED_FIELDS_MESSAGE));
    assert_eq!(catalog.products().await, vec![product_a()]);
}

#[tokio::test]
async fn should_edit_name_in_place_and_keep_id() {
    let catalog = Catalog::seeded_with(vec![product_a()]);
    catalog.add_product("B", "200", "02.02.2024").await;
    let before = catalog.products().await;

    catalog
        .edit
        .open(OpenEditDialogParams {
            id: ProductId::new(1),
        })
        .await
        .unwrap();
    catalog
        .edit
        .edit(EditDraftEdit {
            name: Some("Z".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    // Unconfirmed edits stay in the dialog.
    assert_eq!(catalog.products().await, before);

    catalog.edit.confirm().await.unwrap();

    let after = catalog.products().await;
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].id, ProductId::new(1));
    assert_eq!(after[0].name, "Z");
    assert_eq!(after[0].product_code, before[0].product_code);
    assert_eq!(after[1], before[1]);
}

#[tokio::test]
async fn should_leave_list_untouched_when_edited_product_was_removed() {
    let catalog = Catalog::seeded_with(vec![product_a()]);
    catalog
        .edit
        .open(OpenEditDialogParams {
            id: ProductId::new(1),
        })
        .await
        .unwrap();
    catalog.repository.delete(ProductId::new(1)).await.unwrap();

    let active = catalog.edit.confirm().await.unwrap();

    assert_eq!(active, ActiveDialog::Closed);
    assert!(catalog.products().await.is_empty());
}

#[tokio::test]
async fn should_delete_only_the_selected_product() {
    let catalog = Catalog::seeded_with(vec![product_a()]);
    catalog.add_product("B", "200", "02.02.2024").await;
    let second = catalog.products().await[1].clone();

    catalog
        .delete
        .open(OpenDeleteDialogParams {
            id: ProductId::new(1),
        })
        .await
        .unwrap();
    catalog.delete.confirm().await.unwrap();

    assert_eq!(catalog.products().await, vec![second]);
}

#[tokio::test]
async fn should_not_open_delete_dialog_for_unknown_id() {
    let catalog = Catalog::seeded_with(vec![product_a()]);

    let result = catalog
        .delete
        .open(OpenDeleteDialogParams {
            id: ProductId::new(42),
        })
        .await;

    assert!(matches!(result, Err(DialogError::Product(_))));
    assert_eq!(catalog.products().await, vec![product_a()]);
}

#[tokio::test]
async fn should_never_reuse_deleted_ids() {
    let catalog = Catalog::seeded_with(vec![]);
    catalog.add_product("B", "200", "02.02.2024").await;
    let deleted = catalog.products().await[0].id;

    catalog
        .delete
        .open(OpenDeleteDialogParams { id: deleted })
        .await
        .unwrap();
    catalog.delete.confirm().await.unwrap();
    catalog.add_product("C", "300", "03.03.2024").await;

    let products = catalog.products().await;
    assert_eq!(products.len(), 1);
    assert!(products[0].id > deleted);
}

#[tokio::test]
async fn should_allow_only_one_dialog_at_a_time() {
    let catalog = Catalog::seeded_with(vec![product_a()]);
    catalog.add.open().await.unwrap();

    let result = catalog
        .edit
        .open(OpenEditDialogParams {
            id: ProductId::new(1),
        })
        .await;

    assert!(matches!(result, Err(DialogError::AlreadyOpen)));
}
