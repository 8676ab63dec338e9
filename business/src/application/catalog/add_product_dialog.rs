use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::dialog::{
    ActiveDialog, AddDraftEdit, ImageReadOutcome, REQUIRED_FIELDS_MESSAGE, SharedDialogState,
};
use crate::domain::catalog::errors::DialogError;
use crate::domain::catalog::services::{ImageFile, ImageReaderService};
use crate::domain::catalog::use_cases::add_product_dialog::{
    AddProductDialogUseCase, PendingImageRead,
};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct AddProductDialogUseCaseImpl {
    pub state: SharedDialogState,
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub image_reader: Arc<dyn ImageReaderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductDialogUseCase for AddProductDialogUseCaseImpl {
    async fn open(&self) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        state.open_add()?;
        self.logger.debug("Add dialog opened");
        Ok(state.active().clone())
    }

    async fn edit(&self, params: AddDraftEdit) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        state.add_dialog_mut()?.draft.apply(params)?;
        Ok(state.active().clone())
    }

    async fn select_image(&self, file: ImageFile) -> Result<PendingImageRead, DialogError> {
        let ticket = self.state.lock().await.begin_image_read()?;
        let file_name = file.file_name.clone();
        self.logger
            .info(&format!("Reading image for draft: {}", file_name));

        let state = Arc::clone(&self.state);
        let reader = Arc::clone(&self.image_reader);
        let logger = Arc::clone(&self.logger);

        // The dialog lock is not held while the file is read.
        let handle = tokio::spawn(async move {
            let image = match reader.read_as_data_uri(file).await {
                Ok(image) => Some(image),
                Err(err) => {
                    logger.warn(&format!("Image read failed for {}: {}", file_name, err));
                    None
                }
            };

            let outcome = state.lock().await.finish_image_read(ticket, image);
            if outcome == ImageReadOutcome::Stale {
                logger.debug(&format!("Discarding stale image read for {}", file_name));
            }
            outcome
        });

        Ok(PendingImageRead { handle })
    }

    async fn confirm(&self) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        let draft = state.add_dialog_mut()?.draft.clone();

        let result = self
            .create_use_case
            .execute(CreateProductParams {
                name: draft.name,
                product_code: draft.product_code,
                date: draft.date,
                image: draft.image,
            })
            .await;

        match result {
            Ok(product) => {
                self.logger
                    .info(&format!("Add dialog committed product {}", product.id));
                state.close();
            }
            Err(ProductError::Validation) => {
                self.logger.debug("Add dialog rejected: required fields missing");
                state.add_dialog_mut()?.error = Some(REQUIRED_FIELDS_MESSAGE.to_string());
            }
            Err(other) => return Err(other.into()),
        }

        Ok(state.active().clone())
    }

    async fn cancel(&self) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        state.add_dialog_mut()?;
        state.close();
        self.logger.debug("Add dialog cancelled");
        Ok(state.active().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::dialog::DialogState;
    use crate::domain::catalog::services::ImageReadError;
    use crate::domain::product::model::{NewProductProps, Product, ProductFields};
    use crate::domain::product::value_objects::{ProductId, ProductImage};
    use mockall::mock;
    use tokio::sync::Notify;

    mock! {
        pub CreateProduct {}

        #[async_trait]
        impl CreateProductUseCase for CreateProduct {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    /// Returns a fixed image once the gate is opened.
    struct GatedReader {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl ImageReaderService for GatedReader {
        async fn read_as_data_uri(&self, file: ImageFile) -> Result<ProductImage, ImageReadError> {
            self.gate.notified().await;
            if file.bytes.is_empty() {
                return Err(ImageReadError::NotAnImage);
            }
            Ok(ProductImage::new("data:image/png;base64,iVBORw0KGgo="))
        }
    }

    fn png_upload() -> ImageFile {
        ImageFile {
            file_name: "product.png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    fn creating_use_case() -> Arc<dyn CreateProductUseCase> {
        let mut create = MockCreateProduct::new();
        create.expect_execute().returning(|params| {
            let fields = ProductFields::try_from(NewProductProps {
                name: params.name,
                product_code: params.product_code,
                date: params.date,
                image: params.image,
            })?;
            Ok(Product::new(ProductId::new(2), fields))
        });
        Arc::new(create)
    }

    fn dialog_with(
        create_use_case: Arc<dyn CreateProductUseCase>,
        gate: Arc<Notify>,
    ) -> AddProductDialogUseCaseImpl {
        AddProductDialogUseCaseImpl {
            state: DialogState::shared(),
            create_use_case,
            image_reader: Arc::new(GatedReader { gate }),
            logger: mock_logger(),
        }
    }

    async fn fill_text_fields(dialog: &AddProductDialogUseCaseImpl) {
        dialog
            .edit(AddDraftEdit {
                name: Some("B".to_string()),
                product_code: Some("200".to_string()),
                date: Some("2024-02-02".to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_commit_and_close_when_draft_complete() {
        let gate = Arc::new(Notify::new());
        let dialog = dialog_with(creating_use_case(), gate.clone());
        dialog.open().await.unwrap();
        fill_text_fields(&dialog).await;

        let pending = dialog.select_image(png_upload()).await.unwrap();
        gate.notify_one();
        assert_eq!(pending.finished().await, ImageReadOutcome::Applied);

        let active = dialog.confirm().await.unwrap();

        assert_eq!(active, ActiveDialog::Closed);
    }

    #[tokio::test]
    async fn should_stay_open_with_message_when_image_still_loading() {
        let mut create = MockCreateProduct::new();
        create
            .expect_execute()
            .returning(|_| Err(ProductError::Validation));
        let gate = Arc::new(Notify::new());
        let dialog = dialog_with(Arc::new(create), gate);
        dialog.open().await.unwrap();
        fill_text_fields(&dialog).await;
        let _pending = dialog.select_image(png_upload()).await.unwrap();

        let active = dialog.confirm().await.unwrap();

        let ActiveDialog::Add(add) = active else {
            panic!("add dialog expected");
        };
        assert_eq!(add.error.as_deref(), Some(REQUIRED_FIELDS_MESSAGE));
        assert!(add.draft.image_pending);
    }

    #[tokio::test]
    async fn should_discard_late_image_after_cancel() {
        let gate = Arc::new(Notify::new());
        let dialog = dialog_with(creating_use_case(), gate.clone());
        dialog.open().await.unwrap();
        let pending = dialog.select_image(png_upload()).await.unwrap();

        dialog.cancel().await.unwrap();
        dialog.open().await.unwrap();
        gate.notify_one();

        assert_eq!(pending.finished().await, ImageReadOutcome::Stale);
        let ActiveDialog::Add(add) = dialog.state.lock().await.active().clone() else {
            panic!("add dialog expected");
        };
        assert!(add.draft.image.is_none());
    }

    #[tokio::test]
    async fn should_leave_image_unset_when_file_is_not_an_image() {
        let gate = Arc::new(Notify::new());
        let dialog = dialog_with(creating_use_case(), gate.clone());
        dialog.open().await.unwrap();

        let pending = dialog
            .select_image(ImageFile {
                file_name: "empty.bin".to_string(),
                bytes: vec![],
            })
            .await
            .unwrap();
        gate.notify_one();

        assert_eq!(pending.finished().await, ImageReadOutcome::Failed);
        let ActiveDialog::Add(add) = dialog.state.lock().await.active().clone() else {
            panic!("add dialog expected");
        };
        assert!(add.draft.image.is_none());
        assert!(!add.draft.image_pending);
    }

    #[tokio::test]
    async fn should_show_empty_draft_after_cancel_and_reopen() {
        let dialog = dialog_with(creating_use_case(), Arc::new(Notify::new()));
        dialog.open().await.unwrap();
        fill_text_fields(&dialog).await;

        assert_eq!(dialog.cancel().await.unwrap(), ActiveDialog::Closed);
        let ActiveDialog::Add(add) = dialog.open().await.unwrap() else {
            panic!("add dialog expected");
        };

        assert_eq!(add.draft.name, "");
        assert_eq!(add.draft.product_code, "");
        assert!(add.draft.date.is_none());
        assert!(add.error.is_none());
    }

    #[tokio::test]
    async fn should_reject_events_when_dialog_closed() {
        let dialog = dialog_with(creating_use_case(), Arc::new(Notify::new()));

        assert!(matches!(
            dialog.confirm().await,
            Err(DialogError::NotOpen)
        ));
        assert!(matches!(dialog.cancel().await, Err(DialogError::NotOpen)));
        assert!(matches!(
            dialog.select_image(png_upload()).await,
            Err(DialogError::NotOpen)
        ));
    }
}
