use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::dialog::{ActiveDialog, SharedDialogState};
use crate::domain::catalog::errors::DialogError;
use crate::domain::catalog::use_cases::delete_product_dialog::{
    DeleteProductDialogUseCase, OpenDeleteDialogParams,
};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct DeleteProductDialogUseCaseImpl {
    pub state: SharedDialogState,
    pub get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    pub delete_use_case: Arc<dyn DeleteProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductDialogUseCase for DeleteProductDialogUseCaseImpl {
    async fn open(&self, params: OpenDeleteDialogParams) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        let product = self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: params.id })
            .await?;

        state.open_delete(product)?;
        self.logger
            .debug(&format!("Delete dialog opened for product {}", params.id));
        Ok(state.active().clone())
    }

    async fn confirm(&self) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        let id = state.delete_selection()?.id;

        let result = self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await;
        state.close();

        match result {
            Ok(()) => self.logger.info(&format!("Delete dialog removed product {}", id)),
            Err(ProductError::NotFound) => self.logger.warn(&format!(
                "Delete dialog closed without changes: product {} no longer exists",
                id
            )),
            Err(other) => return Err(other.into()),
        }

        Ok(state.active().clone())
    }

    async fn cancel(&self) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        state.delete_selection()?;
        state.close();
        self.logger.debug("Delete dialog cancelled");
        Ok(state.active().clone())
    }
}
