use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::dialog::{
    ActiveDialog, EditDraftEdit, SharedDialogState, apply_product_edit,
};
use crate::domain::catalog::errors::DialogError;
use crate::domain::catalog::use_cases::edit_product_dialog::{
    EditProductDialogUseCase, OpenEditDialogParams,
};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct EditProductDialogUseCaseImpl {
    pub state: SharedDialogState,
    pub get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    pub update_use_case: Arc<dyn UpdateProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EditProductDialogUseCase for EditProductDialogUseCaseImpl {
    async fn open(&self, params: OpenEditDialogParams) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        let product = self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: params.id })
            .await?;

        // The dialog works on its own copy; the list only changes on confirm.
        state.open_edit(product)?;
        self.logger
            .debug(&format!("Edit dialog opened for product {}", params.id));
        Ok(state.active().clone())
    }

    async fn edit(&self, params: EditDraftEdit) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        apply_product_edit(state.edit_selection_mut()?, params)?;
        Ok(state.active().clone())
    }

    async fn confirm(&self) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        let selected = state.edit_selection_mut()?.clone();
        let id = selected.id;

        let result = self
            .update_use_case
            .execute(UpdateProductParams::from(selected))
            .await;
        state.close();

        match result {
            Ok(_) => self.logger.info(&format!("Edit dialog updated product {}", id)),
            Err(ProductError::NotFound) => self.logger.warn(&format!(
                "Edit dialog closed without changes: product {} no longer exists",
                id
            )),
            Err(other) => return Err(other.into()),
        }

        Ok(state.active().clone())
    }

    async fn cancel(&self) -> Result<ActiveDialog, DialogError> {
        let mut state = self.state.lock().await;
        state.edit_selection_mut()?;
        state.close();
        self.logger.debug("Edit dialog cancelled");
        Ok(state.active().clone())
    }
}
