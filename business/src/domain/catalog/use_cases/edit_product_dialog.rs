use async_trait::async_trait;

use crate::domain::catalog::dialog::{ActiveDialog, EditDraftEdit};
use crate::domain::catalog::errors::DialogError;
use crate::domain::product::value_objects::ProductId;

pub struct OpenEditDialogParams {
    pub id: ProductId,
}

#[async_trait]
pub trait EditProductDialogUseCase: Send + Sync {
    async fn open(&self, params: OpenEditDialogParams) -> Result<ActiveDialog, DialogError>;
    async fn edit(&self, params: EditDraftEdit) -> Result<ActiveDialog, DialogError>;
    async fn confirm(&self) -> Result<ActiveDialog, DialogError>;
    async fn cancel(&self) -> Result<ActiveDialog, DialogError>;
}
