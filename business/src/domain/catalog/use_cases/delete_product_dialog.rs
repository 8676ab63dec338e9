use async_trait::async_trait;

use crate::domain::catalog::dialog::ActiveDialog;
use crate::domain::catalog::errors::DialogError;
use crate::domain::product::value_objects::ProductId;

pub struct OpenDeleteDialogParams {
    pub id: ProductId,
}

#[async_trait]
pub trait DeleteProductDialogUseCase: Send + Sync {
    async fn open(&self, params: OpenDeleteDialogParams) -> Result<ActiveDialog, DialogError>;
    async fn confirm(&self) -> Result<ActiveDialog, DialogError>;
    async fn cancel(&self) -> Result<ActiveDialog, DialogError>;
}
