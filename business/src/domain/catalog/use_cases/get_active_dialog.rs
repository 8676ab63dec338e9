use async_trait::async_trait;

use crate::domain::catalog::dialog::ActiveDialog;

#[async_trait]
pub trait GetActiveDialogUseCase: Send + Sync {
    async fn execute(&self) -> ActiveDialog;
}
