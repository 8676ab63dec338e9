use async_trait::async_trait;

use crate::domain::catalog::dialog::{ActiveDialog, SharedDialogState};
use crate::domain::catalog::use_cases::get_active_dialog::GetActiveDialogUseCase;

pub struct GetActiveDialogUseCaseImpl {
    pub state: SharedDialogState,
}

#[async_trait]
impl GetActiveDialogUseCase for GetActiveDialogUseCaseImpl {
    async fn execute(&self) -> ActiveDialog {
        self.state.lock().await.active().clone()
    }
}
