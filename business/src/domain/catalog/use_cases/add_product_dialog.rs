use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::domain::catalog::dialog::{ActiveDialog, AddDraftEdit, ImageReadOutcome};
use crate::domain::catalog::errors::DialogError;
use crate::domain::catalog::services::ImageFile;

/// Handle to an image read running in the background.
///
/// Dropping it detaches the read; its result still goes through the
/// draft generation check when it lands.
pub struct PendingImageRead {
    pub handle: JoinHandle<ImageReadOutcome>,
}

impl PendingImageRead {
    /// Waits for the read to land. A panicked read counts as failed.
    pub async fn finished(self) -> ImageReadOutcome {
        self.handle.await.unwrap_or(ImageReadOutcome::Failed)
    }
}

#[async_trait]
pub trait AddProductDialogUseCase: Send + Sync {
    async fn open(&self) -> Result<ActiveDialog, DialogError>;
    async fn edit(&self, params: AddDraftEdit) -> Result<ActiveDialog, DialogError>;
    async fn select_image(&self, file: ImageFile) -> Result<PendingImageRead, DialogError>;
    /// Keeps the dialog open with an error message when a field is missing.
    async fn confirm(&self) -> Result<ActiveDialog, DialogError>;
    async fn cancel(&self) -> Result<ActiveDialog, DialogError>;
}
