use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::{Binary, Json},
};

use business::domain::catalog::dialog::ActiveDialog;
use business::domain::catalog::errors::DialogError;
use business::domain::catalog::services::ImageFile;
use business::domain::catalog::use_cases::add_product_dialog::AddProductDialogUseCase;
use business::domain::catalog::use_cases::delete_product_dialog::{
    DeleteProductDialogUseCase, OpenDeleteDialogParams,
};
use business::domain::catalog::use_cases::edit_product_dialog::{
    EditProductDialogUseCase, OpenEditDialogParams,
};
use business::domain::catalog::use_cases::get_active_dialog::GetActiveDialogUseCase;
use business::domain::product::value_objects::ProductId;

use crate::api::dialog::dto::{AddDraftRequest, DialogResponse, EditDraftRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DialogApi {
    add_use_case: Arc<dyn AddProductDialogUseCase>,
    edit_use_case: Arc<dyn EditProductDialogUseCase>,
    delete_use_case: Arc<dyn DeleteProductDialogUseCase>,
    get_active_use_case: Arc<dyn GetActiveDialogUseCase>,
}

impl DialogApi {
    pub fn new(
        add_use_case: Arc<dyn AddProductDialogUseCase>,
        edit_use_case: Arc<dyn EditProductDialogUseCase>,
        delete_use_case: Arc<dyn DeleteProductDialogUseCase>,
        get_active_use_case: Arc<dyn GetActiveDialogUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            edit_use_case,
            delete_use_case,
            get_active_use_case,
        }
    }

    async fn select_image(&self, file: ImageFile) -> SelectImageResponse {
        match self.add_use_case.select_image(file).await {
            // The read finishes in the background; clients poll the dialog.
            Ok(_pending) => {
                let active = self.get_active_use_case.execute().await;
                SelectImageResponse::Accepted(Json(active.into()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => SelectImageResponse::Conflict(json),
                    _ => SelectImageResponse::InternalError(json),
                }
            }
        }
    }
}

/// Modal dialogs over the catalog
///
/// One dialog is open at a time. Every call returns the resulting dialog
/// snapshot; a closed snapshot means the action finished.
#[OpenApi]
impl DialogApi {
    /// Current dialog
    #[oai(path = "/dialog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_dialog(&self) -> Json<DialogResponse> {
        Json(self.get_active_use_case.execute().await.into())
    }

    /// Open the add dialog with an empty draft
    #[oai(path = "/dialogs/add", method = "post", tag = "ApiTags::Catalog")]
    async fn open_add(&self) -> DialogActionResponse {
        self.add_use_case.open().await.into()
    }

    /// Change add draft fields
    #[oai(path = "/dialogs/add", method = "patch", tag = "ApiTags::Catalog")]
    async fn edit_add(&self, body: Json<AddDraftRequest>) -> DialogActionResponse {
        self.add_use_case.edit(body.0.into()).await.into()
    }

    /// Upload the selected image file
    ///
    /// Starts reading the bytes; the draft image stays empty until the read lands.
    #[oai(
        path = "/dialogs/add/image/upload",
        method = "post",
        tag = "ApiTags::Catalog"
    )]
    async fn upload_image(
        &self,
        file_name: Query<String>,
        body: Binary<Vec<u8>>,
    ) -> SelectImageResponse {
        self.select_image(ImageFile {
            file_name: file_name.0,
            bytes: body.0,
        })
        .await
    }

    /// Save the add draft
    ///
    /// Appends the product and closes the dialog. When a field or the image is
    /// missing the dialog stays open with an error message.
    #[oai(path = "/dialogs/add/confirm", method = "post", tag = "ApiTags::Catalog")]
    async fn confirm_add(&self) -> DialogActionResponse {
        self.add_use_case.confirm().await.into()
    }

    /// Discard the add draft
    #[oai(path = "/dialogs/add", method = "delete", tag = "ApiTags::Catalog")]
    async fn cancel_add(&self) -> DialogActionResponse {
        self.add_use_case.cancel().await.into()
    }

    /// Open the edit dialog on a copy of a product
    #[oai(path = "/dialogs/edit/:id", method = "post", tag = "ApiTags::Catalog")]
    async fn open_edit(&self, id: Path<i64>) -> DialogActionResponse {
        self.edit_use_case
            .open(OpenEditDialogParams {
                id: ProductId::new(id.0),
            })
            .await
            .into()
    }

    /// Change fields of the edited copy
    #[oai(path = "/dialogs/edit", method = "patch", tag = "ApiTags::Catalog")]
    async fn edit_edit(&self, body: Json<EditDraftRequest>) -> DialogActionResponse {
        self.edit_use_case.edit(body.0.into()).await.into()
    }

    /// Write the edited copy back to the catalog
    #[oai(path = "/dialogs/edit/confirm", method = "post", tag = "ApiTags::Catalog")]
    async fn confirm_edit(&self) -> DialogActionResponse {
        self.edit_use_case.confirm().await.into()
    }

    /// Discard the edited copy
    #[oai(path = "/dialogs/edit", method = "delete", tag = "ApiTags::Catalog")]
    async fn cancel_edit(&self) -> DialogActionResponse {
        self.edit_use_case.cancel().await.into()
    }

    /// Ask for delete confirmation
    #[oai(path = "/dialogs/delete/:id", method = "post", tag = "ApiTags::Catalog")]
    async fn open_delete(&self, id: Path<i64>) -> DialogActionResponse {
        self.delete_use_case
            .open(OpenDeleteDialogParams {
                id: ProductId::new(id.0),
            })
            .await
            .into()
    }

    /// Remove the selected product
    #[oai(
        path = "/dialogs/delete/confirm",
        method = "post",
        tag = "ApiTags::Catalog"
    )]
    async fn confirm_delete(&self) -> DialogActionResponse {
        self.delete_use_case.confirm().await.into()
    }

    /// Keep the selected product
    #[oai(path = "/dialogs/delete", method = "delete", tag = "ApiTags::Catalog")]
    async fn cancel_delete(&self) -> DialogActionResponse {
        self.delete_use_case.cancel().await.into()
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DialogActionResponse {
    #[oai(status = 200)]
    Ok(Json<DialogResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<Result<ActiveDialog, DialogError>> for DialogActionResponse {
    fn from(result: Result<ActiveDialog, DialogError>) -> Self {
        match result {
            Ok(active) => DialogActionResponse::Ok(Json(active.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DialogActionResponse::BadRequest(json),
                    404 => DialogActionResponse::NotFound(json),
                    409 => DialogActionResponse::Conflict(json),
                    _ => DialogActionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SelectImageResponse {
    #[oai(status = 202)]
    Accepted(Json<DialogResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::errors::ProductError;

    #[test]
    fn should_map_missing_product_to_not_found() {
        let result: Result<ActiveDialog, DialogError> =
            Err(DialogError::Product(ProductError::NotFound));

        let response = DialogActionResponse::from(result);

        assert!(matches!(response, DialogActionResponse::NotFound(_)));
    }

    #[test]
    fn should_map_invalid_date_to_bad_request() {
        let result: Result<ActiveDialog, DialogError> = Err(DialogError::InvalidDate);

        let response = DialogActionResponse::from(result);

        assert!(matches!(response, DialogActionResponse::BadRequest(_)));
    }

    #[test]
    fn should_return_closed_snapshot_after_finished_action() {
        let result: Result<ActiveDialog, DialogError> = Ok(ActiveDialog::Closed);

        let response = DialogActionResponse::from(result);

        let DialogActionResponse::Ok(Json(dialog)) = response else {
            panic!("ok response expected");
        };
        assert!(dialog.add.is_none() && dialog.edit.is_none() && dialog.delete.is_none());
    }
}
