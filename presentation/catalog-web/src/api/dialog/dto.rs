use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::catalog::dialog::{ActiveDialog, AddDialog, AddDraftEdit, EditDraftEdit};

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum DialogKindDto {
    #[oai(rename = "closed")]
    Closed,
    #[oai(rename = "add")]
    Add,
    #[oai(rename = "edit")]
    Edit,
    #[oai(rename = "delete")]
    Delete,
}

/// Add dialog contents as the user sees them.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct AddDialogDto {
    pub name: String,
    /// Digits only
    pub product_code: String,
    /// Date as dd.MM.yyyy
    pub date: Option<String>,
    /// Data URI of the selected image
    pub image: Option<String>,
    /// A selected file is still being read
    pub image_pending: bool,
    /// Inline validation message
    pub error: Option<String>,
}

impl From<AddDialog> for AddDialogDto {
    fn from(dialog: AddDialog) -> Self {
        let draft = dialog.draft;
        Self {
            name: draft.name,
            product_code: draft.product_code,
            date: draft.date.map(|d| d.to_string()),
            image: draft.image.map(|i| i.as_str().to_string()),
            image_pending: draft.image_pending,
            error: dialog.error,
        }
    }
}

/// Snapshot of the dialog currently shown over the catalog.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct DialogResponse {
    pub kind: DialogKindDto,
    pub add: Option<AddDialogDto>,
    /// Working copy of the product being edited
    pub edit: Option<ProductResponse>,
    /// Product awaiting delete confirmation
    pub delete: Option<ProductResponse>,
}

impl From<ActiveDialog> for DialogResponse {
    fn from(active: ActiveDialog) -> Self {
        let closed = Self {
            kind: DialogKindDto::Closed,
            add: None,
            edit: None,
            delete: None,
        };
        match active {
            ActiveDialog::Closed => closed,
            ActiveDialog::Add(dialog) => Self {
                kind: DialogKindDto::Add,
                add: Some(dialog.into()),
                ..closed
            },
            ActiveDialog::Edit(product) => Self {
                kind: DialogKindDto::Edit,
                edit: Some(product.into()),
                ..closed
            },
            ActiveDialog::Delete(product) => Self {
                kind: DialogKindDto::Delete,
                delete: Some(product.into()),
                ..closed
            },
        }
    }
}

/// Field changes for the add draft. Omitted fields are left as they are.
#[derive(Debug, Clone, Object)]
pub struct AddDraftRequest {
    pub name: Option<String>,
    /// Non-digits are dropped
    pub product_code: Option<String>,
    /// dd.MM.yyyy or yyyy-MM-dd; empty clears the date
    pub date: Option<String>,
}

impl From<AddDraftRequest> for AddDraftEdit {
    fn from(request: AddDraftRequest) -> Self {
        Self {
            name: request.name,
            product_code: request.product_code,
            date: request.date,
        }
    }
}

/// Field changes for the product being edited.
#[derive(Debug, Clone, Object)]
pub struct EditDraftRequest {
    pub name: Option<String>,
    /// Non-digits are dropped; no digits stores 0
    pub product_code: Option<String>,
    /// dd.MM.yyyy or yyyy-MM-dd
    pub date: Option<String>,
    /// Image source text, stored as typed
    pub image: Option<String>,
}

impl From<EditDraftRequest> for EditDraftEdit {
    fn from(request: EditDraftRequest) -> Self {
        Self {
            name: request.name,
            product_code: request.product_code,
            date: request.date,
            image: request.image,
        }
    }
}
