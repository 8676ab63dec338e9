//! Modal dialog state for the catalog page.
//!
//! At most one dialog is active at a time. The add dialog owns a draft with
//! optional fields; the edit dialog owns a detached copy of the selected
//! product; the delete dialog holds a snapshot shown in its prompt.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::errors::DialogError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ProductCode, ProductDate, ProductImage, digits_only};

/// Message shown in the add dialog when confirm is rejected.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required and an image must be selected.";

pub type SharedDialogState = Arc<Mutex<DialogState>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddProductDraft {
    pub name: String,
    /// Digits only; filtered on every edit.
    pub product_code: String,
    pub date: Option<ProductDate>,
    pub image: Option<ProductImage>,
    /// An image read has started and not finished yet.
    pub image_pending: bool,
}

/// Field changes typed into the add dialog. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct AddDraftEdit {
    pub name: Option<String>,
    pub product_code: Option<String>,
    /// An empty string clears the date.
    pub date: Option<String>,
}

/// Field changes typed into the edit dialog. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct EditDraftEdit {
    pub name: Option<String>,
    pub product_code: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
}

impl AddProductDraft {
    /// Applies an edit atomically: an invalid date leaves the draft untouched.
    pub fn apply(&mut self, edit: AddDraftEdit) -> Result<(), DialogError> {
        let date = match edit.date.as_deref().map(str::trim) {
            None => self.date,
            Some("") => None,
            Some(raw) => Some(
                raw.parse::<ProductDate>()
                    .map_err(|_| DialogError::InvalidDate)?,
            ),
        };

        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(code) = edit.product_code {
            self.product_code = digits_only(&code);
        }
        self.date = date;
        Ok(())
    }
}

/// Applies an edit to the detached product copy held by the edit dialog.
pub fn apply_product_edit(product: &mut Product, edit: EditDraftEdit) -> Result<(), DialogError> {
    let date = match edit.date {
        Some(raw) => raw
            .parse::<ProductDate>()
            .map_err(|_| DialogError::InvalidDate)?,
        None => product.date,
    };

    if let Some(name) = edit.name {
        product.name = name;
    }
    if let Some(code) = edit.product_code {
        product.product_code = ProductCode::from_digits(&code);
    }
    if let Some(image) = edit.image {
        product.image = ProductImage::new(image);
    }
    product.date = date;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddDialog {
    pub draft: AddProductDraft,
    pub error: Option<String>,
    generation: u64,
    image_request: u64,
}

impl AddDialog {
    fn new(generation: u64) -> Self {
        Self {
            draft: AddProductDraft::default(),
            error: None,
            generation,
            image_request: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveDialog {
    #[default]
    Closed,
    Add(AddDialog),
    Edit(Product),
    Delete(Product),
}

impl ActiveDialog {
    pub fn kind(&self) -> &'static str {
        match self {
            ActiveDialog::Closed => "closed",
            ActiveDialog::Add(_) => "add",
            ActiveDialog::Edit(_) => "edit",
            ActiveDialog::Delete(_) => "delete",
        }
    }
}

/// Identifies one image read against the draft it was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTicket {
    generation: u64,
    request: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageReadOutcome {
    Applied,
    /// The read belonged to the current draft but produced no image.
    Failed,
    /// The draft was closed, reopened, or a newer file was selected.
    Stale,
}

#[derive(Debug, Default)]
pub struct DialogState {
    active: ActiveDialog,
    generation: u64,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedDialogState {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn active(&self) -> &ActiveDialog {
        &self.active
    }

    /// Closes whatever dialog is active and invalidates pending image reads.
    pub fn close(&mut self) {
        self.active = ActiveDialog::Closed;
        self.generation += 1;
    }

    fn ensure_closed(&self) -> Result<(), DialogError> {
        match self.active {
            ActiveDialog::Closed => Ok(()),
            _ => Err(DialogError::AlreadyOpen),
        }
    }

    pub fn open_add(&mut self) -> Result<(), DialogError> {
        self.ensure_closed()?;
        self.generation += 1;
        self.active = ActiveDialog::Add(AddDialog::new(self.generation));
        Ok(())
    }

    pub fn add_dialog_mut(&mut self) -> Result<&mut AddDialog, DialogError> {
        match &mut self.active {
            ActiveDialog::Add(dialog) => Ok(dialog),
            _ => Err(DialogError::NotOpen),
        }
    }

    /// Drops any previous image, marks the draft as loading, and returns the
    /// ticket the read must present when it lands.
    pub fn begin_image_read(&mut self) -> Result<ImageTicket, DialogError> {
        let dialog = self.add_dialog_mut()?;
        dialog.image_request += 1;
        dialog.draft.image = None;
        dialog.draft.image_pending = true;
        Ok(ImageTicket {
            generation: dialog.generation,
            request: dialog.image_request,
        })
    }

    pub fn finish_image_read(
        &mut self,
        ticket: ImageTicket,
        image: Option<ProductImage>,
    ) -> ImageReadOutcome {
        let ActiveDialog::Add(dialog) = &mut self.active else {
            return ImageReadOutcome::Stale;
        };
        if dialog.generation != ticket.generation || dialog.image_request != ticket.request {
            return ImageReadOutcome::Stale;
        }

        dialog.draft.image_pending = false;
        match image {
            Some(image) => {
                dialog.draft.image = Some(image);
                ImageReadOutcome::Applied
            }
            None => ImageReadOutcome::Failed,
        }
    }

    pub fn open_edit(&mut self, product: Product) -> Result<(), DialogError> {
        self.ensure_closed()?;
        self.active = ActiveDialog::Edit(product);
        Ok(())
    }

    pub fn edit_selection_mut(&mut self) -> Result<&mut Product, DialogError> {
        match &mut self.active {
            ActiveDialog::Edit(product) => Ok(product),
            _ => Err(DialogError::NotOpen),
        }
    }

    pub fn open_delete(&mut self, product: Product) -> Result<(), DialogError> {
        self.ensure_closed()?;
        self.active = ActiveDialog::Delete(product);
        Ok(())
    }

    pub fn delete_selection(&self) -> Result<&Product, DialogError> {
        match &self.active {
            ActiveDialog::Delete(product) => Ok(product),
            _ => Err(DialogError::NotOpen),
        }
    }
}
