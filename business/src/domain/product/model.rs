use super::errors::ProductError;
use super::value_objects::{ProductCode, ProductDate, ProductId, ProductImage, digits_only};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub product_code: ProductCode,
    pub date: ProductDate,
    pub image: ProductImage,
}

/// Raw input for a new catalog entry, as collected by the add dialog.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub name: String,
    pub product_code: String,
    pub date: Option<ProductDate>,
    pub image: Option<ProductImage>,
}

/// The four mutable fields of a product, all present.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub product_code: ProductCode,
    pub date: ProductDate,
    pub image: ProductImage,
}

impl TryFrom<NewProductProps> for ProductFields {
    type Error = ProductError;

    fn try_from(props: NewProductProps) -> Result<Self, Self::Error> {
        let code_digits = digits_only(&props.product_code);

        if props.name.trim().is_empty() || code_digits.is_empty() {
            return Err(ProductError::Validation);
        }

        let date = props.date.ok_or(ProductError::Validation)?;
        let image = props
            .image
            .filter(|image| !image.is_empty())
            .ok_or(ProductError::Validation)?;

        Ok(Self {
            name: props.name,
            product_code: ProductCode::from_digits(&code_digits),
            date,
            image,
        })
    }
}

impl Product {
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            product_code: fields.product_code,
            date: fields.date,
            image: fields.image,
        }
    }

    /// Constructor for data already held by the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        product_code: ProductCode,
        date: ProductDate,
        image: ProductImage,
    ) -> Self {
        Self {
            id,
            name,
            product_code,
            date,
            image,
        }
    }

    /// Replaces every mutable field. The id is untouched.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.product_code = fields.product_code;
        self.date = fields.date;
        self.image = fields.image;
    }
}
