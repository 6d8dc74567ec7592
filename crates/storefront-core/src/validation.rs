//! Client-side validation rules for product input.
//!
//! These mirror the backend's bean-validation constraints so that obviously
//! invalid input is rejected before any request is sent. Rules are checked in
//! a fixed order and only the first violation is reported.

use thiserror::Error;

use crate::domain::{NewProduct, ProductPatch};

/// Maximum product name length, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum product description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// A violated input rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at most {NAME_MAX_CHARS} characters (got {0})")]
    NameTooLong(usize),

    #[error("Price must be a positive integer (got {0})")]
    PriceNotPositive(i64),

    #[error("Description must be at most {DESCRIPTION_MAX_CHARS} characters (got {0})")]
    DescriptionTooLong(usize),

    #[error("Initial stock must be zero or greater (got {0})")]
    NegativeStock(i64),
}

/// Raw values from a create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    /// Optional quantity for an associated stock record.
    pub initial_stock: Option<i64>,
}

/// A form that passed validation, split into the create payload and the
/// optional stock quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProduct {
    pub product: NewProduct,
    pub initial_stock: Option<u64>,
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    let len = name.chars().count();
    if len > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong(len));
    }
    Ok(())
}

const fn check_price(price: i64) -> Result<(), ValidationError> {
    if price <= 0 {
        return Err(ValidationError::PriceNotPositive(price));
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), ValidationError> {
    let len = description.chars().count();
    if len > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong(len));
    }
    Ok(())
}

/// Validate a create form.
///
/// Name and description are trimmed; an empty description is dropped.
pub fn validate_product_form(form: &ProductForm) -> Result<ValidatedProduct, ValidationError> {
    let name = form.name.trim();
    check_name(name)?;
    check_price(form.price)?;

    let description = form
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    if let Some(description) = description {
        check_description(description)?;
    }

    let initial_stock = match form.initial_stock {
        Some(quantity) => Some(
            u64::try_from(quantity).map_err(|_| ValidationError::NegativeStock(quantity))?,
        ),
        None => None,
    };

    Ok(ValidatedProduct {
        product: NewProduct {
            name: name.to_string(),
            price: form.price,
            description: description.map(str::to_string),
        },
        initial_stock,
    })
}

/// Validate the fields present in a patch with the same rules as creation.
pub fn validate_patch(patch: &ProductPatch) -> Result<(), ValidationError> {
    if let Some(name) = &patch.name {
        check_name(name.trim())?;
    }
    if let Some(price) = patch.price {
        check_price(price)?;
    }
    if let Some(description) = &patch.description {
        check_description(description)?;
    }
    Ok(())
}
