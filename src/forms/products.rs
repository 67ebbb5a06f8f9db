use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 255;

pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
}

/// Form payload submitted by the add and edit product pages.
///
/// The price arrives as raw text from a number input; anything that is not
/// a non-negative finite number is stored as 0.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub creation_date: NaiveDate,
    pub price: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
    pub brand: i32,
}

impl ProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }
        let description = sanitize_inline_text(&self.description);
        let price = coerce_price_text(self.price.as_deref());

        Ok(NewProduct::new(
            name,
            self.creation_date,
            price,
            description,
            self.brand,
        ))
    }

    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }
        let description = sanitize_inline_text(&self.description);
        let price = coerce_price_text(self.price.as_deref());

        Ok(UpdateProduct::new(
            name,
            self.creation_date,
            price,
            description,
            self.brand,
        ))
    }
}

/// JSON body accepted by `POST /api/products/add` and
/// `PUT /api/products/edit/{id}`. `brand` is the owning brand id.
#[derive(Debug, Deserialize)]
pub struct ApiProductPayload {
    pub name: String,
    pub creation_date: NaiveDate,
    #[serde(default)]
    pub price: f64,
    pub description: String,
    pub brand: i32,
}

impl ApiProductPayload {
    pub fn into_new_product(self) -> NewProduct {
        let price = coerce_price(self.price);
        NewProduct::new(
            self.name,
            self.creation_date,
            price,
            self.description,
            self.brand,
        )
    }

    pub fn into_update_product(self) -> UpdateProduct {
        let price = coerce_price(self.price);
        UpdateProduct::new(
            self.name,
            self.creation_date,
            price,
            self.description,
            self.brand,
        )
    }
}

fn coerce_price(price: f64) -> f64 {
    if price.is_finite() && price >= 0.0 {
        price
    } else {
        0.0
    }
}

fn coerce_price_text(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .map(coerce_price)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, 15).expect("valid date")
    }

    fn form(price: Option<&str>) -> ProductForm {
        ProductForm {
            name: "Café Noir".to_string(),
            creation_date: date(),
            price: price.map(str::to_string),
            description: "Un espresso serré".to_string(),
            brand: 1,
        }
    }

    #[test]
    fn product_form_derives_slug() {
        let product = form(Some("3.50"))
            .into_new_product()
            .expect("conversion should succeed");

        assert_eq!(product.slug, "cafe-noir");
        assert_eq!(product.price, 3.5);
        assert_eq!(product.brand_id, 1);
    }

    #[test]
    fn empty_price_is_stored_as_zero() {
        let product = form(None)
            .into_new_product()
            .expect("conversion should succeed");

        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn negative_price_is_coerced_to_zero() {
        let product = form(Some("-12.5"))
            .into_new_product()
            .expect("conversion should succeed");

        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn unparsable_price_is_coerced_to_zero() {
        let product = form(Some("douze"))
            .into_new_product()
            .expect("conversion should succeed");

        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn api_payload_coerces_negative_price() {
        let payload: ApiProductPayload = serde_json::from_str(
            r#"{
                "name": "Gadget",
                "creation_date": "2022-02-02",
                "price": -4.0,
                "description": "Un petit gadget",
                "brand": 3
            }"#,
        )
        .expect("payload should deserialize");

        let product = payload.into_new_product();

        assert_eq!(product.price, 0.0);
        assert_eq!(product.brand_id, 3);
        assert_eq!(product.slug, "gadget");
    }
}
