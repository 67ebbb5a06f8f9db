use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::slug::slugify;

/// Domain representation of a product belonging to one brand.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Display name of the product.
    pub name: String,
    /// Date the product was released.
    pub creation_date: NaiveDate,
    /// Unit price; never negative.
    pub price: f64,
    /// Longer description shown to users.
    pub description: String,
    /// URL token derived from the name.
    pub slug: String,
    /// Identifier of the owning brand.
    pub brand_id: i32,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub creation_date: NaiveDate,
    pub price: f64,
    pub description: String,
    /// Derived from `name`; never supplied by the caller.
    pub slug: String,
    pub brand_id: i32,
}

impl NewProduct {
    /// Build a product payload, deriving the slug from `name`.
    pub fn new(
        name: impl Into<String>,
        creation_date: NaiveDate,
        price: f64,
        description: impl Into<String>,
        brand_id: i32,
    ) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            name,
            creation_date,
            price,
            description: description.into(),
            slug,
            brand_id,
        }
    }
}

/// Full replacement applied when editing an existing product.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub creation_date: NaiveDate,
    pub price: f64,
    pub description: String,
    pub slug: String,
    pub brand_id: i32,
}

impl UpdateProduct {
    pub fn new(
        name: impl Into<String>,
        creation_date: NaiveDate,
        price: f64,
        description: impl Into<String>,
        brand_id: i32,
    ) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            name,
            creation_date,
            price,
            description: description.into(),
            slug,
            brand_id,
        }
    }
}

/// Fields a product search can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSearchField {
    Name,
    Description,
}

impl ProductSearchField {
    /// Map the wire-level category number to a field. Unknown numbers
    /// return `None`, which leaves the listing unfiltered.
    pub fn from_category(category: i32) -> Option<Self> {
        match category {
            0 => Some(Self::Name),
            1 => Some(Self::Description),
            _ => None,
        }
    }
}

/// Substring search over one product field.
#[derive(Debug, Clone)]
pub struct ProductSearch {
    pub category: i32,
    pub text: String,
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub search: Option<ProductSearch>,
}

impl ProductListQuery {
    /// Construct a query that returns every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a substring search over the given category.
    pub fn search(mut self, category: i32, text: impl Into<String>) -> Self {
        self.search = Some(ProductSearch {
            category,
            text: text.into(),
        });
        self
    }
}
