use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::slug::slugify;

/// Domain representation of a brand and the products it owns.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Brand {
    /// Unique identifier of the brand.
    pub id: i32,
    /// Display name of the brand.
    pub name: String,
    /// Optional URL to the brand logo.
    pub logo: Option<String>,
    /// Date the brand was founded.
    pub creation_date: NaiveDate,
    /// Country or nationality of the brand.
    pub nationality: String,
    /// Optional marketing slogan.
    pub slogan: Option<String>,
    /// Optional URL to the brand website.
    pub website: Option<String>,
    /// URL token derived from the name.
    pub slug: String,
    /// Products owned by this brand.
    pub products: Vec<Product>,
}

/// Payload required to insert a new brand.
#[derive(Debug, Clone)]
pub struct NewBrand {
    pub name: String,
    pub logo: Option<String>,
    pub creation_date: NaiveDate,
    pub nationality: String,
    pub slogan: Option<String>,
    pub website: Option<String>,
    /// Derived from `name`; never supplied by the caller.
    pub slug: String,
}

impl NewBrand {
    /// Build a brand payload, deriving the slug from `name`.
    pub fn new(
        name: impl Into<String>,
        creation_date: NaiveDate,
        nationality: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            name,
            logo: None,
            creation_date,
            nationality: nationality.into(),
            slogan: None,
            website: None,
            slug,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_slogan(mut self, slogan: impl Into<String>) -> Self {
        self.slogan = Some(slogan.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

/// Full replacement applied when editing an existing brand.
///
/// Edits carry every field, so the slug is recomputed from the new name.
#[derive(Debug, Clone)]
pub struct UpdateBrand {
    pub name: String,
    pub logo: Option<String>,
    pub creation_date: NaiveDate,
    pub nationality: String,
    pub slogan: Option<String>,
    pub website: Option<String>,
    pub slug: String,
}

impl UpdateBrand {
    pub fn new(
        name: impl Into<String>,
        creation_date: NaiveDate,
        nationality: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            name,
            logo: None,
            creation_date,
            nationality: nationality.into(),
            slogan: None,
            website: None,
            slug,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_slogan(mut self, slogan: impl Into<String>) -> Self {
        self.slogan = Some(slogan.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

/// Fields a brand search can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandSearchField {
    Name,
    Nationality,
    Slogan,
}

impl BrandSearchField {
    /// Map the wire-level category number to a field. Unknown numbers
    /// return `None`, which leaves the listing unfiltered.
    pub fn from_category(category: i32) -> Option<Self> {
        match category {
            0 => Some(Self::Name),
            1 => Some(Self::Nationality),
            2 => Some(Self::Slogan),
            _ => None,
        }
    }
}

/// Substring search over one brand field.
#[derive(Debug, Clone)]
pub struct BrandSearch {
    /// Raw category number as submitted by the client.
    pub category: i32,
    /// Unanchored substring to match.
    pub text: String,
}

/// Query definition used to list brands.
#[derive(Debug, Clone, Default)]
pub struct BrandListQuery {
    pub search: Option<BrandSearch>,
}

impl BrandListQuery {
    /// Construct a query that returns every brand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a substring search over the given category.
    pub fn search(mut self, category: i32, text: impl Into<String>) -> Self {
        self.search = Some(BrandSearch {
            category,
            text: text.into(),
        });
        self
    }
}
