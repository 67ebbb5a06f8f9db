use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::brand::{NewBrand, UpdateBrand};
use crate::forms::{none_if_empty, sanitize_inline_text};

/// Maximum allowed length for a brand name or nationality.
const TEXT_MAX_LEN: u64 = 255;

pub type BrandFormResult<T> = Result<T, BrandFormError>;

/// Errors that can occur while processing brand forms.
#[derive(Debug, Error)]
pub enum BrandFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("brand name cannot be empty")]
    EmptyName,
}

/// Form payload submitted by the add and edit brand pages.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BrandForm {
    #[validate(length(min = 1, max = TEXT_MAX_LEN))]
    pub name: String,
    pub logo: Option<String>,
    pub creation_date: NaiveDate,
    #[validate(length(min = 1, max = TEXT_MAX_LEN))]
    pub nationality: String,
    pub slogan: Option<String>,
    pub website: Option<String>,
}

impl BrandForm {
    /// Validates and sanitizes the payload into a domain `NewBrand`.
    pub fn into_new_brand(self) -> BrandFormResult<NewBrand> {
        let (name, creation_date, nationality, logo, slogan, website) = self.into_parts()?;

        let mut new_brand = NewBrand::new(name, creation_date, nationality);
        if let Some(logo) = logo {
            new_brand = new_brand.with_logo(logo);
        }
        if let Some(slogan) = slogan {
            new_brand = new_brand.with_slogan(slogan);
        }
        if let Some(website) = website {
            new_brand = new_brand.with_website(website);
        }

        Ok(new_brand)
    }

    /// Validates and sanitizes the payload into a domain `UpdateBrand`.
    pub fn into_update_brand(self) -> BrandFormResult<UpdateBrand> {
        let (name, creation_date, nationality, logo, slogan, website) = self.into_parts()?;

        let mut update = UpdateBrand::new(name, creation_date, nationality);
        if let Some(logo) = logo {
            update = update.with_logo(logo);
        }
        if let Some(slogan) = slogan {
            update = update.with_slogan(slogan);
        }
        if let Some(website) = website {
            update = update.with_website(website);
        }

        Ok(update)
    }

    #[allow(clippy::type_complexity)]
    fn into_parts(
        self,
    ) -> BrandFormResult<(
        String,
        NaiveDate,
        String,
        Option<String>,
        Option<String>,
        Option<String>,
    )> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(BrandFormError::EmptyName);
        }
        let nationality = sanitize_inline_text(&self.nationality);

        Ok((
            name,
            self.creation_date,
            nationality,
            none_if_empty(self.logo),
            none_if_empty(self.slogan),
            none_if_empty(self.website),
        ))
    }
}

/// JSON body accepted by `POST /api/brands/add` and `PUT /api/brands/edit/{id}`.
///
/// Unknown fields (notably `slug`) are ignored; the slug is always derived
/// from the name.
#[derive(Debug, Deserialize)]
pub struct ApiBrandPayload {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub creation_date: NaiveDate,
    pub nationality: String,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl ApiBrandPayload {
    pub fn into_new_brand(self) -> NewBrand {
        let mut new_brand = NewBrand::new(self.name, self.creation_date, self.nationality);
        if let Some(logo) = self.logo {
            new_brand = new_brand.with_logo(logo);
        }
        if let Some(slogan) = self.slogan {
            new_brand = new_brand.with_slogan(slogan);
        }
        if let Some(website) = self.website {
            new_brand = new_brand.with_website(website);
        }
        new_brand
    }

    pub fn into_update_brand(self) -> UpdateBrand {
        let mut update = UpdateBrand::new(self.name, self.creation_date, self.nationality);
        if let Some(logo) = self.logo {
            update = update.with_logo(logo);
        }
        if let Some(slogan) = self.slogan {
            update = update.with_slogan(slogan);
        }
        if let Some(website) = self.website {
            update = update.with_website(website);
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
    }

    #[test]
    fn brand_form_sanitizes_and_derives_slug() {
        let form = BrandForm {
            name: "  Acme \t Corp  ".to_string(),
            logo: Some("".to_string()),
            creation_date: date(),
            nationality: "USA".to_string(),
            slogan: None,
            website: Some("http://acme.test".to_string()),
        };

        let new_brand = form.into_new_brand().expect("conversion should succeed");

        assert_eq!(new_brand.name, "Acme Corp");
        assert_eq!(new_brand.slug, "acme-corp");
        assert_eq!(new_brand.logo, None);
        assert_eq!(new_brand.website.as_deref(), Some("http://acme.test"));
    }

    #[test]
    fn brand_form_rejects_blank_name() {
        let form = BrandForm {
            name: "   ".to_string(),
            logo: None,
            creation_date: date(),
            nationality: "USA".to_string(),
            slogan: None,
            website: None,
        };

        let result = form.into_new_brand();

        assert!(matches!(
            result,
            Err(BrandFormError::Validation(_) | BrandFormError::EmptyName)
        ));
    }

    #[test]
    fn api_payload_ignores_submitted_slug() {
        let payload: ApiBrandPayload = serde_json::from_str(
            r#"{
                "name": "Acme Corp",
                "logo": "http://x/a.png",
                "creation_date": "2020-01-01",
                "nationality": "USA",
                "slogan": "Go go",
                "website": "http://acme.test",
                "slug": "totally-unrelated"
            }"#,
        )
        .expect("payload should deserialize");

        let new_brand = payload.into_new_brand();

        assert_eq!(new_brand.slug, "acme-corp");
        assert_eq!(new_brand.slogan.as_deref(), Some("Go go"));
    }

    #[test]
    fn api_payload_optional_fields_default_to_none() {
        let payload: ApiBrandPayload = serde_json::from_str(
            r#"{"name": "Bare", "creation_date": "2021-05-05", "nationality": "France"}"#,
        )
        .expect("payload should deserialize");

        let new_brand = payload.into_new_brand();

        assert_eq!(new_brand.logo, None);
        assert_eq!(new_brand.slogan, None);
        assert_eq!(new_brand.website, None);
    }
}
