use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::brand::{Brand, BrandListQuery};
use crate::forms::brands::{ApiBrandPayload, BrandForm};
use crate::repository::{BrandReader, BrandWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the brands index page.
#[derive(Debug, Default, Deserialize)]
pub struct BrandsQuery {
    /// Which field to search: 0=name, 1=nationality, 2=slogan.
    pub search_category: Option<i32>,
    /// Substring entered by the user.
    pub search_text: Option<String>,
}

/// Data required to render the brands index template.
pub struct BrandsPageData {
    pub brands: Vec<Brand>,
    pub search_category: Option<i32>,
    pub search_text: Option<String>,
}

/// Loads the brands overview page, filtered when a search was submitted.
pub fn load_brands<R>(repo: &R, query: BrandsQuery) -> ServiceResult<BrandsPageData>
where
    R: BrandReader + ?Sized,
{
    let BrandsQuery {
        search_category,
        search_text,
    } = query;

    let mut list_query = BrandListQuery::new();
    if let (Some(category), Some(text)) = (search_category, search_text.as_ref()) {
        if !text.trim().is_empty() {
            list_query = list_query.search(category, text.trim());
        }
    }

    let brands = repo.list_brands(list_query)?;

    Ok(BrandsPageData {
        brands,
        search_category,
        search_text,
    })
}

/// Fetches one brand for the detail page.
pub fn get_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<Brand>
where
    R: BrandReader + ?Sized,
{
    repo.get_brand_by_id(brand_id)?.ok_or(ServiceError::NotFound)
}

/// Creates a brand from the HTML add form.
pub fn create_brand<R>(repo: &R, form: BrandForm) -> ServiceResult<Brand>
where
    R: BrandWriter + ?Sized,
{
    let new_brand = form
        .into_new_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    Ok(repo.create_brand(&new_brand)?)
}

/// Updates an existing brand from the HTML edit form. Strict: a missing id
/// is an error, nothing is created.
pub fn modify_brand<R>(repo: &R, brand_id: i32, form: BrandForm) -> ServiceResult<Brand>
where
    R: BrandWriter + ?Sized,
{
    let update = form
        .into_update_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    Ok(repo.update_brand(brand_id, &update)?)
}

/// Deletes a brand, returning its former name for the flash message.
pub fn remove_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<String>
where
    R: BrandReader + BrandWriter + ?Sized,
{
    let brand = repo.get_brand_by_id(brand_id)?.ok_or(ServiceError::NotFound)?;
    repo.delete_brand(brand_id)?;
    Ok(brand.name)
}

/// Creates a brand from the JSON API payload.
pub fn create_brand_api<R>(repo: &R, payload: ApiBrandPayload) -> ServiceResult<Brand>
where
    R: BrandWriter + ?Sized,
{
    Ok(repo.create_brand(&payload.into_new_brand())?)
}

/// Updates a brand by id, creating it when the id does not resolve.
///
/// Returns the persisted brand and whether it was created. The upsert only
/// exists on the API surface; the HTML edit flow stays strict.
pub fn upsert_brand_api<R>(
    repo: &R,
    brand_id: i32,
    payload: ApiBrandPayload,
) -> ServiceResult<(Brand, bool)>
where
    R: BrandReader + BrandWriter + ?Sized,
{
    match repo.get_brand_by_id(brand_id)? {
        Some(_) => {
            let updated = repo.update_brand(brand_id, &payload.into_update_brand())?;
            Ok((updated, false))
        }
        None => {
            let created = repo.create_brand(&payload.into_new_brand())?;
            Ok((created, true))
        }
    }
}

/// Lists every brand in the API projection.
pub fn list_brands_json<R>(repo: &R) -> ServiceResult<Vec<BrandJson>>
where
    R: BrandReader + ?Sized,
{
    let brands = repo.list_brands(BrandListQuery::new())?;
    Ok(brands.into_iter().map(BrandJson::from_brand).collect())
}

/// Fetches one brand in the API projection.
pub fn find_brand_json<R>(repo: &R, brand_id: i32) -> ServiceResult<BrandJson>
where
    R: BrandReader + ?Sized,
{
    let brand = repo.get_brand_by_id(brand_id)?.ok_or(ServiceError::NotFound)?;
    Ok(BrandJson::from_brand(brand))
}

/// API projection of a brand: its products are embedded, and each product
/// points back at the brand by id only.
#[derive(Debug, Serialize)]
pub struct BrandJson {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub creation_date: NaiveDate,
    pub nationality: String,
    pub slogan: Option<String>,
    pub website: Option<String>,
    pub slug: String,
    pub products: Vec<BrandProductJson>,
}

/// A product as embedded inside its owning brand.
#[derive(Debug, Serialize)]
pub struct BrandProductJson {
    pub id: i32,
    pub name: String,
    pub creation_date: NaiveDate,
    pub price: f64,
    pub description: String,
    pub slug: String,
    /// Owning brand reduced to its identifier.
    pub brand: i32,
}

impl BrandJson {
    pub fn from_brand(brand: Brand) -> Self {
        let Brand {
            id,
            name,
            logo,
            creation_date,
            nationality,
            slogan,
            website,
            slug,
            products,
        } = brand;

        let products = products
            .into_iter()
            .map(|product| BrandProductJson {
                id: product.id,
                name: product.name,
                creation_date: product.creation_date,
                price: product.price,
                description: product.description,
                slug: product.slug,
                brand: id,
            })
            .collect();

        Self {
            id,
            name,
            logo,
            creation_date,
            nationality,
            slogan,
            website,
            slug,
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockCatalogRepository;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
    }

    fn sample_brand(id: i32, name: &str) -> Brand {
        Brand {
            id,
            name: name.to_string(),
            logo: None,
            creation_date: date(),
            nationality: "USA".to_string(),
            slogan: None,
            website: None,
            slug: crate::domain::slug::slugify(name),
            products: Vec::new(),
        }
    }

    fn payload(name: &str) -> ApiBrandPayload {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "creation_date": "2020-01-01",
            "nationality": "USA"
        }))
        .expect("payload should deserialize")
    }

    #[test]
    fn upsert_updates_when_brand_exists() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_brand_by_id()
            .returning(|id| Ok(Some(sample_brand(id, "Acme Corp"))));
        repo.expect_update_brand()
            .returning(|id, updates| {
                let mut brand = sample_brand(id, &updates.name);
                brand.slug = updates.slug.clone();
                Ok(brand)
            });
        repo.expect_create_brand().never();

        let (brand, created) =
            upsert_brand_api(&repo, 7, payload("Acme Corp")).expect("upsert should succeed");

        assert!(!created);
        assert_eq!(brand.id, 7);
        assert_eq!(brand.slug, "acme-corp");
    }

    #[test]
    fn upsert_creates_when_brand_is_missing() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_brand_by_id().returning(|_| Ok(None));
        repo.expect_update_brand().never();
        repo.expect_create_brand().returning(|new_brand| {
            let mut brand = sample_brand(42, &new_brand.name);
            brand.slug = new_brand.slug.clone();
            Ok(brand)
        });

        let (brand, created) =
            upsert_brand_api(&repo, 999, payload("Brand New")).expect("upsert should succeed");

        assert!(created);
        assert_eq!(brand.slug, "brand-new");
    }

    #[test]
    fn remove_brand_reports_missing_id() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_brand_by_id().returning(|_| Ok(None));
        repo.expect_delete_brand().never();

        let result = remove_brand(&repo, 5);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn brand_json_reduces_back_references_to_ids() {
        let mut brand = sample_brand(3, "Acme Corp");
        brand.products = vec![crate::domain::product::Product {
            id: 11,
            name: "Widget".to_string(),
            creation_date: date(),
            price: 9.99,
            description: "Un widget".to_string(),
            slug: "widget".to_string(),
            brand_id: 3,
        }];

        let json = BrandJson::from_brand(brand);

        assert_eq!(json.products.len(), 1);
        assert_eq!(json.products[0].brand, 3);
    }
}
