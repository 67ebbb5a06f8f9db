use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::brand::{Brand, BrandListQuery};
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::{ApiProductPayload, ProductForm};
use crate::repository::{BrandReader, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the products index page.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Which field to search: 0=name, 1=description.
    pub search_category: Option<i32>,
    /// Substring entered by the user.
    pub search_text: Option<String>,
}

/// Data required to render the products index template.
pub struct ProductsPageData {
    pub products: Vec<ProductListItem>,
    pub search_category: Option<i32>,
    pub search_text: Option<String>,
}

/// Row displayed in the products table, with the brand name resolved.
#[derive(Debug, Serialize)]
pub struct ProductListItem {
    pub id: i32,
    pub name: String,
    pub creation_date: NaiveDate,
    pub price: f64,
    pub description: String,
    pub slug: String,
    pub brand_id: i32,
    pub brand_name: String,
}

/// Loads the products overview page, filtered when a search was submitted.
pub fn load_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<ProductsPageData>
where
    R: ProductReader + BrandReader + ?Sized,
{
    let ProductsQuery {
        search_category,
        search_text,
    } = query;

    let mut list_query = ProductListQuery::new();
    if let (Some(category), Some(text)) = (search_category, search_text.as_ref()) {
        if !text.trim().is_empty() {
            list_query = list_query.search(category, text.trim());
        }
    }

    let products = repo.list_products(list_query)?;
    let brand_names = brand_name_lookup(repo)?;

    let items = products
        .into_iter()
        .map(|product| {
            let brand_name = brand_names
                .get(&product.brand_id)
                .cloned()
                .unwrap_or_default();
            ProductListItem {
                id: product.id,
                name: product.name,
                creation_date: product.creation_date,
                price: product.price,
                description: product.description,
                slug: product.slug,
                brand_id: product.brand_id,
                brand_name,
            }
        })
        .collect();

    Ok(ProductsPageData {
        products: items,
        search_category,
        search_text,
    })
}

fn brand_name_lookup<R>(repo: &R) -> ServiceResult<HashMap<i32, String>>
where
    R: BrandReader + ?Sized,
{
    Ok(repo
        .list_brands(BrandListQuery::new())?
        .into_iter()
        .map(|brand| (brand.id, brand.name))
        .collect())
}

/// Data required to render the product detail page.
pub struct ProductPageData {
    pub product: Product,
    pub brand: Brand,
}

/// Fetches one product and its owning brand for the detail page.
pub fn load_product_page<R>(repo: &R, product_id: i32) -> ServiceResult<ProductPageData>
where
    R: ProductReader + BrandReader + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)?;
    let brand = repo
        .get_brand_by_id(product.brand_id)?
        .ok_or(ServiceError::BrandMissing)?;

    Ok(ProductPageData { product, brand })
}

/// Brands offered by the add/edit form's brand select.
pub fn brand_choices<R>(repo: &R) -> ServiceResult<Vec<Brand>>
where
    R: BrandReader + ?Sized,
{
    Ok(repo.list_brands(BrandListQuery::new())?)
}

/// Creates a product from the HTML add form.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    Ok(repo.create_product(&new_product)?)
}

/// Updates an existing product from the HTML edit form. Strict: a missing
/// id is an error, nothing is created.
pub fn modify_product<R>(repo: &R, product_id: i32, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let update = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    Ok(repo.update_product(product_id, &update)?)
}

/// Deletes a product, returning its former name for the flash message.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<String>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)?;
    repo.delete_product(product_id)?;
    Ok(product.name)
}

/// Creates a product from the JSON API payload.
pub fn create_product_api<R>(repo: &R, payload: ApiProductPayload) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    Ok(repo.create_product(&payload.into_new_product())?)
}

/// Updates a product by id, creating it when the id does not resolve.
///
/// Returns the persisted product and whether it was created. The upsert
/// only exists on the API surface; the HTML edit flow stays strict.
pub fn upsert_product_api<R>(
    repo: &R,
    product_id: i32,
    payload: ApiProductPayload,
) -> ServiceResult<(Product, bool)>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    match repo.get_product_by_id(product_id)? {
        Some(_) => {
            let updated = repo.update_product(product_id, &payload.into_update_product())?;
            Ok((updated, false))
        }
        None => {
            let created = repo.create_product(&payload.into_new_product())?;
            Ok((created, true))
        }
    }
}

/// Lists every product in the API projection.
pub fn list_products_json<R>(repo: &R) -> ServiceResult<Vec<ProductJson>>
where
    R: ProductReader + BrandReader + ?Sized,
{
    let products = repo.list_products(ProductListQuery::new())?;
    let brands: HashMap<i32, Brand> = repo
        .list_brands(BrandListQuery::new())?
        .into_iter()
        .map(|brand| (brand.id, brand))
        .collect();

    products
        .into_iter()
        .map(|product| {
            let brand = brands
                .get(&product.brand_id)
                .ok_or(ServiceError::BrandMissing)?;
            Ok(ProductJson::from_parts(product, brand))
        })
        .collect()
}

/// Fetches one product in the API projection.
pub fn find_product_json<R>(repo: &R, product_id: i32) -> ServiceResult<ProductJson>
where
    R: ProductReader + BrandReader + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)?
        .ok_or(ServiceError::NotFound)?;
    let brand = repo
        .get_brand_by_id(product.brand_id)?
        .ok_or(ServiceError::BrandMissing)?;

    Ok(ProductJson::from_parts(product, &brand))
}

/// API projection of a product: its brand is embedded, and the brand's
/// product list is reduced to identifiers.
#[derive(Debug, Serialize)]
pub struct ProductJson {
    pub id: i32,
    pub name: String,
    pub creation_date: NaiveDate,
    pub price: f64,
    pub description: String,
    pub slug: String,
    pub brand: ProductBrandJson,
}

/// A brand as embedded inside one of its products.
#[derive(Debug, Serialize)]
pub struct ProductBrandJson {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub creation_date: NaiveDate,
    pub nationality: String,
    pub slogan: Option<String>,
    pub website: Option<String>,
    pub slug: String,
    /// Sibling products reduced to identifiers.
    pub products: Vec<i32>,
}

impl ProductJson {
    pub fn from_parts(product: Product, brand: &Brand) -> Self {
        Self {
            id: product.id,
            name: product.name,
            creation_date: product.creation_date,
            price: product.price,
            description: product.description,
            slug: product.slug,
            brand: ProductBrandJson {
                id: brand.id,
                name: brand.name.clone(),
                logo: brand.logo.clone(),
                creation_date: brand.creation_date,
                nationality: brand.nationality.clone(),
                slogan: brand.slogan.clone(),
                website: brand.website.clone(),
                slug: brand.slug.clone(),
                products: brand.products.iter().map(|sibling| sibling.id).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockCatalogRepository;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, 15).expect("valid date")
    }

    fn sample_product(id: i32, name: &str, brand_id: i32) -> Product {
        Product {
            id,
            name: name.to_string(),
            creation_date: date(),
            price: 3.5,
            description: "Un espresso serré".to_string(),
            slug: crate::domain::slug::slugify(name),
            brand_id,
        }
    }

    fn payload(name: &str, brand: i32) -> ApiProductPayload {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "creation_date": "2021-06-15",
            "price": 3.5,
            "description": "Un espresso serré",
            "brand": brand
        }))
        .expect("payload should deserialize")
    }

    #[test]
    fn create_reports_missing_brand() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_create_product()
            .returning(|_| Err(RepositoryError::BrandMissing));

        let result = create_product_api(&repo, payload("Café Noir", 999));

        assert!(matches!(result, Err(ServiceError::BrandMissing)));
    }

    #[test]
    fn upsert_creates_when_product_is_missing() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_product_by_id().returning(|_| Ok(None));
        repo.expect_update_product().never();
        repo.expect_create_product().returning(|new_product| {
            let mut product = sample_product(21, &new_product.name, new_product.brand_id);
            product.slug = new_product.slug.clone();
            Ok(product)
        });

        let (product, created) =
            upsert_product_api(&repo, 404, payload("Café Noir", 1)).expect("upsert should succeed");

        assert!(created);
        assert_eq!(product.slug, "cafe-noir");
    }

    #[test]
    fn upsert_updates_when_product_exists() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(sample_product(id, "Café Noir", 1))));
        repo.expect_create_product().never();
        repo.expect_update_product().returning(|id, updates| {
            let mut product = sample_product(id, &updates.name, updates.brand_id);
            product.slug = updates.slug.clone();
            Ok(product)
        });

        let (product, created) =
            upsert_product_api(&repo, 21, payload("Café Très Noir", 1)).expect("upsert");

        assert!(!created);
        assert_eq!(product.id, 21);
        assert_eq!(product.slug, "cafe-tres-noir");
    }

    #[test]
    fn product_json_embeds_brand_with_sibling_ids() {
        let product = sample_product(11, "Widget", 3);
        let brand = Brand {
            id: 3,
            name: "Acme Corp".to_string(),
            logo: None,
            creation_date: date(),
            nationality: "USA".to_string(),
            slogan: None,
            website: None,
            slug: "acme-corp".to_string(),
            products: vec![sample_product(11, "Widget", 3), sample_product(12, "Gadget", 3)],
        };

        let json = ProductJson::from_parts(product, &brand);

        assert_eq!(json.brand.id, 3);
        assert_eq!(json.brand.products, vec![11, 12]);
    }
}
