use crate::db::{DbConnection, DbPool};
use crate::domain::brand::{Brand, BrandListQuery, NewBrand, UpdateBrand};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::repository::errors::RepositoryResult;

pub mod brand;
pub mod errors;
pub mod product;

#[cfg(test)]
pub mod mock;

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over brand records.
pub trait BrandReader {
    /// Fetch one brand with its products hydrated.
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
    /// List brands, optionally filtered by a substring search.
    fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<Vec<Brand>>;
}

/// Write operations over brand records.
pub trait BrandWriter {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
    fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
///
/// Creates and updates verify the referenced brand inside the same
/// transaction as the write and fail with `RepositoryError::BrandMissing`
/// when it does not exist.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}
