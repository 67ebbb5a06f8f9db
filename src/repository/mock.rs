use mockall::mock;

use super::{BrandReader, BrandWriter, ProductReader, ProductWriter};
use crate::domain::brand::{Brand, BrandListQuery, NewBrand, UpdateBrand};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::repository::errors::RepositoryResult;

mock! {
    pub CatalogRepository {}

    impl BrandReader for CatalogRepository {
        fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
        fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<Vec<Brand>>;
    }

    impl BrandWriter for CatalogRepository {
        fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
        fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
        fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()>;
    }

    impl ProductReader for CatalogRepository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductWriter for CatalogRepository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}
