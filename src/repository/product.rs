use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
    ProductSearchField, UpdateProduct as DomainUpdateProduct,
};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(search) = query.search.as_ref() {
            // Unknown category numbers leave the listing unfiltered.
            if let Some(field) = ProductSearchField::from_category(search.category) {
                let pattern = format!("%{}%", search.text);
                items = match field {
                    ProductSearchField::Name => items.filter(products::name.like(pattern)),
                    ProductSearchField::Description => {
                        items.filter(products::description.like(pattern))
                    }
                };
            }
            items = items.order(products::name.asc());
        } else {
            items = items.order(products::id.asc());
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        Ok(db_products.into_iter().map(Into::into).collect())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            ensure_brand_exists(conn, new_product.brand_id)?;

            let created = diesel::insert_into(products::table)
                .values(&DbNewProduct::from(new_product))
                .get_result::<DbProduct>(conn)?;

            Ok(created.into())
        })
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            ensure_brand_exists(conn, updates.brand_id)?;

            let target = products::table.filter(products::id.eq(product_id));

            let updated = diesel::update(target)
                .set(&DbUpdateProduct::from(updates))
                .get_result::<DbProduct>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            Ok(updated.into())
        })
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let target = products::table.filter(products::id.eq(product_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Brand verification runs inside the caller's transaction so a concurrent
/// brand delete cannot slip between the check and the product write.
fn ensure_brand_exists(conn: &mut SqliteConnection, brand_id: i32) -> RepositoryResult<()> {
    use crate::schema::brands;

    let exists = diesel::select(diesel::dsl::exists(
        brands::table.filter(brands::id.eq(brand_id)),
    ))
    .get_result::<bool>(conn)?;

    if exists {
        Ok(())
    } else {
        Err(RepositoryError::BrandMissing)
    }
}
