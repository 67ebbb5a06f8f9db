use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::brand::{
    Brand as DomainBrand, BrandListQuery, BrandSearchField, NewBrand as DomainNewBrand,
    UpdateBrand as DomainUpdateBrand,
};
use crate::domain::product::Product as DomainProduct;
use crate::models::brand::{Brand as DbBrand, NewBrand as DbNewBrand, UpdateBrand as DbUpdateBrand};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BrandReader, BrandWriter, DieselRepository};

impl BrandReader for DieselRepository {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let brand = brands::table
            .filter(brands::id.eq(id))
            .first::<DbBrand>(&mut conn)
            .optional()?;

        if let Some(db_brand) = brand {
            let mut domain: DomainBrand = db_brand.into();
            let mut products = load_products_for_brands(&mut conn, &[domain.id])?;
            domain.products = products.remove(&domain.id).unwrap_or_default();
            Ok(Some(domain))
        } else {
            Ok(None)
        }
    }

    fn list_brands(&self, query: BrandListQuery) -> RepositoryResult<Vec<DomainBrand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let mut items = brands::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(search) = query.search.as_ref() {
            // Unknown category numbers leave the listing unfiltered.
            if let Some(field) = BrandSearchField::from_category(search.category) {
                let pattern = format!("%{}%", search.text);
                items = match field {
                    BrandSearchField::Name => items.filter(brands::name.like(pattern)),
                    BrandSearchField::Nationality => {
                        items.filter(brands::nationality.like(pattern))
                    }
                    BrandSearchField::Slogan => items.filter(brands::slogan.like(pattern)),
                };
            }
            items = items.order(brands::name.asc());
        } else {
            items = items.order(brands::id.asc());
        }

        let db_brands = items.load::<DbBrand>(&mut conn)?;

        if db_brands.is_empty() {
            return Ok(Vec::new());
        }

        let brand_ids: Vec<i32> = db_brands.iter().map(|brand| brand.id).collect();
        let mut product_map = load_products_for_brands(&mut conn, &brand_ids)?;

        let mut domain_brands = Vec::with_capacity(db_brands.len());
        for db_brand in db_brands {
            let mut domain: DomainBrand = db_brand.into();
            domain.products = product_map.remove(&domain.id).unwrap_or_default();
            domain_brands.push(domain);
        }

        Ok(domain_brands)
    }
}

impl BrandWriter for DieselRepository {
    fn create_brand(&self, new_brand: &DomainNewBrand) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let db_new = DbNewBrand::from(new_brand);

        let created = diesel::insert_into(brands::table)
            .values(&db_new)
            .get_result::<DbBrand>(&mut conn)?;

        Ok(created.into())
    }

    fn update_brand(
        &self,
        brand_id: i32,
        updates: &DomainUpdateBrand,
    ) -> RepositoryResult<DomainBrand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateBrand::from(updates);

        let target = brands::table.filter(brands::id.eq(brand_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbBrand>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        let mut domain: DomainBrand = updated.into();
        let mut products = load_products_for_brands(&mut conn, &[domain.id])?;
        domain.products = products.remove(&domain.id).unwrap_or_default();

        Ok(domain)
    }

    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let target = brands::table.filter(brands::id.eq(brand_id));

        // Owned products go with the brand via ON DELETE CASCADE.
        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn load_products_for_brands(
    conn: &mut SqliteConnection,
    brand_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProduct>>> {
    use crate::schema::products;

    if brand_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = products::table
        .filter(products::brand_id.eq_any(brand_ids))
        .order(products::name.asc())
        .load::<DbProduct>(conn)?;

    let mut map: HashMap<i32, Vec<DomainProduct>> = HashMap::new();
    for row in rows {
        map.entry(row.brand_id).or_default().push(row.into());
    }

    Ok(map)
}
