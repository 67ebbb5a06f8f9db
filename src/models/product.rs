use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub creation_date: NaiveDate,
    pub price: f64,
    pub description: String,
    pub slug: String,
    pub brand_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub creation_date: NaiveDate,
    pub price: f64,
    pub description: &'a str,
    pub slug: &'a str,
    pub brand_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub creation_date: NaiveDate,
    pub price: f64,
    pub description: &'a str,
    pub slug: &'a str,
    pub brand_id: i32,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            creation_date: value.creation_date,
            price: value.price,
            description: value.description,
            slug: value.slug,
            brand_id: value.brand_id,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            creation_date: value.creation_date,
            price: value.price,
            description: value.description.as_str(),
            slug: value.slug.as_str(),
            brand_id: value.brand_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            creation_date: value.creation_date,
            price: value.price,
            description: value.description.as_str(),
            slug: value.slug.as_str(),
            brand_id: value.brand_id,
        }
    }
}
