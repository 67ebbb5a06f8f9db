use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::brand::{
    Brand as DomainBrand, NewBrand as DomainNewBrand, UpdateBrand as DomainUpdateBrand,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::brands)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub creation_date: NaiveDate,
    pub nationality: String,
    pub slogan: Option<String>,
    pub website: Option<String>,
    pub slug: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::brands)]
pub struct NewBrand<'a> {
    pub name: &'a str,
    pub logo: Option<&'a str>,
    pub creation_date: NaiveDate,
    pub nationality: &'a str,
    pub slogan: Option<&'a str>,
    pub website: Option<&'a str>,
    pub slug: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::brands)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateBrand<'a> {
    pub name: &'a str,
    pub logo: Option<&'a str>,
    pub creation_date: NaiveDate,
    pub nationality: &'a str,
    pub slogan: Option<&'a str>,
    pub website: Option<&'a str>,
    pub slug: &'a str,
}

impl From<Brand> for DomainBrand {
    fn from(value: Brand) -> Self {
        Self {
            id: value.id,
            name: value.name,
            logo: value.logo,
            creation_date: value.creation_date,
            nationality: value.nationality,
            slogan: value.slogan,
            website: value.website,
            slug: value.slug,
            products: Vec::new(),
        }
    }
}

impl<'a> From<&'a DomainNewBrand> for NewBrand<'a> {
    fn from(value: &'a DomainNewBrand) -> Self {
        Self {
            name: value.name.as_str(),
            logo: value.logo.as_deref(),
            creation_date: value.creation_date,
            nationality: value.nationality.as_str(),
            slogan: value.slogan.as_deref(),
            website: value.website.as_deref(),
            slug: value.slug.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateBrand> for UpdateBrand<'a> {
    fn from(value: &'a DomainUpdateBrand) -> Self {
        Self {
            name: value.name.as_str(),
            logo: value.logo.as_deref(),
            creation_date: value.creation_date,
            nationality: value.nationality.as_str(),
            slogan: value.slogan.as_deref(),
            website: value.website.as_deref(),
            slug: value.slug.as_str(),
        }
    }
}
