use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::brands::ApiBrandPayload;
use crate::forms::products::ApiProductPayload;
use crate::repository::DieselRepository;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;
use crate::services::{brands, products};

const BRAND_NOT_FOUND: &str = "La marque recherchée n'a pas été trouvée";
const PRODUCT_NOT_FOUND: &str = "Le produit recherché n'a pas été trouvé";
const BRAND_REF_NOT_FOUND: &str = "La marque à associer à ce produit n'a pas été trouvée";
const INVALID_DATA: &str = "Les données saisies sont invalides";

/// Maps write failures to the API's plain-text error convention: storage
/// errors get a generic 500 body, anything else leaks its display text.
fn write_error(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::BrandMissing => HttpResponse::NotFound().body(BRAND_REF_NOT_FOUND),
        ServiceError::Repository(RepositoryError::Database(_)) => {
            HttpResponse::InternalServerError().body(INVALID_DATA)
        }
        other => HttpResponse::InternalServerError().body(other.to_string()),
    }
}

#[get("/api/brands/list")]
pub async fn api_brands_list(repo: web::Data<DieselRepository>) -> impl Responder {
    match brands::list_brands_json(repo.get_ref()) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => {
            log::error!("Failed to list brands: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

#[get("/api/brands/search/{id}")]
pub async fn api_brands_search(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match brands::find_brand_json(repo.get_ref(), path.into_inner()) {
        Ok(brand) => HttpResponse::Ok().json(brand),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().body(BRAND_NOT_FOUND),
        Err(err) => {
            log::error!("Failed to fetch brand: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

#[post("/api/brands/add")]
pub async fn api_brands_add(
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: ApiBrandPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => return HttpResponse::InternalServerError().body(err.to_string()),
    };

    match brands::create_brand_api(repo.get_ref(), payload) {
        Ok(brand) => {
            HttpResponse::Created().body(format!("La marque {} a bien été ajoutée", brand.name))
        }
        Err(err) => write_error(err),
    }
}

#[put("/api/brands/edit/{id}")]
pub async fn api_brands_edit(
    path: web::Path<i32>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: ApiBrandPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => return HttpResponse::InternalServerError().body(err.to_string()),
    };

    match brands::upsert_brand_api(repo.get_ref(), path.into_inner(), payload) {
        Ok((_, true)) => HttpResponse::Created()
            .body("Cette marque n'ayant pas été trouvée, elle a été créée à la place"),
        Ok((_, false)) => HttpResponse::Ok().body("Cette marque a bien été modifiée"),
        Err(err) => write_error(err),
    }
}

#[delete("/api/brands/delete/{id}")]
pub async fn api_brands_delete(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match brands::remove_brand(repo.get_ref(), path.into_inner()) {
        Ok(_) => HttpResponse::Ok().body("Cette marque a bien été supprimée"),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().body("Cette marque n'existe pas. Inutile de la supprimer")
        }
        Err(err) => {
            log::error!("Failed to delete brand: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

#[get("/api/products/list")]
pub async fn api_products_list(repo: web::Data<DieselRepository>) -> impl Responder {
    match products::list_products_json(repo.get_ref()) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

#[get("/api/products/search/{id}")]
pub async fn api_products_search(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::find_product_json(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().body(PRODUCT_NOT_FOUND),
        Err(err) => {
            log::error!("Failed to fetch product: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

#[post("/api/products/add")]
pub async fn api_products_add(
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: ApiProductPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => return HttpResponse::InternalServerError().body(err.to_string()),
    };

    match products::create_product_api(repo.get_ref(), payload) {
        Ok(product) => {
            HttpResponse::Created().body(format!("Le produit {} a bien été ajouté", product.name))
        }
        Err(err) => write_error(err),
    }
}

#[put("/api/products/edit/{id}")]
pub async fn api_products_edit(
    path: web::Path<i32>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: ApiProductPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => return HttpResponse::InternalServerError().body(err.to_string()),
    };

    match products::upsert_product_api(repo.get_ref(), path.into_inner(), payload) {
        Ok((_, true)) => HttpResponse::Created()
            .body("Ce produit n'ayant pas été trouvé, il a été créé à la place"),
        Ok((_, false)) => HttpResponse::Ok().body("Ce produit a bien été modifié"),
        Err(err) => write_error(err),
    }
}

#[delete("/api/products/delete/{id}")]
pub async fn api_products_delete(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::remove_product(repo.get_ref(), path.into_inner()) {
        Ok(_) => HttpResponse::Ok().body("Ce produit a bien été supprimé"),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().body("Ce produit n'existe pas. Inutile de le supprimer")
        }
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}
