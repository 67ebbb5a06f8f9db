use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::products::{self, ProductsQuery};

#[get("/product")]
pub async fn show_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match products::load_products(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "products");
            context.insert("products", &data.products);
            context.insert("search_category", &data.search_category);
            context.insert("search_text", &data.search_text);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/product/view/{id}")]
pub async fn view_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::load_product_page(repo.get_ref(), product_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "products");
            context.insert("product", &data.product);
            context.insert("brand", &data.brand);
            render_template(&tera, "products/view.html", &context)
        }
        Err(ServiceError::NotFound | ServiceError::BrandMissing) => {
            FlashMessage::error("Le produit que vous essayez de visionner n'existe pas").send();
            redirect("/product")
        }
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/product/add")]
pub async fn show_add_product(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match products::brand_choices(repo.get_ref()) {
        Ok(brands) => {
            let mut context = base_context(&flash_messages, "products");
            context.insert("selected_brand", &0);
            context.insert("brands", &brands);
            render_template(&tera, "products/add.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load brand choices: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/product/add")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Form<ProductForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let submitted = form.into_inner();

    match products::create_product(repo.get_ref(), submitted.clone()) {
        Ok(product) => {
            FlashMessage::success(format!("Votre produit {} a bien été ajouté", product.name))
                .send();
            redirect("/product")
        }
        Err(ServiceError::BrandMissing) => {
            FlashMessage::error("La marque à associer à ce produit n'a pas été trouvée").send();
            redirect("/product")
        }
        Err(ServiceError::Form(message)) => {
            match products::brand_choices(repo.get_ref()) {
                Ok(brands) => {
                    let mut context = base_context(&flash_messages, "products");
                    context.insert("error", &message);
                    context.insert("form", &submitted);
                    context.insert("selected_brand", &submitted.brand);
                    context.insert("brands", &brands);
                    render_template(&tera, "products/add.html", &context)
                }
                Err(err) => {
                    log::error!("Failed to load brand choices: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(err) => {
            log::error!("Failed to create product: {err}");
            FlashMessage::error("Impossible d'ajouter le produit").send();
            redirect("/product")
        }
    }
}

#[get("/product/edit/{id}")]
pub async fn show_edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = path.into_inner();

    match products::load_product_page(repo.get_ref(), product_id) {
        Ok(data) => match products::brand_choices(repo.get_ref()) {
            Ok(brands) => {
                let mut context = base_context(&flash_messages, "products");
                context.insert("form", &data.product);
                context.insert("product_id", &data.product.id);
                context.insert("selected_brand", &data.product.brand_id);
                context.insert("brands", &brands);
                render_template(&tera, "products/edit.html", &context)
            }
            Err(err) => {
                log::error!("Failed to load brand choices: {err}");
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(ServiceError::NotFound | ServiceError::BrandMissing) => {
            FlashMessage::error("Le produit que vous essayez de modifier n'existe pas").send();
            redirect("/product")
        }
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/product/edit/{id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Form<ProductForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = path.into_inner();
    let submitted = form.into_inner();

    match products::modify_product(repo.get_ref(), product_id, submitted.clone()) {
        Ok(product) => {
            FlashMessage::success(format!("Votre produit {} a bien été modifié", product.name))
                .send();
            redirect("/product")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Le produit que vous essayez de modifier n'existe pas").send();
            redirect("/product")
        }
        Err(ServiceError::BrandMissing) => {
            FlashMessage::error("La marque à associer à ce produit n'a pas été trouvée").send();
            redirect("/product")
        }
        Err(ServiceError::Form(message)) => {
            match products::brand_choices(repo.get_ref()) {
                Ok(brands) => {
                    let mut context = base_context(&flash_messages, "products");
                    context.insert("error", &message);
                    context.insert("form", &submitted);
                    context.insert("product_id", &product_id);
                    context.insert("selected_brand", &submitted.brand);
                    context.insert("brands", &brands);
                    render_template(&tera, "products/edit.html", &context)
                }
                Err(err) => {
                    log::error!("Failed to load brand choices: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(err) => {
            log::error!("Failed to modify product {product_id}: {err}");
            FlashMessage::error("Impossible de modifier le produit").send();
            redirect("/product")
        }
    }
}

#[get("/product/delete/{id}")]
pub async fn confirm_delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_delete_page(path.into_inner(), &repo, &flash_messages, &tera)
}

#[get("/product/delete/{id}/{confirm}")]
pub async fn delete_product(
    path: web::Path<(i32, String)>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (product_id, confirm) = path.into_inner();

    if !matches!(confirm.as_str(), "1" | "true") {
        return render_delete_page(product_id, &repo, &flash_messages, &tera);
    }

    match products::remove_product(repo.get_ref(), product_id) {
        Ok(name) => {
            FlashMessage::success(format!("Votre produit {name} a bien été supprimé")).send();
            redirect("/product")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Le produit que vous essayez de supprimer n'existe pas").send();
            redirect("/product")
        }
        Err(err) => {
            log::error!("Failed to delete product {product_id}: {err}");
            FlashMessage::error("Impossible de supprimer le produit").send();
            redirect("/product")
        }
    }
}

fn render_delete_page(
    product_id: i32,
    repo: &web::Data<DieselRepository>,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    match products::load_product_page(repo.get_ref(), product_id) {
        Ok(data) => {
            let mut context = base_context(flash_messages, "products");
            context.insert("product", &data.product);
            render_template(tera, "products/delete.html", &context)
        }
        Err(ServiceError::NotFound | ServiceError::BrandMissing) => {
            FlashMessage::error("Le produit que vous essayez de supprimer n'existe pas").send();
            redirect("/product")
        }
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
