use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::brands::BrandForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::brands::{self, BrandsQuery};
use crate::services::ServiceError;

#[get("/brand")]
pub async fn show_brands(
    params: web::Query<BrandsQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match brands::load_brands(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "brands");
            context.insert("brands", &data.brands);
            context.insert("search_category", &data.search_category);
            context.insert("search_text", &data.search_text);
            render_template(&tera, "brands/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list brands: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/brand/view/{id}")]
pub async fn view_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let brand_id = path.into_inner();

    match brands::get_brand(repo.get_ref(), brand_id) {
        Ok(brand) => {
            let mut context = base_context(&flash_messages, "brands");
            context.insert("brand", &brand);
            render_template(&tera, "brands/view.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("La marque que vous essayez de visionner n'existe pas").send();
            redirect("/brand")
        }
        Err(err) => {
            log::error!("Failed to load brand {brand_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/brand/add")]
pub async fn show_add_brand(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "brands");
    render_template(&tera, "brands/add.html", &context)
}

#[post("/brand/add")]
pub async fn add_brand(
    repo: web::Data<DieselRepository>,
    form: web::Form<BrandForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let submitted = form.into_inner();

    match brands::create_brand(repo.get_ref(), submitted.clone()) {
        Ok(brand) => {
            FlashMessage::success(format!("Votre marque {} a bien été ajoutée", brand.name))
                .send();
            redirect("/brand")
        }
        Err(ServiceError::Form(message)) => {
            let mut context = base_context(&flash_messages, "brands");
            context.insert("error", &message);
            context.insert("form", &submitted);
            render_template(&tera, "brands/add.html", &context)
        }
        Err(err) => {
            log::error!("Failed to create brand: {err}");
            FlashMessage::error("Impossible d'ajouter la marque").send();
            redirect("/brand")
        }
    }
}

#[get("/brand/edit/{id}")]
pub async fn show_edit_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let brand_id = path.into_inner();

    match brands::get_brand(repo.get_ref(), brand_id) {
        Ok(brand) => {
            let mut context = base_context(&flash_messages, "brands");
            context.insert("form", &brand);
            context.insert("brand_id", &brand.id);
            render_template(&tera, "brands/edit.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("La marque que vous essayez de modifier n'existe pas").send();
            redirect("/brand")
        }
        Err(err) => {
            log::error!("Failed to load brand {brand_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/brand/edit/{id}")]
pub async fn edit_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Form<BrandForm>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let brand_id = path.into_inner();
    let submitted = form.into_inner();

    match brands::modify_brand(repo.get_ref(), brand_id, submitted.clone()) {
        Ok(brand) => {
            FlashMessage::success(format!("Votre marque {} a bien été modifiée", brand.name))
                .send();
            redirect("/brand")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("La marque que vous essayez de modifier n'existe pas").send();
            redirect("/brand")
        }
        Err(ServiceError::Form(message)) => {
            let mut context = base_context(&flash_messages, "brands");
            context.insert("error", &message);
            context.insert("form", &submitted);
            context.insert("brand_id", &brand_id);
            render_template(&tera, "brands/edit.html", &context)
        }
        Err(err) => {
            log::error!("Failed to modify brand {brand_id}: {err}");
            FlashMessage::error("Impossible de modifier la marque").send();
            redirect("/brand")
        }
    }
}

#[get("/brand/delete/{id}")]
pub async fn confirm_delete_brand(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_delete_page(path.into_inner(), &repo, &flash_messages, &tera)
}

#[get("/brand/delete/{id}/{confirm}")]
pub async fn delete_brand(
    path: web::Path<(i32, String)>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (brand_id, confirm) = path.into_inner();

    if !matches!(confirm.as_str(), "1" | "true") {
        return render_delete_page(brand_id, &repo, &flash_messages, &tera);
    }

    match brands::remove_brand(repo.get_ref(), brand_id) {
        Ok(name) => {
            FlashMessage::success(format!("Votre marque {name} a bien été supprimée")).send();
            redirect("/brand")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("La marque que vous essayez de supprimer n'existe pas").send();
            redirect("/brand")
        }
        Err(err) => {
            log::error!("Failed to delete brand {brand_id}: {err}");
            FlashMessage::error("Impossible de supprimer la marque").send();
            redirect("/brand")
        }
    }
}

fn render_delete_page(
    brand_id: i32,
    repo: &web::Data<DieselRepository>,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    match brands::get_brand(repo.get_ref(), brand_id) {
        Ok(brand) => {
            let mut context = base_context(flash_messages, "brands");
            context.insert("brand", &brand);
            render_template(tera, "brands/delete.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("La marque que vous essayez de supprimer n'existe pas").send();
            redirect("/brand")
        }
        Err(err) => {
            log::error!("Failed to load brand {brand_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
