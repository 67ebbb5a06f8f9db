use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

pub mod api;
pub mod brands;
pub mod products;

#[derive(Serialize)]
struct Alert<'a> {
    level: &'a str,
    message: &'a str,
}

/// 303 redirect used after form submissions and on not-found flashes.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders a tera template, logging and returning 500 on failure.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Seeds a template context with pending flash messages and the active
/// navigation entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: alert_class(message.level()),
            message: message.content(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

fn alert_class(level: Level) -> &'static str {
    match level {
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "danger",
        _ => "info",
    }
}

#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect("/brand")
}
