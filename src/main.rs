use std::env;

use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use marque_catalog::db::establish_connection_pool;
use marque_catalog::repository::DieselRepository;
use marque_catalog::routes::api::{
    api_brands_add, api_brands_delete, api_brands_edit, api_brands_list, api_brands_search,
    api_products_add, api_products_delete, api_products_edit, api_products_list,
    api_products_search,
};
use marque_catalog::routes::brands::{
    add_brand, confirm_delete_brand, delete_brand, edit_brand, show_add_brand, show_brands,
    show_edit_brand, view_brand,
};
use marque_catalog::routes::products::{
    add_product, confirm_delete_product, delete_product, edit_product, show_add_product,
    show_edit_product, show_products, view_product,
};
use marque_catalog::routes::show_index;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("catalog.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(show_index)
            .service(show_brands)
            .service(view_brand)
            .service(show_add_brand)
            .service(add_brand)
            .service(show_edit_brand)
            .service(edit_brand)
            .service(confirm_delete_brand)
            .service(delete_brand)
            .service(show_products)
            .service(view_product)
            .service(show_add_product)
            .service(add_product)
            .service(show_edit_product)
            .service(edit_product)
            .service(confirm_delete_product)
            .service(delete_product)
            .service(api_brands_list)
            .service(api_brands_search)
            .service(api_brands_add)
            .service(api_brands_edit)
            .service(api_brands_delete)
            .service(api_products_list)
            .service(api_products_search)
            .service(api_products_add)
            .service(api_products_edit)
            .service(api_products_delete)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
