use chrono::NaiveDate;

use marque_catalog::domain::brand::NewBrand;
use marque_catalog::forms::brands::ApiBrandPayload;
use marque_catalog::forms::products::ApiProductPayload;
use marque_catalog::repository::{BrandReader, BrandWriter, DieselRepository, ProductReader};
use marque_catalog::services::brands::{self, BrandsQuery};
use marque_catalog::services::products;
use marque_catalog::services::ServiceError;

mod common;

fn brand_payload(name: &str) -> ApiBrandPayload {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "logo": "http://x/a.png",
        "creation_date": "2020-01-01",
        "nationality": "USA",
        "slogan": "Go go",
        "website": "http://acme.test"
    }))
    .expect("payload should deserialize")
}

fn product_payload(name: &str, brand: i32) -> ApiProductPayload {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "creation_date": "2022-03-03",
        "price": 9.99,
        "description": "Un widget robuste",
        "brand": brand
    }))
    .expect("payload should deserialize")
}

#[test]
fn upsert_brand_is_idempotent_on_existing_id() {
    let test_db = common::TestDb::new("services_upsert_brand_idempotent.db");
    let repo = DieselRepository::new(test_db.pool());

    let brand = brands::create_brand_api(&repo, brand_payload("Acme Corp")).expect("create");

    let (first, created_first) =
        brands::upsert_brand_api(&repo, brand.id, brand_payload("Acme Corp")).expect("upsert");
    let (second, created_second) =
        brands::upsert_brand_api(&repo, brand.id, brand_payload("Acme Corp")).expect("upsert");

    assert!(!created_first);
    assert!(!created_second);
    assert_eq!(first.id, brand.id);
    assert_eq!(second.id, brand.id);
    assert_eq!(second.slug, "acme-corp");

    let all = repo
        .list_brands(Default::default())
        .expect("list brands");
    assert_eq!(all.len(), 1);
}

#[test]
fn upsert_brand_creates_on_missing_id() {
    let test_db = common::TestDb::new("services_upsert_brand_creates.db");
    let repo = DieselRepository::new(test_db.pool());

    let (brand, created) =
        brands::upsert_brand_api(&repo, 777, brand_payload("Brand New")).expect("upsert");

    assert!(created);
    assert_eq!(brand.slug, "brand-new");
    assert!(
        repo.get_brand_by_id(brand.id)
            .expect("get brand")
            .is_some()
    );
}

#[test]
fn product_api_rejects_missing_brand_reference() {
    let test_db = common::TestDb::new("services_product_missing_brand.db");
    let repo = DieselRepository::new(test_db.pool());

    let result = products::create_product_api(&repo, product_payload("Widget", 4242));
    assert!(matches!(result, Err(ServiceError::BrandMissing)));

    let all = repo
        .list_products(Default::default())
        .expect("list products");
    assert!(all.is_empty());
}

#[test]
fn product_json_projects_cycles_to_ids() {
    let test_db = common::TestDb::new("services_product_json_projection.db");
    let repo = DieselRepository::new(test_db.pool());

    let brand = repo
        .create_brand(&NewBrand::new(
            "Acme Corp",
            NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
            "USA",
        ))
        .expect("create brand");
    let product =
        products::create_product_api(&repo, product_payload("Widget", brand.id)).expect("create");

    let json = products::find_product_json(&repo, product.id).expect("project product");
    assert_eq!(json.brand.id, brand.id);
    assert_eq!(json.brand.products, vec![product.id]);

    let brand_json = brands::find_brand_json(&repo, brand.id).expect("project brand");
    assert_eq!(brand_json.products.len(), 1);
    assert_eq!(brand_json.products[0].brand, brand.id);
}

#[test]
fn brand_search_matches_nationality_ordered_by_name() {
    let test_db = common::TestDb::new("services_brand_search_nationality.db");
    let repo = DieselRepository::new(test_db.pool());

    brands::create_brand_api(&repo, brand_payload("Zebra Goods")).expect("create");
    brands::create_brand_api(&repo, brand_payload("Acme Corp")).expect("create");

    let mut french = brand_payload("Bobine");
    french.nationality = "France".to_string();
    brands::create_brand_api(&repo, french).expect("create");

    let data = brands::load_brands(
        &repo,
        BrandsQuery {
            search_category: Some(1),
            search_text: Some("USA".to_string()),
        },
    )
    .expect("load brands");

    assert_eq!(data.brands.len(), 2);
    assert_eq!(data.brands[0].name, "Acme Corp");
    assert_eq!(data.brands[1].name, "Zebra Goods");
}

#[test]
fn blank_search_text_returns_everything() {
    let test_db = common::TestDb::new("services_blank_search_text.db");
    let repo = DieselRepository::new(test_db.pool());

    brands::create_brand_api(&repo, brand_payload("Acme Corp")).expect("create");
    brands::create_brand_api(&repo, brand_payload("Zebra Goods")).expect("create");

    let data = brands::load_brands(
        &repo,
        BrandsQuery {
            search_category: Some(0),
            search_text: Some("   ".to_string()),
        },
    )
    .expect("load brands");

    assert_eq!(data.brands.len(), 2);
}
