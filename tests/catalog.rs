use deals_catalog::domain::filter::FilterState;
use deals_catalog::domain::types::{CategorySlug, SortKey};
use deals_catalog::forms::catalog::{CatalogQueryForm, CatalogQueryPayload};
use deals_catalog::repository::{CategoryReader, CategoryWriter, DieselRepository, ProductWriter};
use deals_catalog::schema::products;
use deals_catalog::services::catalog::show_catalog;
use diesel::prelude::*;

mod common;

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool());

    repo.create_category(&common::new_category("hardware", None))
        .expect("should create hardware");
    let hardware = repo.list_categories().expect("should list")[0].id;
    repo.create_category(&common::new_category("placas-de-video", Some(hardware)))
        .expect("should create gpus");
    let gpus = repo.list_categories().expect("should list")[1].id;
    repo.create_category(&common::new_category("rtx", Some(gpus)))
        .expect("should create rtx");
    repo.create_category(&common::new_category("processadores", Some(hardware)))
        .expect("should create cpus");
    repo.create_category(&common::new_category("games", None))
        .expect("should create games");

    repo.create_products(&[
        common::new_product("Monitor 144hz", "hardware", 10, 5, "2024-01-01T00:00:00Z"),
        common::new_product("RTX 4070 Gaming", "placas-de-video", 90, 1, "2024-06-01T00:00:00Z"),
        common::new_product("RTX 4090", "rtx", 50, 10, "2024-03-01T00:00:00Z"),
        common::new_product("Ryzen 7", "processadores", 30, 2, "2024-02-01T00:00:00Z"),
        common::new_product("Elden Ring", "games", 70, 7, "2024-05-01T00:00:00Z"),
    ])
    .expect("should create products");

    repo
}

fn listed_titles(repo: &DieselRepository, filter: FilterState) -> Vec<String> {
    show_catalog(CatalogQueryPayload { filter }, repo)
        .expect("catalog should load")
        .products
        .into_iter()
        .map(|p| p.title)
        .collect()
}

#[test]
fn root_category_aggregates_every_level() {
    let test_db = common::TestDb::new();
    let repo = seeded_repo(&test_db);

    let filter = FilterState::default().category(CategorySlug::new("HARDWARE").expect("slug"));
    assert_eq!(
        listed_titles(&repo, filter),
        vec!["RTX 4070 Gaming", "RTX 4090", "Ryzen 7", "Monitor 144hz"]
    );
}

#[test]
fn subcategory_does_not_leak_siblings() {
    let test_db = common::TestDb::new();
    let repo = seeded_repo(&test_db);

    let filter = FilterState::default()
        .category(CategorySlug::new("placas-de-video").expect("slug"))
        .sort(Some(SortKey::Newest));
    assert_eq!(listed_titles(&repo, filter), vec!["RTX 4070 Gaming"]);
}

#[test]
fn query_form_drives_the_listing() {
    let test_db = common::TestDb::new();
    let repo = seeded_repo(&test_db);

    let payload = CatalogQueryForm {
        q: Some("rtx".into()),
        category: None,
        sort: Some("commented".into()),
    }
    .into_payload(SortKey::Hottest)
    .expect("valid form");

    let view = show_catalog(payload, &repo).expect("catalog should load");
    let titles: Vec<_> = view.products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["RTX 4090", "RTX 4070 Gaming"]);

    assert_eq!(view.categories.len(), 2);
    let hardware_children: Vec<_> = view.categories[0]
        .children
        .iter()
        .map(|c| c.slug.as_str())
        .collect();
    assert_eq!(hardware_children, vec!["placas-de-video", "processadores"]);
}

#[test]
fn view_serializes_to_json() {
    let test_db = common::TestDb::new();
    let repo = seeded_repo(&test_db);

    let view = show_catalog(
        CatalogQueryPayload {
            filter: FilterState::default().search("elden"),
        },
        &repo,
    )
    .expect("catalog should load");
    let json = serde_json::to_value(&view).expect("should serialize");

    assert_eq!(json["products"][0]["title"], "Elden Ring");
    assert_eq!(json["products"][0]["category"], "games");
    assert_eq!(json["categories"][0]["category"]["slug"], "hardware");
}

#[test]
fn stored_category_casing_and_spacing_do_not_affect_filtering() {
    let test_db = common::TestDb::new();
    let repo = seeded_repo(&test_db);
    let mut conn = test_db
        .pool()
        .get()
        .expect("should acquire DB connection for setup");

    diesel::insert_into(products::table)
        .values(&vec![
            (
                products::title.eq("Hollow Knight"),
                products::category.eq("  GAMES "),
                products::temperature.eq(5),
                products::created_at.eq("2024-04-01"),
            ),
            (
                products::title.eq("RX 7800 XT"),
                products::category.eq(" Placas-De-Video"),
                products::temperature.eq(20),
                products::created_at.eq("2024-04-02"),
            ),
        ])
        .execute(&mut conn)
        .expect("should insert raw rows");

    let games = FilterState::default().category(CategorySlug::new("games").expect("slug"));
    assert_eq!(listed_titles(&repo, games), vec!["Elden Ring", "Hollow Knight"]);

    let gpus = FilterState::default().category(CategorySlug::new("placas-de-video").expect("slug"));
    assert_eq!(listed_titles(&repo, gpus), vec!["RTX 4070 Gaming", "RX 7800 XT"]);

    let hardware = FilterState::default().category(CategorySlug::new("hardware").expect("slug"));
    assert!(listed_titles(&repo, hardware).contains(&"RX 7800 XT".to_string()));
}
