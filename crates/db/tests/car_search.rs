//! Filtered car search against a real database.
//!
//! Covers the optional equality filters and the exact-set category matching:
//! a car matches a category filter only when it carries every requested
//! category, with extra categories permitted.

use garage_core::types::{CarId, DbId};
use garage_db::models::car::{CarDraft, CarSearchFilter};
use garage_db::models::category::CategoryDraft;
use garage_db::models::make::MakeDraft;
use garage_db::paging::PageRequest;
use garage_db::repositories::{CarRepo, CategoryRepo, MakeRepo};
use sqlx::PgPool;

async fn insert_make(pool: &PgPool, name: &str) -> DbId {
    MakeRepo::insert(
        pool,
        &MakeDraft {
            id: None,
            name: Some(name.to_string()),
        },
    )
    .await
    .unwrap()
    .id
}

async fn insert_category(pool: &PgPool, name: &str) -> DbId {
    CategoryRepo::insert(
        pool,
        &CategoryDraft {
            id: None,
            name: Some(name.to_string()),
        },
    )
    .await
    .unwrap()
    .id
}

async fn insert_car(
    pool: &PgPool,
    make_id: DbId,
    year: i32,
    model: &str,
    category_ids: &[DbId],
) -> CarId {
    let mut tx = pool.begin().await.unwrap();
    let car = CarRepo::insert(
        &mut *tx,
        &CarDraft {
            id: None,
            make_id: Some(make_id),
            year: Some(year),
            model: Some(model.to_string()),
            category_ids: None,
        },
    )
    .await
    .unwrap();
    CarRepo::set_categories(&mut tx, car.id, category_ids).await.unwrap();
    tx.commit().await.unwrap();
    car.id
}

/// Toyota Corolla 2023 [Drop-top, Sedan], Toyota Corolla 2023 [Drop-top],
/// Toyota Camry 2022 [Sedan], Ford Focus 2023 [].
async fn seed_catalog(pool: &PgPool) -> (CarId, CarId, CarId, CarId) {
    let toyota = insert_make(pool, "Toyota").await;
    let ford = insert_make(pool, "Ford").await;
    let drop_top = insert_category(pool, "Drop-top").await;
    let sedan = insert_category(pool, "Sedan").await;

    let both = insert_car(pool, toyota, 2023, "Corolla", &[drop_top, sedan]).await;
    let drop_top_only = insert_car(pool, toyota, 2023, "Corolla", &[drop_top]).await;
    let camry = insert_car(pool, toyota, 2022, "Camry", &[sedan]).await;
    let focus = insert_car(pool, ford, 2023, "Focus", &[]).await;

    (both, drop_top_only, camry, focus)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_filters_returns_all_cars(pool: PgPool) {
    seed_catalog(&pool).await;

    let rows = CarRepo::search(&pool, &CarSearchFilter::default(), &PageRequest::unpaged())
        .await
        .unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(
        CarRepo::count_search(&pool, &CarSearchFilter::default()).await.unwrap(),
        4
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn equality_filters_combine(pool: PgPool) {
    let (both, drop_top_only, _, _) = seed_catalog(&pool).await;

    let filter = CarSearchFilter {
        make_name: Some("Toyota".to_string()),
        year: Some(2023),
        model: Some("Corolla".to_string()),
        ..CarSearchFilter::default()
    };
    let rows = CarRepo::search(&pool, &filter, &PageRequest::unpaged()).await.unwrap();
    let mut ids: Vec<CarId> = rows.iter().map(|r| r.id).collect();
    ids.sort();
    let mut expected = vec![both, drop_top_only];
    expected.sort();
    assert_eq!(ids, expected);
    assert!(rows.iter().all(|r| r.make_name == "Toyota"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn model_filter_is_exact_not_substring(pool: PgPool) {
    seed_catalog(&pool).await;

    let filter = CarSearchFilter {
        model: Some("Corol".to_string()),
        ..CarSearchFilter::default()
    };
    let rows = CarRepo::search(&pool, &filter, &PageRequest::unpaged()).await.unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_filter_requires_every_requested_category(pool: PgPool) {
    let (both, _, _, _) = seed_catalog(&pool).await;

    let filter = CarSearchFilter {
        make_name: Some("Toyota".to_string()),
        year: Some(2023),
        model: Some("Corolla".to_string()),
        ..CarSearchFilter::with_categories(vec!["Drop-top".to_string(), "Sedan".to_string()])
    };
    let rows = CarRepo::search(&pool, &filter, &PageRequest::unpaged()).await.unwrap();

    // The car with only Drop-top is excluded; the one carrying both matches.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, both);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn extra_categories_on_the_car_are_permitted(pool: PgPool) {
    let (both, drop_top_only, _, _) = seed_catalog(&pool).await;

    let filter = CarSearchFilter::with_categories(vec!["Drop-top".to_string()]);
    let rows = CarRepo::search(&pool, &filter, &PageRequest::unpaged()).await.unwrap();
    let mut ids: Vec<CarId> = rows.iter().map(|r| r.id).collect();
    ids.sort();
    let mut expected = vec![both, drop_top_only];
    expected.sort();
    assert_eq!(ids, expected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_names_without_expected_count_match_nothing(pool: PgPool) {
    seed_catalog(&pool).await;

    // A present name list with a NULL expected count can never satisfy the
    // count comparison; the filter is never-matching rather than ignored.
    let filter = CarSearchFilter {
        category_names: Some(vec!["Sedan".to_string()]),
        expected_category_count: None,
        ..CarSearchFilter::default()
    };
    let rows = CarRepo::search(&pool, &filter, &PageRequest::unpaged()).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(CarRepo::count_search(&pool, &filter).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_category_list_matches_every_car(pool: PgPool) {
    seed_catalog(&pool).await;

    let filter = CarSearchFilter::with_categories(Vec::new());
    assert_eq!(CarRepo::count_search(&pool, &filter).await.unwrap(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_pages_with_total_of_all_matches(pool: PgPool) {
    seed_catalog(&pool).await;

    let filter = CarSearchFilter {
        make_name: Some("Toyota".to_string()),
        ..CarSearchFilter::default()
    };
    let page = PageRequest::new(2, 0, &["year,desc".to_string()], CarRepo::SORT_COLUMNS).unwrap();
    let rows = CarRepo::search(&pool, &filter, &page).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.year == 2023));

    // Total reflects every match, not just the page.
    assert_eq!(CarRepo::count_search(&pool, &filter).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn batch_category_lookup_groups_by_car(pool: PgPool) {
    let (both, drop_top_only, _, focus) = seed_catalog(&pool).await;

    let rows = CarRepo::categories_for_cars(&pool, &[both, drop_top_only, focus])
        .await
        .unwrap();
    assert_eq!(rows.iter().filter(|r| r.car_id == both).count(), 2);
    assert_eq!(rows.iter().filter(|r| r.car_id == drop_top_only).count(), 1);
    assert_eq!(rows.iter().filter(|r| r.car_id == focus).count(), 0);
}
