//! Unit tests for CatalogRepository.
//!
//! Covers type/name searches, dish resolution, and score-ordered pairing retrieval.

use crate::catalog_repo::CatalogRepository;
use crate::models::{Dish, DishCategory, Wine, WineType};

async fn temp_repo() -> (tempfile::TempDir, CatalogRepository) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("catalog.db");
    let repo = CatalogRepository::new(db_path.to_str().unwrap())
        .await
        .expect("Failed to create repository");
    (dir, repo)
}

#[tokio::test]
async fn test_add_and_list_wines() {
    let (_dir, repo) = temp_repo().await;

    let wine = Wine::new("Merlot Reserve", WineType::Red, 4, 3, 2018)
        .unwrap()
        .with_region("Bordeaux");
    let id = repo.add_wine(&wine).await.expect("Failed to add wine");
    assert!(id > 0);

    let wines = repo.list_wines().await.expect("Failed to list wines");
    assert_eq!(wines.len(), 1);
    assert_eq!(wines[0].name, "Merlot Reserve");
    assert_eq!(wines[0].wine_type, WineType::Red);
    assert_eq!(wines[0].region.as_deref(), Some("Bordeaux"));
}

#[tokio::test]
async fn test_find_wines_by_type() {
    let (_dir, repo) = temp_repo().await;

    repo.add_wine(&Wine::new("Merlot", WineType::Red, 4, 3, 2018).unwrap())
        .await
        .unwrap();
    repo.add_wine(&Wine::new("Riesling", WineType::White, 1, 5, 2020).unwrap())
        .await
        .unwrap();

    let reds = repo.find_wines_by_type(WineType::Red).await.unwrap();
    assert_eq!(reds.len(), 1);
    assert_eq!(reds[0].name, "Merlot");

    let roses = repo.find_wines_by_type(WineType::Rose).await.unwrap();
    assert!(roses.is_empty());
}

#[tokio::test]
async fn test_find_wines_by_name_substring() {
    let (_dir, repo) = temp_repo().await;

    repo.add_wine(&Wine::new("Merlot Reserve", WineType::Red, 4, 3, 2018).unwrap())
        .await
        .unwrap();
    repo.add_wine(&Wine::new("Pinot Noir", WineType::Red, 2, 4, 2019).unwrap())
        .await
        .unwrap();

    let found = repo.find_wines_by_name("merlot").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Merlot Reserve");

    let none = repo.find_wines_by_name("Chardonnay").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_get_dish_by_id() {
    let (_dir, repo) = temp_repo().await;

    let dish = Dish::new("Duck", DishCategory::Meat, 4, 5, 90)
        .unwrap()
        .with_ingredients("duck, orange, thyme");
    let id = repo.add_dish(&dish).await.unwrap();

    let found = repo.get_dish(id).await.unwrap();
    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.name, "Duck");
    assert_eq!(found.category, DishCategory::Meat);

    let missing = repo.get_dish(9999).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_pairings_ordered_by_score_desc() {
    let (_dir, repo) = temp_repo().await;

    let wine_id = repo
        .add_wine(&Wine::new("Merlot Reserve", WineType::Red, 4, 3, 2018).unwrap())
        .await
        .unwrap();
    let duck_id = repo
        .add_dish(&Dish::new("Duck", DishCategory::Meat, 4, 5, 90).unwrap())
        .await
        .unwrap();
    let cake_id = repo
        .add_dish(&Dish::new("Cheesecake", DishCategory::Dessert, 5, 2, 60).unwrap())
        .await
        .unwrap();

    repo.add_pairing(wine_id, cake_id, 5).await.unwrap();
    repo.add_pairing(wine_id, duck_id, 9).await.unwrap();

    // Substring query must hit "Merlot Reserve" and rank Duck (9) above Cheesecake (5).
    let hits = repo.find_pairings_for_wine("Merlot").await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].dish_id, duck_id);
    assert_eq!(hits[0].score, 9);
    assert_eq!(hits[1].dish_id, cake_id);
    assert_eq!(hits[1].score, 5);
}

#[tokio::test]
async fn test_pairings_empty_for_unknown_wine() {
    let (_dir, repo) = temp_repo().await;
    let hits = repo.find_pairings_for_wine("Nebbiolo").await.unwrap();
    assert!(hits.is_empty());
}
