mod common;

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

use shop_api::domain::entities::NewProduct;
use shop_api::domain::repositories::{CategoryRepository, ProductRepository};
use shop_api::infrastructure::persistence::{PgCategoryRepository, PgProductRepository};

#[sqlx::test]
async fn test_category_create_and_list_ordered_by_name(pool: PgPool) {
    let repo = PgCategoryRepository::new(Arc::new(pool));

    repo.create("Games").await.unwrap();
    repo.create("Books").await.unwrap();

    let all = repo.list().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Books");
    assert_eq!(all[1].name, "Games");
}

#[sqlx::test]
async fn test_product_create_and_find(pool: PgPool) {
    let category_id = common::create_test_category(&pool, "Books").await;
    let repo = PgProductRepository::new(Arc::new(pool));

    let created = repo
        .create(NewProduct {
            name: "Novel".to_string(),
            price: Decimal::new(1299, 2),
            category_id,
        })
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found.name, "Novel");
    assert_eq!(found.price, Decimal::new(1299, 2));
    assert_eq!(found.category_id, category_id);
}

#[sqlx::test]
async fn test_product_list_pagination(pool: PgPool) {
    let category_id = common::create_test_category(&pool, "Books").await;
    for i in 0..3 {
        common::create_test_product(&pool, &format!("p{i}"), "1.00", category_id).await;
    }

    let repo = PgProductRepository::new(Arc::new(pool));

    let page = repo.list(1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "p1");

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_product_list_by_category(pool: PgPool) {
    let books = common::create_test_category(&pool, "Books").await;
    let games = common::create_test_category(&pool, "Games").await;
    common::create_test_product(&pool, "Novel", "12.99", books).await;
    common::create_test_product(&pool, "Chess", "30.00", games).await;

    let repo = PgProductRepository::new(Arc::new(pool));

    let in_books = repo.list_by_category(books).await.unwrap();

    assert_eq!(in_books.len(), 1);
    assert_eq!(in_books[0].name, "Novel");
}
