//! Repository tests against a real Postgres.
//!
//! Enabled with the `test-postgres` feature. Two modes:
//! - `TEST_DATABASE_URL` set: a fresh database is created on that server per test
//! - otherwise: a throwaway container is started through testcontainers (requires docker)

#![cfg(feature = "test-postgres")]

use chrono::Utc;
use shared::errors::RepositoryError;
use sqlx::{
    Executor, PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::{
    str::FromStr,
    sync::atomic::{AtomicU32, Ordering},
};
use storefront::{
    domain::requests::CreateProductRecordRequest,
    model::Product,
    repository::{CartRepository, ProductRepository, ReceiptRepository},
};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;

static NEXT_DATABASE: AtomicU32 = AtomicU32::new(0);

/// Keeps the container alive for as long as the pool is in use.
struct PostgresHandle {
    pool: PgPool,
    _container: Option<ContainerAsync<Postgres>>,
}

impl PostgresHandle {
    fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    fn cart(&self) -> CartRepository {
        CartRepository::new(self.pool.clone())
    }

    fn receipts(&self) -> ReceiptRepository {
        ReceiptRepository::new(self.pool.clone())
    }
}

async fn setup_postgres() -> PostgresHandle {
    let (options, container) = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => {
            let admin = PgPool::connect(&url)
                .await
                .expect("connect to TEST_DATABASE_URL");
            let name = format!(
                "storefront_test_{}_{}_{}",
                std::process::id(),
                Utc::now().timestamp_micros(),
                NEXT_DATABASE.fetch_add(1, Ordering::SeqCst)
            );
            admin
                .execute(format!("CREATE DATABASE {name}").as_str())
                .await
                .expect("create test database");

            let options = PgConnectOptions::from_str(&url)
                .expect("parse TEST_DATABASE_URL")
                .database(&name);
            (options, None)
        }
        Err(_) => {
            let container = Postgres::default()
                .with_tag("18")
                .start()
                .await
                .expect("Failed to start Postgres container");
            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let options = PgConnectOptions::new()
                .host(&host.to_string())
                .port(port)
                .username("postgres")
                .password("postgres")
                .database("postgres");
            (options, Some(container))
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    PostgresHandle {
        pool,
        _container: container,
    }
}

async fn insert_product(handle: &PostgresHandle, name: &str, price: i64) -> Product {
    handle
        .products()
        .command
        .create_product(&CreateProductRecordRequest {
            name: name.to_string(),
            price,
            description: Some(format!("{name} description")),
            image: None,
        })
        .await
        .expect("insert product")
}

#[tokio::test]
async fn migrations_create_an_empty_catalog() {
    let pg = setup_postgres().await;

    assert_eq!(pg.products().command.count_products().await.unwrap(), 0);

    let hoodie = insert_product(&pg, "Vibe Hoodie", 4999).await;
    let found = pg
        .products()
        .query
        .find_by_id(hoodie.product_id)
        .await
        .unwrap()
        .expect("product exists");

    assert_eq!(found, hoodie);
    assert_eq!(found.description.as_deref(), Some("Vibe Hoodie description"));
    assert_eq!(pg.products().command.count_products().await.unwrap(), 1);
    assert!(pg.products().query.find_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn upsert_overwrites_the_line_of_the_same_product() {
    let pg = setup_postgres().await;
    let tee = insert_product(&pg, "Classic Tee", 1999).await;
    let cart = pg.cart();

    let first = cart.command.upsert_item(tee.product_id, 1).await.unwrap();
    let second = cart.command.upsert_item(tee.product_id, 4).await.unwrap();

    assert_eq!(first.cart_item_id, second.cart_item_id);
    assert_eq!(second.qty, 4);

    let lines = cart.query.find_lines().await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].qty, 4);
    assert_eq!(lines[0].product.name, "Classic Tee");
    assert_eq!(lines[0].product.price, 1999);
    assert_eq!(lines[0].line_total(), 4 * 1999);
}

#[tokio::test]
async fn upsert_of_unknown_product_is_a_foreign_key_violation() {
    let pg = setup_postgres().await;

    let err = pg.cart().command.upsert_item(4242, 1).await.unwrap_err();

    assert!(matches!(err, RepositoryError::ForeignKey(_)), "{err:?}");
}

#[tokio::test]
async fn delete_reports_whether_a_line_was_removed() {
    let pg = setup_postgres().await;
    let mug = insert_product(&pg, "Travel Mug", 1450).await;
    let cart = pg.cart();
    let item = cart.command.upsert_item(mug.product_id, 2).await.unwrap();

    assert!(cart.command.delete_item(item.cart_item_id).await.unwrap());
    assert!(!cart.command.delete_item(item.cart_item_id).await.unwrap());
    assert!(cart.query.find_lines().await.unwrap().is_empty());
}

#[tokio::test]
async fn checkout_snapshots_the_cart_and_clears_it() {
    let pg = setup_postgres().await;
    let jacket = insert_product(&pg, "Denim Jacket", 9999).await;
    let sleeve = insert_product(&pg, "Laptop Sleeve", 2999).await;
    let cart = pg.cart();
    cart.command.upsert_item(jacket.product_id, 1).await.unwrap();
    cart.command.upsert_item(sleeve.product_id, 3).await.unwrap();

    let cart_total: i64 = cart
        .query
        .find_lines()
        .await
        .unwrap()
        .iter()
        .map(|line| line.line_total())
        .sum();

    let receipts = pg.receipts();
    let receipt = receipts
        .command
        .create_from_cart(" Ada Lovelace ", "ada@example.com")
        .await
        .unwrap()
        .expect("cart was not empty");

    assert_eq!(receipt.total, cart_total);
    assert_eq!(receipt.total, 9999 + 3 * 2999);
    assert_eq!(receipt.name, "Ada Lovelace");
    assert!(receipt.created_at.is_some());
    assert!(cart.query.find_lines().await.unwrap().is_empty());

    let items = receipts
        .query
        .find_lines(&[receipt.receipt_id])
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].product.name, "Denim Jacket");
    assert_eq!(items[0].price_at_checkout, 9999);
    assert_eq!(items[1].product.name, "Laptop Sleeve");
    assert_eq!(items[1].qty, 3);
    assert!(items.iter().all(|i| i.receipt_id == receipt.receipt_id));

    let stored = receipts
        .query
        .find_by_id(receipt.receipt_id)
        .await
        .unwrap()
        .expect("receipt stored");
    assert_eq!(stored.total, receipt.total);
}

#[tokio::test]
async fn checkout_of_an_empty_cart_writes_nothing() {
    let pg = setup_postgres().await;
    let receipts = pg.receipts();

    let outcome = receipts
        .command
        .create_from_cart("Ada", "ada@example.com")
        .await
        .unwrap();

    assert!(outcome.is_none());
    assert!(receipts.query.find_all().await.unwrap().is_empty());
    assert!(receipts.query.find_lines(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn receipt_prices_survive_catalog_price_changes() {
    let pg = setup_postgres().await;
    let earbuds = insert_product(&pg, "Wireless Earbuds", 5999).await;
    pg.cart()
        .command
        .upsert_item(earbuds.product_id, 2)
        .await
        .unwrap();

    let receipts = pg.receipts();
    let receipt = receipts
        .command
        .create_from_cart("Ada", "ada@example.com")
        .await
        .unwrap()
        .expect("cart was not empty");

    sqlx::query("UPDATE products SET price = $1 WHERE product_id = $2")
        .bind(100_i64)
        .bind(earbuds.product_id)
        .execute(&pg.pool)
        .await
        .unwrap();

    let items = receipts
        .query
        .find_lines(&[receipt.receipt_id])
        .await
        .unwrap();
    assert_eq!(items[0].price_at_checkout, 5999);
    assert_eq!(items[0].product.price, 100);
    assert_eq!(receipt.total, 2 * 5999);
}

#[tokio::test]
async fn receipts_are_listed_newest_first() {
    let pg = setup_postgres().await;
    let pen = insert_product(&pg, "Stylus Pen", 2500).await;
    let receipts = pg.receipts();

    let mut ids = Vec::new();
    for qty in [1, 2, 3] {
        pg.cart().command.upsert_item(pen.product_id, qty).await.unwrap();
        let receipt = receipts
            .command
            .create_from_cart("Ada", "ada@example.com")
            .await
            .unwrap()
            .expect("cart was not empty");
        ids.push(receipt.receipt_id);
    }

    let listed: Vec<i32> = receipts
        .query
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|r| r.receipt_id)
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);

    let items = receipts.query.find_lines(&listed).await.unwrap();
    assert_eq!(items.len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn quantity_changed_during_checkout_is_never_lost() {
    let pg = setup_postgres().await;
    let hoodie = insert_product(&pg, "Vibe Hoodie", 4999).await;
    let cart = pg.cart();
    let receipts = pg.receipts();

    for _ in 0..20 {
        cart.command.upsert_item(hoodie.product_id, 1).await.unwrap();

        let checkout = {
            let command = receipts.command.clone();
            tokio::spawn(async move { command.create_from_cart("Ada", "ada@example.com").await })
        };
        let bump = {
            let command = cart.command.clone();
            let product_id = hoodie.product_id;
            tokio::spawn(async move { command.upsert_item(product_id, 5).await })
        };

        let receipt = checkout
            .await
            .unwrap()
            .unwrap()
            .expect("cart held a line");
        bump.await.unwrap().unwrap();

        let bought: i32 = receipts
            .query
            .find_lines(&[receipt.receipt_id])
            .await
            .unwrap()
            .iter()
            .map(|line| line.qty)
            .sum();
        let left = cart.query.find_lines().await.unwrap();
        let still_in_cart: i32 = left.iter().map(|line| line.qty).sum();

        // Either the bump landed before the snapshot, or it survives in the cart.
        assert!(
            (bought == 5 && left.is_empty()) || (bought == 1 && still_in_cart == 5),
            "bought {bought}, left in cart {still_in_cart}"
        );

        for line in left {
            cart.command.delete_item(line.cart_item_id).await.unwrap();
        }
    }
}
