#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::sync::Arc;
use storefront::{
    abstract_trait::{
        cart::{CartCommandRepositoryTrait, CartQueryRepositoryTrait},
        product::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        receipt::{ReceiptCommandRepositoryTrait, ReceiptQueryRepositoryTrait},
    },
    di::DependenciesInjectDeps,
    domain::requests::{CreateProductRecordRequest, CreateReceiptRecordRequest},
    model::{CartItem, CartLine, Product, Receipt, ReceiptLine},
    repository::{CartRepository, ProductRepository, ReceiptRepository},
    state::AppState,
};
use tokio::sync::Mutex;

struct StoredReceiptItem {
    receipt_item_id: i32,
    receipt_id: i32,
    product_id: i32,
    qty: i32,
    price: i64,
}

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    cart: Vec<CartItem>,
    receipts: Vec<Receipt>,
    receipt_items: Vec<StoredReceiptItem>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn product(&self, id: i32) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| p.product_id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::ForeignKey(format!("product {id}")))
    }
}

/// Postgres stand-in backing every repository trait with one shared set of tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub async fn add_product(&self, name: &str, price: i64) -> Product {
        self.create_product(&CreateProductRecordRequest {
            name: name.to_string(),
            price,
            description: None,
            image: None,
        })
        .await
        .expect("insert product")
    }

    pub async fn set_price(&self, product_id: i32, price: i64) {
        let mut tables = self.tables.lock().await;
        if let Some(product) = tables.products.iter_mut().find(|p| p.product_id == product_id) {
            product.price = price;
        }
    }

    pub async fn cart_len(&self) -> usize {
        self.tables.lock().await.cart.len()
    }

    pub fn deps(&self) -> DependenciesInjectDeps {
        let store = Arc::new(self.clone());
        DependenciesInjectDeps {
            product: ProductRepository {
                query: store.clone(),
                command: store.clone(),
            },
            cart: CartRepository {
                query: store.clone(),
                command: store.clone(),
            },
            receipt: ReceiptRepository {
                query: store.clone(),
                command: store,
            },
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::from_repositories(self.deps())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.tables.lock().await.products.clone();
        products.sort_by_key(|p| p.product_id);
        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.products.iter().find(|p| p.product_id == id).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryStore {
    async fn count_products(&self) -> Result<i64, RepositoryError> {
        Ok(self.tables.lock().await.products.len() as i64)
    }

    async fn create_product(
        &self,
        req: &CreateProductRecordRequest,
    ) -> Result<Product, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let now = Utc::now().naive_utc();
        let product = Product {
            product_id: tables.next_id(),
            name: req.name.clone(),
            price: req.price,
            description: req.description.clone(),
            image: req.image.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        };
        tables.products.push(product.clone());
        Ok(product)
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for InMemoryStore {
    async fn find_lines(&self) -> Result<Vec<CartLine>, RepositoryError> {
        let tables = self.tables.lock().await;
        tables
            .cart
            .iter()
            .map(|item| {
                Ok(CartLine {
                    cart_item_id: item.cart_item_id,
                    qty: item.qty,
                    product: tables.product(item.product_id)?,
                })
            })
            .collect()
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for InMemoryStore {
    async fn upsert_item(&self, product_id: i32, qty: i32) -> Result<CartItem, RepositoryError> {
        let mut tables = self.tables.lock().await;
        tables.product(product_id)?;
        let now = Utc::now().naive_utc();

        if let Some(item) = tables.cart.iter_mut().find(|i| i.product_id == product_id) {
            item.qty = qty;
            item.updated_at = Some(now);
            return Ok(item.clone());
        }

        let item = CartItem {
            cart_item_id: tables.next_id(),
            product_id,
            qty,
            created_at: Some(now),
            updated_at: Some(now),
        };
        tables.cart.push(item.clone());
        Ok(item)
    }

    async fn delete_item(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let before = tables.cart.len();
        tables.cart.retain(|item| item.cart_item_id != id);
        Ok(tables.cart.len() != before)
    }
}

#[async_trait]
impl ReceiptQueryRepositoryTrait for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Receipt>, RepositoryError> {
        let mut receipts = self.tables.lock().await.receipts.clone();
        receipts.sort_by(|a, b| b.receipt_id.cmp(&a.receipt_id));
        Ok(receipts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Receipt>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.receipts.iter().find(|r| r.receipt_id == id).cloned())
    }

    async fn find_lines(&self, receipt_ids: &[i32]) -> Result<Vec<ReceiptLine>, RepositoryError> {
        let tables = self.tables.lock().await;
        tables
            .receipt_items
            .iter()
            .filter(|item| receipt_ids.contains(&item.receipt_id))
            .map(|item| {
                Ok(ReceiptLine {
                    receipt_item_id: item.receipt_item_id,
                    receipt_id: item.receipt_id,
                    qty: item.qty,
                    price_at_checkout: item.price,
                    product: tables.product(item.product_id)?,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ReceiptCommandRepositoryTrait for InMemoryStore {
    async fn create_from_cart(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Option<Receipt>, RepositoryError> {
        let mut tables = self.tables.lock().await;

        let lines = tables
            .cart
            .iter()
            .map(|item| {
                Ok(CartLine {
                    cart_item_id: item.cart_item_id,
                    qty: item.qty,
                    product: tables.product(item.product_id)?,
                })
            })
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        if lines.is_empty() {
            return Ok(None);
        }

        let req = CreateReceiptRecordRequest::from_cart(name, email, &lines);

        let receipt = Receipt {
            receipt_id: tables.next_id(),
            name: req.name.clone(),
            email: req.email.clone(),
            total: req.total,
            created_at: Some(Utc::now().naive_utc()),
        };

        for item in &req.items {
            let receipt_item_id = tables.next_id();
            tables.receipt_items.push(StoredReceiptItem {
                receipt_item_id,
                receipt_id: receipt.receipt_id,
                product_id: item.product_id,
                qty: item.qty,
                price: item.price,
            });
        }

        tables
            .cart
            .retain(|item| !req.cart_item_ids.contains(&item.cart_item_id));
        tables.receipts.push(receipt.clone());

        Ok(Some(receipt))
    }
}
