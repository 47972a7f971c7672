use crate::{
    abstract_trait::receipt::ReceiptCommandRepositoryTrait,
    domain::requests::CreateReceiptRecordRequest,
    model::{CartLine, Receipt as ReceiptModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ReceiptCommandRepository {
    db: ConnectionPool,
}

impl ReceiptCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReceiptCommandRepositoryTrait for ReceiptCommandRepository {
    async fn create_from_cart(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Option<ReceiptModel>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to open checkout transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        // Row locks make concurrent upserts of these lines wait for the commit.
        let lines = sqlx::query_as::<_, CartLine>(
            r#"
            SELECT
                c.cart_item_id,
                c.qty,
                p.product_id,
                p.name,
                p.price,
                p.description,
                p.image,
                p.created_at,
                p.updated_at
            FROM cart_items c
            JOIN products p ON p.product_id = c.product_id
            ORDER BY c.cart_item_id
            FOR UPDATE OF c
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to lock cart lines for checkout: {:?}", e);
            RepositoryError::from(e)
        })?;

        if lines.is_empty() {
            info!("ℹ️ Nothing to check out, cart is empty");
            return Ok(None);
        }

        let req = CreateReceiptRecordRequest::from_cart(name, email, &lines);

        let receipt = sqlx::query_as::<_, ReceiptModel>(
            r#"
            INSERT INTO receipts (name, email, total, created_at)
            VALUES ($1, $2, $3, current_timestamp)
            RETURNING receipt_id, name, email, total, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(req.total)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create receipt for {}: {:?}", req.email, err);
            RepositoryError::from_constraint(err)
        })?;

        for item in &req.items {
            sqlx::query(
                r#"
                INSERT INTO receipt_items (receipt_id, product_id, qty, price)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(receipt.receipt_id)
            .bind(item.product_id)
            .bind(item.qty)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to add product {} to receipt {}: {:?}",
                    item.product_id, receipt.receipt_id, err
                );
                RepositoryError::from_constraint(err)
            })?;
        }

        let cleared = sqlx::query(r#"DELETE FROM cart_items WHERE cart_item_id = ANY($1)"#)
            .bind(&req.cart_item_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to clear cart after checkout: {:?}", e);
                RepositoryError::from(e)
            })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit checkout: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Receipt {} created with {} items, {} cart lines cleared",
            receipt.receipt_id,
            req.items.len(),
            cleared.rows_affected()
        );
        Ok(Some(receipt))
    }
}
