use crate::{
    abstract_trait::receipt::ReceiptQueryRepositoryTrait,
    model::{Receipt as ReceiptModel, ReceiptLine},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ReceiptQueryRepository {
    db: ConnectionPool,
}

impl ReceiptQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReceiptQueryRepositoryTrait for ReceiptQueryRepository {
    async fn find_all(&self) -> Result<Vec<ReceiptModel>, RepositoryError> {
        info!("🧾 Fetching all receipts");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let receipts = sqlx::query_as::<_, ReceiptModel>(
            r#"
            SELECT receipt_id, name, email, total, created_at
            FROM receipts
            ORDER BY created_at DESC, receipt_id DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch receipts: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(receipts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ReceiptModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let receipt = sqlx::query_as::<_, ReceiptModel>(
            r#"
            SELECT receipt_id, name, email, total, created_at
            FROM receipts
            WHERE receipt_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch receipt {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(receipt)
    }

    async fn find_lines(&self, receipt_ids: &[i32]) -> Result<Vec<ReceiptLine>, RepositoryError> {
        if receipt_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, ReceiptLine>(
            r#"
            SELECT
                ri.receipt_item_id,
                ri.receipt_id,
                ri.qty,
                ri.price AS price_at_checkout,
                p.product_id,
                p.name,
                p.price,
                p.description,
                p.image,
                p.created_at,
                p.updated_at
            FROM receipt_items ri
            JOIN products p ON p.product_id = ri.product_id
            WHERE ri.receipt_id = ANY($1)
            ORDER BY ri.receipt_item_id
            "#,
        )
        .bind(receipt_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch receipt items: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }
}
