use crate::{abstract_trait::cart::CartCommandRepositoryTrait, model::CartItem as CartItemModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CartCommandRepository {
    db: ConnectionPool,
}

impl CartCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for CartCommandRepository {
    async fn upsert_item(
        &self,
        product_id: i32,
        qty: i32,
    ) -> Result<CartItemModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItemModel>(
            r#"
            INSERT INTO cart_items (product_id, qty, created_at, updated_at)
            VALUES ($1, $2, current_timestamp, current_timestamp)
            ON CONFLICT (product_id) DO UPDATE
            SET qty = EXCLUDED.qty,
                updated_at = current_timestamp
            RETURNING cart_item_id, product_id, qty, created_at, updated_at
            "#,
        )
        .bind(product_id)
        .bind(qty)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to upsert cart line for product {}: {:?}",
                product_id, err
            );
            RepositoryError::from_constraint(err)
        })?;

        info!(
            "✅ Cart line {} now holds product {} x{}",
            item.cart_item_id, item.product_id, item.qty
        );
        Ok(item)
    }

    async fn delete_item(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(r#"DELETE FROM cart_items WHERE cart_item_id = $1"#)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete cart line {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        let removed = result.rows_affected() > 0;
        info!("🗑️ Cart line {} removed: {}", id, removed);
        Ok(removed)
    }
}
