use crate::{abstract_trait::cart::CartQueryRepositoryTrait, model::CartLine};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CartQueryRepository {
    db: ConnectionPool,
}

impl CartQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for CartQueryRepository {
    async fn find_lines(&self) -> Result<Vec<CartLine>, RepositoryError> {
        info!("🛒 Fetching cart lines");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

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
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart lines: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }
}
