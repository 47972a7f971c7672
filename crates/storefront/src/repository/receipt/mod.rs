mod command;
mod query;

use self::command::ReceiptCommandRepository;
use self::query::ReceiptQueryRepository;

use crate::abstract_trait::receipt::{DynReceiptCommandRepository, DynReceiptQueryRepository};
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReceiptRepository {
    pub query: DynReceiptQueryRepository,
    pub command: DynReceiptCommandRepository,
}

impl ReceiptRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(ReceiptQueryRepository::new(pool.clone())) as DynReceiptQueryRepository;

        let command =
            Arc::new(ReceiptCommandRepository::new(pool)) as DynReceiptCommandRepository;

        Self { query, command }
    }
}
