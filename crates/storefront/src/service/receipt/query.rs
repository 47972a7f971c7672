use crate::{
    abstract_trait::receipt::{DynReceiptQueryRepository, ReceiptQueryServiceTrait},
    domain::response::ReceiptResponse,
    model::ReceiptLine,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use std::collections::HashMap;
use tracing::{error, info};

#[derive(Clone)]
pub struct ReceiptQueryService {
    query: DynReceiptQueryRepository,
    tracer: ServiceTracer,
}

impl ReceiptQueryService {
    pub fn new(query: DynReceiptQueryRepository, registry: &mut Registry) -> Self {
        let tracer =
            ServiceTracer::new("receipt-query-service", "receipt_query_service", registry);

        Self { query, tracer }
    }
}

#[async_trait]
impl ReceiptQueryServiceTrait for ReceiptQueryService {
    async fn find_all(&self) -> Result<Vec<ReceiptResponse>, ServiceError> {
        info!("🧾 Listing receipts");

        let tracing_ctx = self.tracer.start_tracing(
            "find_all_receipts",
            vec![
                KeyValue::new("component", "receipt"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let receipts = match self.query.find_all().await {
            Ok(receipts) => receipts,
            Err(err) => {
                error!("❌ Failed to fetch receipts: {err:?}");
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    "Failed to fetch receipts",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        let ids: Vec<i32> = receipts.iter().map(|r| r.receipt_id).collect();

        let lines = match self.query.find_lines(&ids).await {
            Ok(lines) => lines,
            Err(err) => {
                error!("❌ Failed to fetch receipt items: {err:?}");
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    "Failed to fetch receipt items",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        let mut grouped: HashMap<i32, Vec<ReceiptLine>> = HashMap::new();
        for line in lines {
            grouped.entry(line.receipt_id).or_default().push(line);
        }

        let response = receipts
            .into_iter()
            .map(|receipt| {
                let lines = grouped.remove(&receipt.receipt_id).unwrap_or_default();
                ReceiptResponse::from_parts(receipt, lines)
            })
            .collect::<Vec<_>>();

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            Method::Get,
            "Receipts retrieved successfully",
        );

        Ok(response)
    }

    async fn find_by_id(&self, id: i32) -> Result<ReceiptResponse, ServiceError> {
        info!("🧾 Fetching receipt id={id}");

        let tracing_ctx = self.tracer.start_tracing(
            "find_receipt_by_id",
            vec![
                KeyValue::new("component", "receipt"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("receipt.id", id as i64),
            ],
        );

        let receipt = match self.query.find_by_id(id).await {
            Ok(Some(receipt)) => receipt,
            Ok(None) => {
                info!("ℹ️ Receipt {id} not found");
                self.tracer
                    .complete_tracing_error(&tracing_ctx, Method::Get, "Receipt not found");
                return Err(ServiceError::NotFound("Receipt not found".into()));
            }
            Err(err) => {
                error!("❌ Failed to fetch receipt {id}: {err:?}");
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    "Failed to fetch receipt",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        match self.query.find_lines(&[receipt.receipt_id]).await {
            Ok(lines) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    Method::Get,
                    "Receipt retrieved successfully",
                );
                Ok(ReceiptResponse::from_parts(receipt, lines))
            }
            Err(err) => {
                error!("❌ Failed to fetch items of receipt {id}: {err:?}");
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    Method::Get,
                    "Failed to fetch receipt items",
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}
