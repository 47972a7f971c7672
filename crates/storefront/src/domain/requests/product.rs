#[derive(Debug, Clone)]
pub struct CreateProductRecordRequest {
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub image: Option<String>,
}
