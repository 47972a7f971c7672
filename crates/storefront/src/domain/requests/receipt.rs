use crate::model::CartLine;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateReceiptItemRecordRequest {
    pub product_id: i32,
    pub qty: i32,
    pub price: i64,
}

/// Everything needed to persist a checkout: the frozen receipt and the cart rows it consumes.
#[derive(Debug, Clone)]
pub struct CreateReceiptRecordRequest {
    pub name: String,
    pub email: String,
    pub total: i64,
    pub items: Vec<CreateReceiptItemRecordRequest>,
    pub cart_item_ids: Vec<i32>,
}

impl CreateReceiptRecordRequest {
    pub fn from_cart(name: &str, email: &str, lines: &[CartLine]) -> Self {
        let items = lines
            .iter()
            .map(|line| CreateReceiptItemRecordRequest {
                product_id: line.product.product_id,
                qty: line.qty,
                price: line.product.price,
            })
            .collect();

        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            total: lines.iter().map(CartLine::line_total).sum(),
            items,
            cart_item_ids: lines.iter().map(|line| line.cart_item_id).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn line(cart_item_id: i32, product_id: i32, price: i64, qty: i32) -> CartLine {
        CartLine {
            cart_item_id,
            qty,
            product: Product {
                product_id,
                name: "p".into(),
                price,
                description: None,
                image: None,
                created_at: None,
                updated_at: None,
            },
        }
    }

    #[test]
    fn snapshot_freezes_prices_and_remembers_consumed_lines() {
        let lines = [line(7, 1, 2500, 2), line(9, 3, 1999, 1)];
        let record = CreateReceiptRecordRequest::from_cart("  Ada ", " ada@example.com", &lines);

        assert_eq!(record.name, "Ada");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.total, 2 * 2500 + 1999);
        assert_eq!(record.cart_item_ids, vec![7, 9]);
        assert_eq!(
            record.items[0],
            CreateReceiptItemRecordRequest {
                product_id: 1,
                qty: 2,
                price: 2500,
            }
        );
    }
}
