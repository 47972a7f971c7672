mod common;

use common::InMemoryStore;
use proptest::prelude::*;
use storefront::{
    domain::{
        requests::{AddToCartRequest, CheckoutRequest},
        response::CartResponse,
    },
    model::{CartLine, Product},
};

/// Unit price in cents and quantity for each distinct product in a cart.
fn cart_strategy() -> impl Strategy<Value = Vec<(i64, i32)>> {
    proptest::collection::vec((1i64..100_000, 1i32..50), 1..8)
}

fn line(cart_item_id: i32, price: i64, qty: i32) -> CartLine {
    CartLine {
        cart_item_id,
        qty,
        product: Product {
            product_id: cart_item_id,
            name: format!("product-{cart_item_id}"),
            price,
            description: None,
            image: None,
            created_at: None,
            updated_at: None,
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cart_total_is_the_sum_of_its_lines(cart in cart_strategy()) {
        let lines: Vec<CartLine> = cart
            .iter()
            .enumerate()
            .map(|(i, (price, qty))| line(i as i32 + 1, *price, *qty))
            .collect();
        let expected: i64 = cart.iter().map(|(price, qty)| price * i64::from(*qty)).sum();

        let view = CartResponse::from(lines);

        prop_assert_eq!(view.items.len(), cart.len());
        prop_assert_eq!(view.total, expected);
        prop_assert_eq!(view.total, view.items.iter().map(|item| item.line).sum::<i64>());
    }

    #[test]
    fn checkout_charges_exactly_the_cart_total(cart in cart_strategy()) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build runtime");

        let (cart_total, receipt, left) = runtime.block_on(async {
            let store = InMemoryStore::default();
            let state = store.app_state();

            for (i, (price, qty)) in cart.iter().enumerate() {
                let product = store.add_product(&format!("product-{i}"), *price).await;
                state
                    .di_container
                    .cart_command
                    .upsert_item(&AddToCartRequest { product_id: product.product_id, qty: *qty })
                    .await
                    .expect("add to cart");
            }

            let cart_total = state.di_container.cart_query.get_cart().await.expect("cart").total;
            let receipt = state
                .di_container
                .checkout
                .checkout(&CheckoutRequest {
                    name: "Ada Lovelace".into(),
                    email: "ada@example.com".into(),
                })
                .await
                .expect("checkout");

            (cart_total, receipt, store.cart_len().await)
        });

        prop_assert_eq!(receipt.total, cart_total);
        prop_assert_eq!(receipt.items.len(), cart.len());
        prop_assert_eq!(
            receipt.total,
            receipt.items.iter().map(|item| item.price * i64::from(item.qty)).sum::<i64>()
        );
        prop_assert_eq!(left, 0);
    }
}
