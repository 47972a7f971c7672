use crate::domain::requests::CreateProductRecordRequest;

const DEFAULT_CATALOG: [(&str, i64, &str); 8] = [
    ("Vibe Hoodie", 4999, "Cozy hoodie"),
    ("Retro Sneakers", 7999, "Comfort + style"),
    ("Wireless Earbuds", 5999, "Great sound"),
    ("Classic Tee", 1999, "Everyday tee"),
    ("Denim Jacket", 9999, "Timeless jacket"),
    ("Stylus Pen", 2500, "For creatives"),
    ("Travel Mug", 1450, "Keeps drinks hot"),
    ("Laptop Sleeve", 2999, "Protect your laptop"),
];

/// Products inserted into an empty catalog at startup. Prices are in cents.
pub fn default_catalog() -> Vec<CreateProductRecordRequest> {
    DEFAULT_CATALOG
        .iter()
        .map(|(name, price, description)| CreateProductRecordRequest {
            name: name.to_string(),
            price: *price,
            description: Some(description.to_string()),
            image: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_priced_products() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.iter().all(|p| p.price > 0));
        assert_eq!(catalog[0].name, "Vibe Hoodie");
        assert_eq!(catalog[6].price, 1450);
    }
}
