use serde::{Deserialize, Serialize};

/// Garment categories the atelier produces. The wire form is the
/// lowercase name, which is also what the order items store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Kaftan,
    Agbada,
    Shoes,
    Casuals,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Kaftan,
        ProductCategory::Agbada,
        ProductCategory::Shoes,
        ProductCategory::Casuals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Kaftan => "kaftan",
            ProductCategory::Agbada => "agbada",
            ProductCategory::Shoes => "shoes",
            ProductCategory::Casuals => "casuals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Kaftan => "Kaftan",
            ProductCategory::Agbada => "Agbada",
            ProductCategory::Shoes => "Shoes",
            ProductCategory::Casuals => "Casuals",
        }
    }

    pub fn parse(s: &str) -> Option<ProductCategory> {
        match s.to_lowercase().as_str() {
            "kaftan" => Some(ProductCategory::Kaftan),
            "agbada" => Some(ProductCategory::Agbada),
            "shoes" => Some(ProductCategory::Shoes),
            "casuals" => Some(ProductCategory::Casuals),
            _ => None,
        }
    }

    /// Specific items offered for the category. An order item's
    /// `specific_item` must come from this list.
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            ProductCategory::Kaftan => &[
                "Classic Kaftan",
                "Embroidered Kaftan",
                "Long Sleeve Kaftan",
                "Short Sleeve Kaftan",
                "Ceremonial Kaftan",
                "Casual Kaftan",
                "Printed Kaftan",
                "Designer Kaftan",
            ],
            ProductCategory::Agbada => &[
                "Traditional Agbada",
                "Embroidered Agbada",
                "Simple Agbada",
                "Ceremonial Agbada",
                "Wedding Agbada",
                "Festival Agbada",
                "Royal Agbada",
                "Modern Agbada",
            ],
            ProductCategory::Shoes => &[
                "Oxford Shoes",
                "Loafers",
                "Brogues",
                "Derby Shoes",
                "Monk Strap",
                "Chelsea Boots",
                "Dress Boots",
                "Casual Sneakers",
                "Formal Sandals",
                "Traditional Shoes",
            ],
            ProductCategory::Casuals => &[
                "Polo Shirt",
                "Casual Shirt",
                "T-Shirt",
                "Chinos",
                "Jeans",
                "Shorts",
                "Casual Blazer",
                "Hoodie",
                "Sweatshirt",
                "Casual Trousers",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ProductCategory::parse("Kaftan"), Some(ProductCategory::Kaftan));
        assert_eq!(ProductCategory::parse("AGBADA"), Some(ProductCategory::Agbada));
        assert_eq!(ProductCategory::parse("slippers"), None);
    }

    #[test]
    fn test_every_category_has_items() {
        for category in ProductCategory::ALL {
            assert!(!category.items().is_empty());
        }
    }
}
