//! The built-in product catalog.
//!
//! MiniBiscos sells a fixed line of bite-sized shortbread cookies, so the
//! catalog is a compile-time table rather than a database. Query helpers
//! preserve catalog order.

use crate::types::{CategoryFilter, Product, ProductCategory};

static PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Classic Butter",
        category: ProductCategory::Traditional,
        description: "Our signature classic shortbread cookies with the perfect balance of \
                      buttery flavor and delicate crumbly texture.",
        ingredients: "Wheat flour, butter, sugar, vanilla essence.",
        allergens: "Contains gluten, milk products.",
        image_urls: &["/assets/images/cookie-traditional.jpg"],
        featured: true,
    },
    Product {
        id: 2,
        name: "Cinnamon",
        category: ProductCategory::Traditional,
        description: "Our classic shortbread cookie enhanced with a delicious cinnamon flavor. \
                      A perfect balance of sweet and spice.",
        ingredients: "Wheat flour, butter, sugar, vanilla essence, cinnamon powder.",
        allergens: "Contains gluten, milk products.",
        image_urls: &["/assets/images/cinamom.png"],
        featured: true,
    },
    Product {
        id: 3,
        name: "Tres Leches",
        category: ProductCategory::Filled,
        description: "Our signature shortbread cookie with a rich, creamy milk flavor that \
                      takes you back to childhood.",
        ingredients: "Wheat flour, butter, sugar, vanilla essence, powdered milk, condensed \
                      milk.",
        allergens: "Contains gluten, milk products.",
        image_urls: &[
            "/assets/images/cookie-dulce-main.png",
            "/assets/images/cookie-dulce-alt1.png",
            "/assets/images/cookie-dulce-alt2.png",
        ],
        featured: true,
    },
    Product {
        id: 4,
        name: "Guava jam",
        category: ProductCategory::Filled,
        description: "Delicate shortbread cookies with sweet guava paste, providing a perfect \
                      balance of buttery texture and fruity flavor.",
        ingredients: "Wheat flour, butter, sugar, vanilla essence, guava paste.",
        allergens: "Contains gluten, milk products.",
        image_urls: &[
            "/assets/images/cookie-guava-filled.jpg",
            "/assets/images/cookie-guava-filled-alt.png",
        ],
        featured: true,
    },
    Product {
        id: 5,
        name: "Belgian Chocolate",
        category: ProductCategory::Chocolate,
        description: "Premium shortbread cookies elegantly coated with fine Belgian chocolate, \
                      offering a decadent treat that combines crumbly texture with rich \
                      chocolate flavor.",
        ingredients: "Wheat flour, butter, sugar, vanilla essence, Belgian chocolate.",
        allergens: "Contains gluten, milk products, may contain traces of nuts.",
        image_urls: &["/assets/images/cookie-belgian-chocolate.png"],
        featured: true,
    },
    Product {
        id: 6,
        name: "Cappuccino",
        category: ProductCategory::Coffee,
        description: "A coffee lover's delight! Our shortbread cookie with a rich coffee flavor \
                      for an aromatic experience.",
        ingredients: "Wheat flour, butter, sugar, vanilla essence, coffee powder, powdered \
                      milk.",
        allergens: "Contains gluten, milk products.",
        image_urls: &["/assets/images/capuccino.png"],
        featured: true,
    },
    Product {
        id: 7,
        name: "Passion Fruit",
        category: ProductCategory::Filled,
        description: "Our special shortbread cookie with a tropical twist, featuring the unique \
                      tangy flavor of passion fruit.",
        ingredients: "Wheat flour, butter, sugar, vanilla essence, passion fruit.",
        allergens: "Contains gluten, milk products.",
        image_urls: &["/assets/images/passionfruit.png"],
        featured: true,
    },
];

/// Every product, in catalog order.
pub fn all() -> &'static [Product] {
    PRODUCTS
}

/// Looks up a product by id.
pub fn by_id(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

/// Products matching `filter`, in catalog order.
pub fn by_category(filter: CategoryFilter) -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|product| filter.matches(product.category))
        .collect()
}

/// Featured products, in catalog order.
pub fn featured() -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|product| product.featured).collect()
}

/// Distinct categories in first-appearance order, matching the order of
/// the filter buttons on the products page.
pub fn categories() -> Vec<ProductCategory> {
    let mut seen = Vec::new();
    for product in PRODUCTS {
        if !seen.contains(&product.category) {
            seen.push(product.category);
        }
    }
    seen
}
