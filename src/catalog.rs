use crate::models::Product;

/// Raw catalog rows: name, price, description, image, category, stock, featured.
const SAMPLE_PRODUCTS: [(&str, i64, &str, &str, &str, i32, bool); 9] = [
    (
        "MacBook Pro 14-inch",
        199900,
        "Apple MacBook Pro with M2 Pro chip, 16GB RAM, 512GB SSD. Perfect for professionals and creatives.",
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400&h=300&fit=crop",
        "Electronics",
        15,
        true,
    ),
    (
        "iPhone 15 Pro",
        134900,
        "Latest iPhone with A17 Pro chip, 128GB storage, and advanced camera system.",
        "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400&h=300&fit=crop",
        "Electronics",
        25,
        true,
    ),
    (
        "Sony WH-1000XM5",
        29990,
        "Industry-leading noise canceling wireless headphones with 30-hour battery life.",
        "https://images.unsplash.com/photo-1546435770-a3e426bf472b?w=400&h=300&fit=crop",
        "Electronics",
        30,
        false,
    ),
    (
        "Dell XPS 13",
        89990,
        "Ultra-thin laptop with Intel Core i7, 16GB RAM, and stunning InfinityEdge display.",
        "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400&h=300&fit=crop",
        "Electronics",
        12,
        false,
    ),
    (
        "Samsung Galaxy Tab S9",
        72999,
        "Premium Android tablet with S Pen, perfect for productivity and entertainment.",
        "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400&h=300&fit=crop",
        "Electronics",
        20,
        true,
    ),
    (
        "Canon EOS R6 Mark II",
        239999,
        "Professional mirrorless camera with 24.2MP sensor and 4K video recording.",
        "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=400&h=300&fit=crop",
        "Electronics",
        8,
        false,
    ),
    (
        "Gaming Chair Pro",
        24999,
        "Ergonomic gaming chair with lumbar support, adjustable armrests, and premium materials.",
        "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop",
        "Furniture",
        18,
        false,
    ),
    (
        "Mechanical Keyboard RGB",
        8999,
        "Premium mechanical keyboard with RGB backlighting and tactile switches.",
        "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400&h=300&fit=crop",
        "Electronics",
        35,
        false,
    ),
    (
        "4K Webcam",
        12999,
        "Ultra HD webcam with auto-focus and noise-canceling microphone for streaming.",
        "https://images.unsplash.com/photo-1587614382346-4ec70e388b28?w=400&h=300&fit=crop",
        "Electronics",
        22,
        false,
    ),
];

/// The products loaded into a fresh `products` collection, in insertion order.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .iter()
        .map(
            |&(name, price, description, image, category, stock, featured)| Product {
                id: None,
                name: name.to_string(),
                price,
                description: description.to_string(),
                image: image.to_string(),
                category: category.to_string(),
                stock,
                featured,
            },
        )
        .collect()
}
