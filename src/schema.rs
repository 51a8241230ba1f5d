use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

pub const DATABASE_NAME: &str = "ecommerce_db";

pub const USERS: &str = "users";
pub const PRODUCTS: &str = "products";
pub const ORDERS: &str = "orders";

/// Collections created by the seeder, in creation order.
pub const COLLECTIONS: [&str; 3] = [USERS, PRODUCTS, ORDERS];

/// An index together with the collection it belongs to.
#[derive(Debug, Clone)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub model: IndexModel,
}

impl IndexSpec {
    fn new(collection: &'static str, model: IndexModel) -> Self {
        IndexSpec { collection, model }
    }
}

pub fn indexes() -> Vec<IndexSpec> {
    vec![
        // storefront search box
        IndexSpec::new(
            PRODUCTS,
            IndexModel::builder()
                .keys(doc! { "name": "text", "description": "text" })
                .build(),
        ),
        IndexSpec::new(
            PRODUCTS,
            IndexModel::builder().keys(doc! { "category": 1 }).build(),
        ),
        IndexSpec::new(
            PRODUCTS,
            IndexModel::builder().keys(doc! { "featured": 1 }).build(),
        ),
        IndexSpec::new(
            USERS,
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        ),
        IndexSpec::new(
            ORDERS,
            IndexModel::builder().keys(doc! { "user_id": 1 }).build(),
        ),
    ]
}
