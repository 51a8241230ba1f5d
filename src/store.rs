use argon2::{self, Config as ArgonConfig};
use chrono::Utc;
use futures::stream::StreamExt;
use log::info;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Cursor, Database};
use rand::Rng;
use uuid::Uuid;

use crate::error::{is_duplicate_key, SeedError};
use crate::models::{Order, OrderStatus, PaymentMethod, Product, ShippingInfo, User};
use crate::schema::{ORDERS, PRODUCTS, USERS};

async fn collect<T>(mut cursor: Cursor<T>) -> Result<Vec<T>, mongodb::error::Error>
where
    T: serde::de::DeserializeOwned + Unpin + Send + Sync,
{
    let mut items = vec![];
    while let Some(result) = cursor.next().await {
        items.push(result?);
    }
    Ok(items)
}

async fn find_products(db: &Database, filter: Document) -> Result<Vec<Product>, SeedError> {
    let cursor = db.collection::<Product>(PRODUCTS).find(filter, None).await?;
    Ok(collect(cursor).await?)
}

pub async fn find_product_by_name(db: &Database, name: &str) -> Result<Option<Product>, SeedError> {
    let filter = doc! { "name": name };
    Ok(db.collection::<Product>(PRODUCTS).find_one(filter, None).await?)
}

/// Full-text search over product names and descriptions. Requires the text index.
pub async fn search_products(db: &Database, term: &str) -> Result<Vec<Product>, SeedError> {
    find_products(db, doc! { "$text": { "$search": term } }).await
}

pub async fn products_by_category(db: &Database, category: &str) -> Result<Vec<Product>, SeedError> {
    find_products(db, doc! { "category": category }).await
}

pub async fn featured_products(db: &Database) -> Result<Vec<Product>, SeedError> {
    find_products(db, doc! { "featured": true }).await
}

/// Stores a new account with an argon2-hashed password. The unique index on
/// `email` turns a second registration for the same address into
/// [`SeedError::DuplicateEmail`].
pub async fn register_user(db: &Database, email: &str, password: &str) -> Result<User, SeedError> {
    if email.trim().is_empty() {
        return Err(SeedError::MissingCredential("email"));
    }
    if password.is_empty() {
        return Err(SeedError::MissingCredential("password"));
    }

    let salt: [u8; 16] = rand::thread_rng().gen();
    let hashed_password = argon2::hash_encoded(password.as_bytes(), &salt, &ArgonConfig::default())?;

    let mut user = User {
        object_id: None,
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        password: hashed_password,
        created_at: Utc::now(),
    };

    match db.collection::<User>(USERS).insert_one(&user, None).await {
        Ok(result) => {
            user.object_id = result.inserted_id.as_object_id();
            info!("registered user {}", user.id);
            Ok(user)
        }
        Err(e) if is_duplicate_key(&e) => Err(SeedError::DuplicateEmail(email.to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Looks up a user by email and checks the password against the stored hash.
pub async fn authenticate(db: &Database, email: &str, password: &str) -> Result<Option<User>, SeedError> {
    let user = db
        .collection::<User>(USERS)
        .find_one(doc! { "email": email }, None)
        .await?;

    let Some(user) = user else {
        return Ok(None);
    };
    if argon2::verify_encoded(&user.password, password.as_bytes())? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

/// Records a confirmed order for the given products, totalling their current
/// prices. Like a cart, each product counts once however often it is listed.
pub async fn place_order(
    db: &Database,
    user: &User,
    product_ids: &[ObjectId],
    shipping_info: ShippingInfo,
    payment_method: PaymentMethod,
) -> Result<Order, SeedError> {
    if product_ids.is_empty() {
        return Err(SeedError::EmptyOrder);
    }
    if let Some(field) = shipping_info.missing_field() {
        return Err(SeedError::MissingShippingField(field));
    }

    let mut ids: Vec<ObjectId> = Vec::with_capacity(product_ids.len());
    for id in product_ids {
        if !ids.contains(id) {
            ids.push(*id);
        }
    }

    let products = find_products(db, doc! { "_id": { "$in": ids.clone() } }).await?;

    let unknown: Vec<String> = ids
        .iter()
        .filter(|id| !products.iter().any(|p| p.id.as_ref() == Some(*id)))
        .map(|id| id.to_hex())
        .collect();
    if !unknown.is_empty() {
        return Err(SeedError::UnknownProducts(unknown));
    }

    let total: i64 = ids
        .iter()
        .filter_map(|id| products.iter().find(|p| p.id.as_ref() == Some(id)))
        .map(|p| p.price)
        .sum();

    let mut order = Order {
        id: None,
        user_id: user.id.clone(),
        user_email: user.email.clone(),
        items: ids.iter().map(|id| id.to_hex()).collect(),
        total,
        shipping_info,
        payment_method,
        status: OrderStatus::Confirmed,
        created_at: Utc::now(),
    };

    let result = db.collection::<Order>(ORDERS).insert_one(&order, None).await?;
    order.id = result.inserted_id.as_object_id();
    info!("placed order for user {} totalling {}", order.user_id, order.total);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::options::ClientOptions;
    use mongodb::Client;

    // The driver connects lazily, so input checks that fail before any
    // query never touch this address.
    async fn offline_db() -> Database {
        let options = ClientOptions::parse("mongodb://127.0.0.1:9").await.unwrap();
        Client::with_options(options).unwrap().database("ecommerce_offline")
    }

    fn user() -> User {
        User {
            object_id: None,
            id: Uuid::new_v4().to_string(),
            email: "asha@example.com".to_string(),
            password: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            pincode: "560001".to_string(),
        }
    }

    #[tokio::test]
    async fn register_rejects_blank_credentials() {
        let db = offline_db().await;

        let err = register_user(&db, "  ", "hunter2").await.unwrap_err();
        assert!(matches!(err, SeedError::MissingCredential("email")));

        let err = register_user(&db, "asha@example.com", "").await.unwrap_err();
        assert!(matches!(err, SeedError::MissingCredential("password")));
    }

    #[tokio::test]
    async fn empty_cart_is_not_an_order() {
        let db = offline_db().await;
        let err = place_order(&db, &user(), &[], shipping(), PaymentMethod::Upi)
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::EmptyOrder));
    }

    #[tokio::test]
    async fn blank_shipping_field_is_rejected() {
        let db = offline_db().await;
        let mut incomplete = shipping();
        incomplete.phone = String::new();

        let err = place_order(&db, &user(), &[ObjectId::new()], incomplete, PaymentMethod::Upi)
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::MissingShippingField("phone")));
    }
}
