use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// A catalog entry. Prices are in the smallest currency unit.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: String,
    pub category: String,
    pub stock: i32,
    pub featured: bool,
}

impl Product {
    /// Checks the invariants the store does not enforce on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category must not be empty".to_string());
        }
        if self.price <= 0 {
            return Err(format!("price must be positive, got {}", self.price));
        }
        if self.stock < 0 {
            return Err(format!("stock must not be negative, got {}", self.stock));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub id: String,
    pub email: String,
    pub password: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
}

impl ShippingInfo {
    /// Name of the first blank field, in form order.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("pincode", &self.pincode),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "UPI")]
    Upi,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Confirmed,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub user_email: String,
    pub items: Vec<String>,
    pub total: i64,
    pub shipping_info: ShippingInfo,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson};

    fn product() -> Product {
        Product {
            id: None,
            name: "Desk Lamp".to_string(),
            price: 1999,
            description: "Adjustable LED lamp".to_string(),
            image: "https://example.com/lamp.jpg".to_string(),
            category: "Furniture".to_string(),
            stock: 4,
            featured: false,
        }
    }

    #[test]
    fn unsaved_product_has_no_id_field() {
        let doc = bson::to_document(&product()).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get("price"), Some(&Bson::Int64(1999)));
        assert_eq!(doc.get("stock"), Some(&Bson::Int32(4)));
        assert_eq!(doc.get("featured"), Some(&Bson::Boolean(false)));
    }

    #[test]
    fn validate_rejects_non_positive_price_and_negative_stock() {
        assert!(product().validate().is_ok());

        let mut free = product();
        free.price = 0;
        assert!(free.validate().unwrap_err().contains("price"));

        let mut oversold = product();
        oversold.stock = -1;
        assert!(oversold.validate().unwrap_err().contains("stock"));

        let mut unnamed = product();
        unnamed.name = "  ".to_string();
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn shipping_reports_first_blank_field() {
        let mut shipping = ShippingInfo {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            pincode: "560001".to_string(),
        };
        assert_eq!(shipping.missing_field(), None);

        shipping.city = " ".to_string();
        shipping.pincode = String::new();
        assert_eq!(shipping.missing_field(), Some("city"));
    }

    #[test]
    fn payment_methods_use_storefront_labels() {
        let doc = bson::to_bson(&PaymentMethod::CashOnDelivery).unwrap();
        assert_eq!(doc, Bson::String("Cash on Delivery".to_string()));
        let back: PaymentMethod = bson::from_bson(Bson::String("UPI".to_string())).unwrap();
        assert_eq!(back, PaymentMethod::Upi);
    }
}
