//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::ingredient::IngredientCategory;
use super::size::SizeKey;

/// Order lifecycle status
///
/// Any status may move to any other; `Delivered` stamps the delivery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Online,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    #[default]
    Pickup,
    Delivery,
}

impl DeliveryType {
    /// Fixed lead time in minutes
    pub fn lead_time_minutes(&self) -> i64 {
        match self {
            Self::Pickup => 20,
            Self::Delivery => 45,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSource {
    #[default]
    Web,
    Mobile,
    Phone,
}

fn default_country() -> String {
    "USA".to_string()
}

/// Postal address for delivery orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, max = 200, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub state: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub zip_code: String,
    #[serde(default = "default_country")]
    #[validate(length(max = 100))]
    pub country: String,
}

/// `^\+?[\d\s\-\(\)]{10,}$`
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'));

    if allowed && body.chars().count() >= 10 {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Please enter a valid phone number".into());
        Err(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Customer name must be 1-100 characters"
    ))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Please enter a valid email"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub address: Option<Address>,
}

/// One order line. Duplicate ingredient selections fold into `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub ingredient_id: u32,
    /// Name snapshot at order time
    pub name: String,
    pub category: IngredientCategory,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    /// Protein for the whole line, grams
    pub protein: f64,
    /// Weight for the whole line, grams
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub base_price: f64,
    pub ingredients_price: f64,
    pub total_price: f64,
    pub total_protein: f64,
    pub total_weight: f64,
    pub item_count: u32,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// `ORD-YYYYMMDD-NNN`
    pub order_number: String,
    pub customer_info: CustomerInfo,
    pub size: SizeKey,
    pub items: Vec<OrderItem>,
    pub summary: OrderSummary,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub delivery_type: DeliveryType,
    #[serde(default)]
    pub special_instructions: String,
    pub order_source: OrderSource,
    pub estimated_delivery_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str) -> CustomerInfo {
        CustomerInfo {
            name: name.to_string(),
            email: None,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("5551234567").is_ok());
        assert!(validate_phone("555-1234").is_err());
        assert!(validate_phone("555123456x").is_err());
    }

    #[test]
    fn test_customer_info_validation() {
        assert!(customer("Guest").validate().is_ok());
        assert!(customer("").validate().is_err());
        assert!(customer(&"x".repeat(101)).validate().is_err());

        let mut c = customer("Ana");
        c.email = Some("not-an-email".to_string());
        assert!(c.validate().is_err());
        c.email = Some("ana@example.com".to_string());
        c.phone = Some("+44 20 7946 0958".to_string());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_nested_address_validation() {
        let mut c = customer("Ana");
        c.address = Some(Address {
            street: String::new(),
            city: "Springfield".to_string(),
            state: String::new(),
            zip_code: String::new(),
            country: default_country(),
        });
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_address_country_defaults() {
        let addr: Address =
            serde_json::from_str(r#"{"street":"1 Main St","city":"Springfield"}"#).unwrap();
        assert_eq!(addr.country, "USA");
    }

    #[test]
    fn test_lead_times() {
        assert_eq!(DeliveryType::Pickup.lead_time_minutes(), 20);
        assert_eq!(DeliveryType::Delivery.lead_time_minutes(), 45);
    }
}
