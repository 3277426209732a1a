use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Asia::Kolkata;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Payload of the admin "add category" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub description: String,
}

/// A product as listed by `GET /api/v1/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    /// `true` for active listings.
    #[serde(default)]
    pub status: bool,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

impl Product {
    /// Creates a listing with only the fields the product table shows.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64, status: bool) -> Self {
        Self {
            id: None,
            code: None,
            name: name.into(),
            excerpt: None,
            description: description.into(),
            category: None,
            price,
            status,
            created_at: None,
        }
    }

    /// Status column label.
    pub fn status_label(&self) -> &'static str {
        if self.status {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Creation date as the product table shows it, e.g. `05-Mar-24` (Asia/Kolkata).
    pub fn created_at_label(&self) -> Option<String> {
        self.created_at.as_deref().and_then(format_created_at)
    }

    /// Label/value pairs of the expanded product row.
    pub fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Code", self.code.clone().unwrap_or_default()),
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("Status", self.status_label().to_string()),
            ("Price", self.price.to_string()),
            ("Created At", self.created_at_label().unwrap_or_default()),
        ]
    }
}

/// Formats a UTC timestamp as `DD-MMM-YY` in Asia/Kolkata.
///
/// Accepts RFC 3339 and offset-less ISO timestamps (read as UTC). Returns `None` for
/// anything else.
pub fn format_created_at(raw: &str) -> Option<String> {
    let utc = match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at.with_timezone(&Utc),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()?
            .and_utc(),
    };
    Some(utc.with_timezone(&Kolkata).format("%d-%b-%y").to_string())
}

/// Payload of the admin "add product" form.
///
/// `price` is optional so that an empty price field can be reported by validation
/// instead of being silently read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub code: String,
    pub name: String,
    pub excerpt: String,
    pub description: String,
    pub category: String,
    pub price: Option<f64>,
    pub status: bool,
}

/// Body of `GET /api/v1/categories`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Body of `GET /api/v1/products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Body of `GET /api/v1/products/{id}`: either wrapped in `{"product": ...}` or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductEnvelope {
    Wrapped { product: Product },
    Bare(Product),
}

impl ProductEnvelope {
    pub fn into_product(self) -> Product {
        match self {
            ProductEnvelope::Wrapped { product } => product,
            ProductEnvelope::Bare(product) => product,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_parses_mongo_ids() {
        let body = r#"{"products": [
            {"_id": "p1", "name": "Lamp", "description": "A desk lamp", "price": 12.5, "status": true, "createdAt": "2024-01-01T00:00:00Z"}
        ]}"#;
        let list: ProductList = serde_json::from_str(body).unwrap();
        assert_eq!(list.products.len(), 1);
        assert_eq!(list.products[0].id.as_deref(), Some("p1"));
        assert_eq!(list.products[0].status_label(), "Active");
    }

    #[test]
    fn test_created_at_accepts_snake_case() {
        let product: Product = serde_json::from_str(
            r#"{"name": "Lamp", "code": "LMP001", "status": false, "created_at": "2024-03-05T20:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(product.created_at.as_deref(), Some("2024-03-05T20:00:00.000Z"));
        // 20:00 UTC is past midnight in Kolkata
        assert_eq!(product.created_at_label().as_deref(), Some("06-Mar-24"));

        let detail = product.detail();
        assert!(detail.contains(&("Code", "LMP001".to_string())));
        assert!(detail.contains(&("Status", "Inactive".to_string())));
        assert!(detail.contains(&("Created At", "06-Mar-24".to_string())));
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(format_created_at("2024-01-01T00:00:00Z").as_deref(), Some("01-Jan-24"));
        assert_eq!(format_created_at("2023-12-31T19:00:00").as_deref(), Some("01-Jan-24"));
        assert_eq!(format_created_at("2024-07-15T08:00:00+05:30").as_deref(), Some("15-Jul-24"));
        assert_eq!(format_created_at("yesterday"), None);
        assert_eq!(Product::new("Lamp", "", 1.0, true).created_at_label(), None);
    }

    #[test]
    fn test_product_envelope_accepts_both_shapes() {
        let wrapped: ProductEnvelope =
            serde_json::from_str(r#"{"product": {"name": "Lamp"}}"#).unwrap();
        let bare: ProductEnvelope = serde_json::from_str(r#"{"name": "Lamp"}"#).unwrap();
        assert_eq!(wrapped.into_product().name, "Lamp");
        assert_eq!(bare.into_product().name, "Lamp");
    }
}
