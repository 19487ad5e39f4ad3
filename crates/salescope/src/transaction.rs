//! The sale-transaction record

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// A single sale transaction as stored and served.
///
/// `id` is assigned by the store on insert and is absent on records that
/// have not been persisted yet. `source_id` is the identifier the seed feed
/// gave the record, used as the natural key when re-seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Sale price. Anything that is not a finite number reads as absent.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,

    /// Open-vocabulary category label
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub sold: bool,

    #[serde(with = "time::serde::rfc3339")]
    pub date_of_sale: OffsetDateTime,

    /// Product image URL, passed through untouched
    #[serde(default)]
    pub image: String,
}

impl Transaction {
    /// Create an unsold, unpriced transaction with the given title and sale date
    pub fn new(title: impl Into<String>, date_of_sale: OffsetDateTime) -> Self {
        Self {
            id: None,
            source_id: None,
            title: title.into(),
            description: String::new(),
            price: None,
            category: String::new(),
            sold: false,
            date_of_sale,
            image: String::new(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sold(mut self, sold: bool) -> Self {
        self.sold = sold;
        self
    }

    pub fn with_source_id(mut self, source_id: i64) -> Self {
        self.source_id = Some(source_id);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Price used for revenue sums; absent prices count as zero
    pub fn revenue(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) if n.is_finite() => Some(n),
        _ => None,
    })
}
