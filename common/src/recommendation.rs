//! Shared models for the filter-then-query recommendation flow.

use serde::{Deserialize, Deserializer, Serialize};

use crate::recommend_const::NOT_AVAILABLE;


/// Response of `/get_filtered_names`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilteredNames {
    #[serde(default)]
    pub names: Vec<String>,
}

/// Request body of `/query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecommendationQuery {
    pub question: String,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub image_url: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub website_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instagram_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub restaurant_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub district: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meal_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_level: String,
}

impl Restaurant {
    pub fn restaurant_type_or_placeholder(&self) -> &str {
        or_placeholder(&self.restaurant_type)
    }

    pub fn district_or_placeholder(&self) -> &str {
        or_placeholder(&self.district)
    }

    pub fn meal_type_or_placeholder(&self) -> &str {
        or_placeholder(&self.meal_type)
    }

    pub fn price_level_or_placeholder(&self) -> &str {
        or_placeholder(&self.price_level)
    }
}

/// `value`, or the "Niet beschikbaar" placeholder when it is empty.
pub fn or_placeholder(value: &str) -> &str {
    if value.is_empty() { NOT_AVAILABLE } else { value }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
