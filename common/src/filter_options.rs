//! Filter categories, the option sets served for them and the selections sent back.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    MealType,
    District,
    RestaurantType,
    PriceLevel,
}

impl FilterCategory {
    /// Render order of the filter groups.
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::MealType,
        FilterCategory::District,
        FilterCategory::RestaurantType,
        FilterCategory::PriceLevel,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            FilterCategory::MealType => "meal_type",
            FilterCategory::District => "district",
            FilterCategory::RestaurantType => "restaurant_type",
            FilterCategory::PriceLevel => "price_level",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterCategory::MealType => "Maaltijdtype",
            FilterCategory::District => "District",
            FilterCategory::RestaurantType => "Type",
            FilterCategory::PriceLevel => "Prijsniveau",
        }
    }

    pub fn container_id(&self) -> String {
        format!("{}_options", self.field_name())
    }

    /// DOM id of the checkbox for `option` inside this category's container.
    pub fn checkbox_id(&self, option: &str) -> String {
        format!("{}_{}", self.container_id(), option)
    }
}


/// Option values per category, as served by `/get_filter_options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterOptionSet {
    pub meal_type: Vec<String>,
    pub district: Vec<String>,
    pub restaurant_type: Vec<String>,
    pub price_level: Vec<String>,
}

impl FilterOptionSet {
    pub fn options(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::MealType => &self.meal_type,
            FilterCategory::District => &self.district,
            FilterCategory::RestaurantType => &self.restaurant_type,
            FilterCategory::PriceLevel => &self.price_level,
        }
    }

    /// Trimmed, non-empty, first-occurrence-unique options for `category`, in served order.
    pub fn normalized_options(&self, category: FilterCategory) -> Vec<String> {
        let mut seen = HashSet::new();
        self.options(category)
            .iter()
            .map(|option| option.trim())
            .filter(|option| !option.is_empty())
            .filter(|option| seen.insert(option.to_string()))
            .map(|option| option.to_string())
            .collect()
    }
}


/// Checked values per category; this is the `/get_filtered_names` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectedFilters {
    pub meal_type: Vec<String>,
    pub district: Vec<String>,
    pub restaurant_type: Vec<String>,
    pub price_level: Vec<String>,
}

impl SelectedFilters {
    pub fn values_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::MealType => &mut self.meal_type,
            FilterCategory::District => &mut self.district,
            FilterCategory::RestaurantType => &mut self.restaurant_type,
            FilterCategory::PriceLevel => &mut self.price_level,
        }
    }
}
