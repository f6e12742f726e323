use serde::{Deserialize, Serialize};

/// One row of the catalog listing: restaurant identity plus rating
/// aggregates computed over its reviews.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    /// Mean of all ratings, rounded to one decimal. 0.0 when unreviewed.
    pub average_rating: f64,
    pub review_count: i64,
}

/// Query parameters for the catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantQuery {
    /// Exact-id lookup. Takes precedence over every other parameter.
    pub id: Option<i64>,
    /// Case-insensitive substring match on the restaurant name.
    pub search: Option<String>,
    /// Shuffle the result order. Ignored when `search` is set.
    #[serde(default)]
    pub random: bool,
    pub limit: Option<u32>,
}
