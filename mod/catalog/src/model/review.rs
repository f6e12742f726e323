use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub restaurant_id: i64,
    pub reviewer_name: String,
    pub rating: i64,
    pub review_text: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub restaurant_id: i64,
    pub reviewer_name: String,
    /// Whole stars, 1 through 5.
    pub rating: i64,
    pub review_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewQuery {
    pub restaurant_id: i64,
    pub limit: Option<u32>,
}
