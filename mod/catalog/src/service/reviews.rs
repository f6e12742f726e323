use prato_core::now_rfc3339;
use prato_sql::{Row, SQLStore, Value};

use crate::model::{CreateReview, Review};
use crate::service::{CatalogError, CatalogService};

const DEFAULT_LIMIT: u32 = 50;

impl CatalogService {
    /// Append a review. Ratings are whole stars 1 through 5; once stored
    /// a review is never edited or deleted.
    pub fn submit_review(&self, input: &CreateReview) -> Result<Review, CatalogError> {
        let name = input.reviewer_name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("reviewer_name is required".into()));
        }
        if !(1..=5).contains(&input.rating) {
            return Err(CatalogError::Validation(
                "rating must be an integer between 1 and 5".into(),
            ));
        }
        if !self.restaurant_exists(input.restaurant_id)? {
            return Err(CatalogError::RestaurantNotFound);
        }

        let created_at = now_rfc3339();
        let text = input
            .review_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let id = self.sql.insert(
            "INSERT INTO reviews (restaurant_id, reviewer_name, rating, review_text, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            &[
                Value::Integer(input.restaurant_id),
                Value::Text(name.to_string()),
                Value::Integer(input.rating),
                text.map(|t| Value::Text(t.to_string())).unwrap_or(Value::Null),
                Value::Text(created_at.clone()),
            ],
        )?;

        tracing::info!(
            restaurant_id = input.restaurant_id,
            rating = input.rating,
            "review submitted"
        );

        Ok(Review {
            id,
            restaurant_id: input.restaurant_id,
            reviewer_name: name.to_string(),
            rating: input.rating,
            review_text: text.map(str::to_string),
            created_at,
        })
    }

    /// Reviews for one restaurant, most recent first.
    pub fn list_reviews(
        &self,
        restaurant_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<Review>, CatalogError> {
        if !self.restaurant_exists(restaurant_id)? {
            return Err(CatalogError::RestaurantNotFound);
        }
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let rows = self.sql.query(
            &format!(
                "SELECT id, restaurant_id, reviewer_name, rating, review_text, created_at
                 FROM reviews WHERE restaurant_id = ?1
                 ORDER BY created_at DESC, id DESC LIMIT {}",
                limit
            ),
            &[Value::Integer(restaurant_id)],
        )?;
        rows.iter().map(review_from_row).collect()
    }
}

fn review_from_row(row: &Row) -> Result<Review, CatalogError> {
    let column = |name: &str| CatalogError::Internal(format!("missing {} column", name));
    Ok(Review {
        id: row.get_i64("id").ok_or_else(|| column("id"))?,
        restaurant_id: row
            .get_i64("restaurant_id")
            .ok_or_else(|| column("restaurant_id"))?,
        reviewer_name: row
            .get_str("reviewer_name")
            .ok_or_else(|| column("reviewer_name"))?
            .to_string(),
        rating: row.get_i64("rating").ok_or_else(|| column("rating"))?,
        review_text: row.get_str("review_text").map(str::to_string),
        created_at: row
            .get_str("created_at")
            .ok_or_else(|| column("created_at"))?
            .to_string(),
    })
}
