use prato_sql::{SQLStore, Value};

use crate::service::{ReportsError, ReportsService};

/// One review as fed into prompt composition.
#[derive(Debug, Clone)]
pub struct ReviewSample {
    pub reviewer_name: String,
    pub rating: i64,
    pub review_text: Option<String>,
}

impl ReportsService {
    /// The restaurant's most recent reviews, newest first, capped at `limit`.
    pub(crate) fn recent_reviews(
        &self,
        restaurant_id: i64,
        limit: u32,
    ) -> Result<Vec<ReviewSample>, ReportsError> {
        let rows = self.sql.query(
            &format!(
                "SELECT reviewer_name, rating, review_text FROM reviews
                 WHERE restaurant_id = ?1
                 ORDER BY created_at DESC, id DESC LIMIT {}",
                limit
            ),
            &[Value::Integer(restaurant_id)],
        )?;
        rows.iter()
            .map(|row| {
                Ok(ReviewSample {
                    reviewer_name: row
                        .get_str("reviewer_name")
                        .ok_or_else(|| ReportsError::Internal("missing reviewer_name column".into()))?
                        .to_string(),
                    rating: row
                        .get_i64("rating")
                        .ok_or_else(|| ReportsError::Internal("missing rating column".into()))?,
                    review_text: row.get_str("review_text").map(str::to_string),
                })
            })
            .collect()
    }

    pub(crate) fn restaurant_tags(&self, id: i64) -> Result<Vec<String>, ReportsError> {
        self.tags_from("restaurants", id)
            .and_then(|t| t.ok_or(ReportsError::RestaurantNotFound))
    }

    pub(crate) fn client_tags(&self, id: i64) -> Result<Vec<String>, ReportsError> {
        // A resolved session implies the client row exists; an empty list
        // is the safe fallback either way.
        Ok(self.tags_from("clients", id)?.unwrap_or_default())
    }

    pub(crate) fn restaurant_exists(&self, id: i64) -> Result<bool, ReportsError> {
        let rows = self.sql.query(
            "SELECT id FROM restaurants WHERE id = ?1",
            &[Value::Integer(id)],
        )?;
        Ok(!rows.is_empty())
    }

    /// Tag list from the record's `data` JSON document, or None when the
    /// row itself is missing.
    fn tags_from(&self, table: &str, id: i64) -> Result<Option<Vec<String>>, ReportsError> {
        let rows = self.sql.query(
            &format!("SELECT data FROM {} WHERE id = ?1", table),
            &[Value::Integer(id)],
        )?;
        let Some(row) = rows.first() else {
            return Ok(None);
        };
        let data = row
            .get_str("data")
            .ok_or_else(|| ReportsError::Internal("missing data column".into()))?;
        let value: serde_json::Value = serde_json::from_str(data)
            .map_err(|e| ReportsError::Internal(e.to_string()))?;
        let tags = value
            .get("tags")
            .and_then(|t| t.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|t| t.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        Ok(Some(tags))
    }
}
