use prato_sql::{Row, SQLStore, Value};

use crate::model::{RestaurantQuery, RestaurantSummary};
use crate::service::{CatalogError, CatalogService};

const BASE_SELECT: &str = "SELECT r.id, r.name,
        COALESCE(AVG(rev.rating), 0) AS average_rating,
        COUNT(rev.rating) AS review_count
    FROM restaurants r
    LEFT JOIN reviews rev ON rev.restaurant_id = r.id";

impl CatalogService {
    /// Catalog listing with per-restaurant rating aggregates. Lookup by
    /// id wins over search; search wins over the plain listing, and
    /// disables random ordering.
    pub fn list_restaurants(
        &self,
        query: &RestaurantQuery,
    ) -> Result<Vec<RestaurantSummary>, CatalogError> {
        if let Some(id) = query.id {
            return Ok(vec![self.get_restaurant_summary(id)?]);
        }

        let mut sql = String::from(BASE_SELECT);
        let mut params = Vec::new();
        let search = query.search.as_deref().map(str::trim).unwrap_or("");
        if !search.is_empty() {
            sql.push_str(" WHERE r.name LIKE '%' || ?1 || '%'");
            params.push(Value::Text(search.to_string()));
        }
        sql.push_str(" GROUP BY r.id, r.name");
        if query.random && search.is_empty() {
            sql.push_str(" ORDER BY RANDOM()");
        } else {
            sql.push_str(" ORDER BY r.id");
        }
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let rows = self.sql.query(&sql, &params)?;
        rows.iter().map(summary_from_row).collect()
    }

    pub fn get_restaurant_summary(&self, id: i64) -> Result<RestaurantSummary, CatalogError> {
        let sql = format!("{} WHERE r.id = ?1 GROUP BY r.id, r.name", BASE_SELECT);
        let rows = self.sql.query(&sql, &[Value::Integer(id)])?;
        let row = rows.first().ok_or(CatalogError::RestaurantNotFound)?;
        summary_from_row(row)
    }

    /// True when a restaurant row with this id exists.
    pub(crate) fn restaurant_exists(&self, id: i64) -> Result<bool, CatalogError> {
        let rows = self.sql.query(
            "SELECT id FROM restaurants WHERE id = ?1",
            &[Value::Integer(id)],
        )?;
        Ok(!rows.is_empty())
    }
}

pub(crate) fn summary_from_row(row: &Row) -> Result<RestaurantSummary, CatalogError> {
    let id = row
        .get_i64("id")
        .ok_or_else(|| CatalogError::Internal("missing id column".into()))?;
    let name = row
        .get_str("name")
        .ok_or_else(|| CatalogError::Internal("missing name column".into()))?
        .to_string();
    let average = row
        .get_f64("average_rating")
        .ok_or_else(|| CatalogError::Internal("missing average_rating column".into()))?;
    let count = row
        .get_i64("review_count")
        .ok_or_else(|| CatalogError::Internal("missing review_count column".into()))?;
    Ok(RestaurantSummary {
        id,
        name,
        average_rating: round_one_decimal(average),
        review_count: count,
    })
}

fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use crate::model::{CreateReview, RestaurantQuery};
    use crate::service::testutil::{seed_restaurant, service};
    use crate::service::CatalogError;

    fn review(restaurant_id: i64, rating: i64) -> CreateReview {
        CreateReview {
            restaurant_id,
            reviewer_name: "Ana".into(),
            rating,
            review_text: None,
        }
    }

    #[test]
    fn aggregates_average_and_count() {
        let (svc, sql) = service();
        let id = seed_restaurant(&sql, "Trattoria Bella");
        for rating in [5, 3, 4] {
            svc.submit_review(&review(id, rating)).unwrap();
        }

        let summary = svc.get_restaurant_summary(id).unwrap();
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.review_count, 3);
    }

    #[test]
    fn first_five_star_review_reads_five() {
        let (svc, sql) = service();
        let id = seed_restaurant(&sql, "Solo");
        svc.submit_review(&review(id, 5)).unwrap();

        let summary = svc.get_restaurant_summary(id).unwrap();
        assert_eq!(summary.average_rating, 5.0);
        assert_eq!(summary.review_count, 1);
    }

    #[test]
    fn unreviewed_restaurant_reads_zero() {
        let (svc, sql) = service();
        let id = seed_restaurant(&sql, "Quiet Corner");

        let summary = svc.get_restaurant_summary(id).unwrap();
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.review_count, 0);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let (svc, sql) = service();
        let id = seed_restaurant(&sql, "Rounding House");
        for rating in [5, 4, 4] {
            // mean 4.333... rounds to 4.3
            svc.submit_review(&review(id, rating)).unwrap();
        }

        let summary = svc.get_restaurant_summary(id).unwrap();
        assert_eq!(summary.average_rating, 4.3);
    }

    #[test]
    fn id_lookup_wins_over_search() {
        let (svc, sql) = service();
        let a = seed_restaurant(&sql, "Alpha");
        seed_restaurant(&sql, "Beta");

        let query = RestaurantQuery {
            id: Some(a),
            search: Some("Beta".into()),
            ..Default::default()
        };
        let rows = svc.list_restaurants(&query).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alpha");
    }

    #[test]
    fn search_matches_substring_case_insensitive() {
        let (svc, sql) = service();
        seed_restaurant(&sql, "La Piazza");
        seed_restaurant(&sql, "Piazza Grande");
        seed_restaurant(&sql, "Sushi Go");

        let query = RestaurantQuery {
            search: Some("piazza".into()),
            ..Default::default()
        };
        let rows = svc.list_restaurants(&query).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["La Piazza", "Piazza Grande"]);
    }

    #[test]
    fn limit_caps_listing() {
        let (svc, sql) = service();
        for i in 0..5 {
            seed_restaurant(&sql, &format!("Place {}", i));
        }

        let query = RestaurantQuery {
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(svc.list_restaurants(&query).unwrap().len(), 2);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (svc, _sql) = service();
        let err = svc.get_restaurant_summary(99).unwrap_err();
        assert!(matches!(err, CatalogError::RestaurantNotFound));
    }
}
