use prato_core::now_rfc3339;
use prato_sql::{SQLStore, Value};

use crate::model::{FavoriteAction, RestaurantSummary};
use crate::service::{CatalogError, CatalogService};

impl CatalogService {
    /// Add or remove a restaurant from a client's favorites. Adding an
    /// existing favorite is a conflict; removing an absent one is a no-op.
    pub fn set_favorite(
        &self,
        client_id: i64,
        restaurant_id: i64,
        action: FavoriteAction,
    ) -> Result<(), CatalogError> {
        match action {
            FavoriteAction::Add => {
                if !self.restaurant_exists(restaurant_id)? {
                    return Err(CatalogError::RestaurantNotFound);
                }
                let result = self.sql.insert(
                    "INSERT INTO favorites (client_id, restaurant_id, created_at)
                     VALUES (?1, ?2, ?3)",
                    &[
                        Value::Integer(client_id),
                        Value::Integer(restaurant_id),
                        Value::Text(now_rfc3339()),
                    ],
                );
                match result {
                    Ok(_) => Ok(()),
                    Err(e) if e.is_unique_violation() => Err(CatalogError::AlreadyFavorite),
                    Err(e) => Err(e.into()),
                }
            }
            FavoriteAction::Remove => {
                self.sql.exec(
                    "DELETE FROM favorites WHERE client_id = ?1 AND restaurant_id = ?2",
                    &[Value::Integer(client_id), Value::Integer(restaurant_id)],
                )?;
                Ok(())
            }
        }
    }

    /// Ids of every restaurant this client has marked as a favorite.
    pub fn list_favorite_ids(&self, client_id: i64) -> Result<Vec<i64>, CatalogError> {
        let rows = self.sql.query(
            "SELECT restaurant_id FROM favorites WHERE client_id = ?1 ORDER BY id",
            &[Value::Integer(client_id)],
        )?;
        rows.iter()
            .map(|row| {
                row.get_i64("restaurant_id")
                    .ok_or_else(|| CatalogError::Internal("missing restaurant_id column".into()))
            })
            .collect()
    }

    /// Favorited restaurants with the same aggregates as the catalog
    /// listing, restricted to the favorite set by inner join.
    pub fn list_favorite_restaurants(
        &self,
        client_id: i64,
    ) -> Result<Vec<RestaurantSummary>, CatalogError> {
        let rows = self.sql.query(
            "SELECT r.id, r.name,
                    COALESCE(AVG(rev.rating), 0) AS average_rating,
                    COUNT(rev.rating) AS review_count
             FROM favorites f
             JOIN restaurants r ON r.id = f.restaurant_id
             LEFT JOIN reviews rev ON rev.restaurant_id = r.id
             WHERE f.client_id = ?1
             GROUP BY r.id, r.name
             ORDER BY r.id",
            &[Value::Integer(client_id)],
        )?;
        rows.iter().map(super::restaurants::summary_from_row).collect()
    }
}
