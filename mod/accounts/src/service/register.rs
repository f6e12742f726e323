use prato_core::{normalize_tags, now_rfc3339};
use prato_sql::Value;

use crate::model::{Client, ClientPublic, CreateClient, CreateRestaurant, Restaurant, RestaurantPublic};
use crate::service::{AccountsError, AccountsService, hash_password};

impl AccountsService {
    /// Register a restaurant. Email is globally unique.
    pub fn create_restaurant(
        &self,
        input: CreateRestaurant,
    ) -> Result<RestaurantPublic, AccountsError> {
        for (field, value) in [
            ("name", &input.name),
            ("tax_id", &input.tax_id),
            ("email", &input.email),
            ("password", &input.password),
        ] {
            if value.trim().is_empty() {
                return Err(AccountsError::Validation(format!("{} is required", field)));
            }
        }

        let record = Restaurant {
            id: 0,
            name: input.name.trim().to_string(),
            tax_id: input.tax_id.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash: hash_password(&input.password)?,
            tags: normalize_tags(input.tags),
            created_at: now_rfc3339(),
        };

        let data = serde_json::to_string(&record)
            .map_err(|e| AccountsError::Internal(e.to_string()))?;

        let id = self
            .sql
            .insert(
                "INSERT INTO restaurants (name, email, data, created_at) VALUES (?1, ?2, ?3, ?4)",
                &[
                    Value::Text(record.name.clone()),
                    Value::Text(record.email.clone()),
                    Value::Text(data),
                    Value::Text(record.created_at.clone()),
                ],
            )
            .map_err(|e| AccountsError::from_sql(e, "email is already registered"))?;

        Ok(RestaurantPublic {
            id,
            name: record.name,
            email: record.email,
            tags: record.tags,
            created_at: record.created_at,
        })
    }

    /// Register a client. Email and national id are each globally unique.
    pub fn create_client(&self, input: CreateClient) -> Result<ClientPublic, AccountsError> {
        for (field, value) in [
            ("first_name", &input.first_name),
            ("last_name", &input.last_name),
            ("national_id", &input.national_id),
            ("phone", &input.phone),
            ("email", &input.email),
            ("password", &input.password),
        ] {
            if value.trim().is_empty() {
                return Err(AccountsError::Validation(format!("{} is required", field)));
            }
        }

        let record = Client {
            id: 0,
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            national_id: input.national_id.trim().to_string(),
            phone: input.phone.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash: hash_password(&input.password)?,
            tags: normalize_tags(input.tags),
            created_at: now_rfc3339(),
        };

        let data = serde_json::to_string(&record)
            .map_err(|e| AccountsError::Internal(e.to_string()))?;

        let id = self
            .sql
            .insert(
                "INSERT INTO clients (email, national_id, data, created_at) VALUES (?1, ?2, ?3, ?4)",
                &[
                    Value::Text(record.email.clone()),
                    Value::Text(record.national_id.clone()),
                    Value::Text(data),
                    Value::Text(record.created_at.clone()),
                ],
            )
            .map_err(|e| AccountsError::from_sql(e, "email or national id is already registered"))?;

        Ok(ClientPublic {
            id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            tags: record.tags,
            created_at: record.created_at,
        })
    }

    /// Load a restaurant by id.
    pub fn get_restaurant(&self, id: i64) -> Result<Restaurant, AccountsError> {
        let rows = self
            .sql
            .query(
                "SELECT id, data FROM restaurants WHERE id = ?1",
                &[Value::Integer(id)],
            )
            .map_err(|e| AccountsError::Storage(e.to_string()))?;
        let row = rows
            .first()
            .ok_or_else(|| AccountsError::NotFound(format!("restaurant {} not found", id)))?;
        parse_record::<Restaurant>(row).map(|mut r| {
            r.id = id;
            r
        })
    }

    /// Load a client by id.
    pub fn get_client(&self, id: i64) -> Result<Client, AccountsError> {
        let rows = self
            .sql
            .query(
                "SELECT id, data FROM clients WHERE id = ?1",
                &[Value::Integer(id)],
            )
            .map_err(|e| AccountsError::Storage(e.to_string()))?;
        let row = rows
            .first()
            .ok_or_else(|| AccountsError::NotFound(format!("client {} not found", id)))?;
        parse_record::<Client>(row).map(|mut c| {
            c.id = id;
            c
        })
    }

    /// A restaurant's tag list (public — used by the review page).
    pub fn restaurant_tags(&self, id: i64) -> Result<Vec<String>, AccountsError> {
        Ok(self.get_restaurant(id)?.tags)
    }
}

fn parse_record<T: serde::de::DeserializeOwned>(row: &prato_sql::Row) -> Result<T, AccountsError> {
    let data = row
        .get_str("data")
        .ok_or_else(|| AccountsError::Internal("missing data column".into()))?;
    serde_json::from_str(data).map_err(|e| AccountsError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use prato_sql::SqliteStore;

    use super::*;
    use crate::service::AccountsConfig;

    fn test_service() -> Arc<AccountsService> {
        let sql = Arc::new(SqliteStore::open_in_memory().unwrap());
        AccountsService::new(sql, AccountsConfig::default()).unwrap()
    }

    fn restaurant_input() -> CreateRestaurant {
        CreateRestaurant {
            name: "Pizza X".to_string(),
            tax_id: "12.345.678/0001-00".to_string(),
            email: "owner@pizzax.example".to_string(),
            password: "orchard".to_string(),
            tags: vec![" pizza ".to_string(), "italian".to_string()],
        }
    }

    #[test]
    fn register_restaurant_assigns_sequential_ids() {
        let svc = test_service();
        let first = svc.create_restaurant(restaurant_input()).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.tags, vec!["pizza", "italian"]);

        let mut second = restaurant_input();
        second.email = "other@pizzax.example".to_string();
        assert_eq!(svc.create_restaurant(second).unwrap().id, 2);
    }

    #[test]
    fn register_restaurant_rejects_duplicate_email() {
        let svc = test_service();
        svc.create_restaurant(restaurant_input()).unwrap();
        let err = svc.create_restaurant(restaurant_input()).unwrap_err();
        assert!(matches!(err, AccountsError::Conflict(_)));
    }

    #[test]
    fn register_restaurant_requires_fields() {
        let svc = test_service();
        let mut input = restaurant_input();
        input.email = "  ".to_string();
        let err = svc.create_restaurant(input).unwrap_err();
        assert!(matches!(err, AccountsError::Validation(_)));
    }

    #[test]
    fn password_is_stored_hashed() {
        let svc = test_service();
        let created = svc.create_restaurant(restaurant_input()).unwrap();
        let loaded = svc.get_restaurant(created.id).unwrap();
        assert_ne!(loaded.password_hash, "orchard");
        assert!(crate::service::verify_password("orchard", &loaded.password_hash));
    }

    #[test]
    fn register_client_rejects_duplicate_national_id() {
        let svc = test_service();
        let input = CreateClient {
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            national_id: "123.456.789-00".to_string(),
            phone: "+55 11 91234-5678".to_string(),
            email: "ana@example.com".to_string(),
            password: "hibiscus".to_string(),
            tags: vec!["vegan".to_string()],
        };
        svc.create_client(input.clone()).unwrap();

        let mut dup = input;
        dup.email = "ana2@example.com".to_string();
        let err = svc.create_client(dup).unwrap_err();
        assert!(matches!(err, AccountsError::Conflict(_)));
    }

    #[test]
    fn restaurant_tags_lookup() {
        let svc = test_service();
        let created = svc.create_restaurant(restaurant_input()).unwrap();
        assert_eq!(svc.restaurant_tags(created.id).unwrap(), vec!["pizza", "italian"]);
        assert!(matches!(
            svc.restaurant_tags(999).unwrap_err(),
            AccountsError::NotFound(_)
        ));
    }
}
