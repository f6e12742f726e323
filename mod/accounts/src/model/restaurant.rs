use serde::{Deserialize, Serialize};

/// A registered restaurant. The row id lives in its own column; everything
/// else round-trips through the JSON `data` column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    /// Autoincremented row id, set from the column on load.
    #[serde(skip)]
    pub id: i64,

    /// Business display name.
    pub name: String,

    /// Tax registration number.
    pub tax_id: String,

    /// Login email (globally unique).
    pub email: String,

    /// Argon2id digest. The plaintext password is never stored.
    pub password_hash: String,

    /// Free-text labels, trimmed, order preserved.
    #[serde(default)]
    pub tags: Vec<String>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Public view of a restaurant — no credentials, no tax id.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPublic {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl From<Restaurant> for RestaurantPublic {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            tags: r.tags,
            created_at: r.created_at,
        }
    }
}

/// Input for restaurant registration.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRestaurant {
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
