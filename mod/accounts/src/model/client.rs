use serde::{Deserialize, Serialize};

/// A registered client (diner).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Autoincremented row id, set from the column on load.
    #[serde(skip)]
    pub id: i64,

    pub first_name: String,
    pub last_name: String,

    /// National identity number (globally unique).
    pub national_id: String,

    pub phone: String,

    /// Login email (globally unique).
    pub email: String,

    /// Argon2id digest.
    pub password_hash: String,

    /// Free-text labels used for recommendation matching.
    #[serde(default)]
    pub tags: Vec<String>,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Public view of a client — no credentials, no national id, no phone.
#[derive(Debug, Clone, Serialize)]
pub struct ClientPublic {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl From<Client> for ClientPublic {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            tags: c.tags,
            created_at: c.created_at,
        }
    }
}

/// Input for client registration.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
